use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::cells::dtos::{CellResponseDto, CreateCellDto, UpdateCellDto};
use crate::features::cells::repositories::CellRepository;

pub const DUPLICATE_CELL_NAME: &str = "Duplicate cell name";
pub const ERROR_ADDING_CELL: &str = "Error adding cell";
pub const CELL_NOT_FOUND: &str = "Cell not found";

/// Service for cell operations
pub struct CellService {
    repository: Arc<dyn CellRepository>,
}

impl CellService {
    pub fn new(repository: Arc<dyn CellRepository>) -> Self {
        Self { repository }
    }

    /// List every cell, or only the caller's when `only_own` is set
    pub async fn list(
        &self,
        caller: &AuthenticatedUser,
        only_own: bool,
    ) -> Result<Vec<CellResponseDto>> {
        let cells = if only_own {
            self.repository.get_cells_by_user_id(caller.user_id()).await?
        } else {
            self.repository.get_all().await?
        };

        Ok(cells.into_iter().map(Into::into).collect())
    }

    /// Create a cell owned by the user registered under `dto.user_email`.
    ///
    /// The name check and the insert are separate statements; the UNIQUE
    /// constraint on `cells.name` catches whatever slips between them.
    pub async fn create(&self, dto: CreateCellDto) -> Result<CellResponseDto> {
        if self.repository.find_by_name(&dto.name).await?.is_some() {
            return Err(AppError::BadRequest(DUPLICATE_CELL_NAME.to_string()));
        }

        let owner_email = dto.user_email.clone();
        match self.repository.add_cell_by_user_email(dto.into()).await {
            Ok(Some(cell)) => {
                tracing::info!("Cell created: id={}, name={}", cell.id, cell.name);
                Ok(cell.into())
            }
            Ok(None) => {
                tracing::warn!("Cell not created: no user with email {}", owner_email);
                Err(AppError::BadRequest(ERROR_ADDING_CELL.to_string()))
            }
            Err(e) if e.is_unique_violation() => {
                Err(AppError::BadRequest(DUPLICATE_CELL_NAME.to_string()))
            }
            Err(e) => {
                tracing::error!("Failed to insert cell: {:?}", e);
                Err(AppError::BadRequest(ERROR_ADDING_CELL.to_string()))
            }
        }
    }

    /// Apply the fields present in `dto` to an existing cell
    pub async fn update(&self, id: Uuid, dto: UpdateCellDto) -> Result<CellResponseDto> {
        let mut cell = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(CELL_NOT_FOUND.to_string()))?;

        let changed = dto.apply(&mut cell);

        let saved = self.repository.save(&cell).await.map_err(|e| {
            if e.is_unique_violation() {
                AppError::BadRequest(DUPLICATE_CELL_NAME.to_string())
            } else {
                e
            }
        })?;

        tracing::info!("Cell updated: id={}, fields={:?}", id, changed);

        Ok(saved.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if self.repository.get(id).await?.is_none() {
            return Err(AppError::NotFound(CELL_NOT_FOUND.to_string()));
        }

        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound(CELL_NOT_FOUND.to_string()));
        }

        tracing::info!("Cell deleted: id={}", id);
        Ok(())
    }
}
