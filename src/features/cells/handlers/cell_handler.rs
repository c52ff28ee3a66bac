use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::cells::dtos::{
    CellResponseDto, CreateCellDto, ListCellsQuery, UpdateCellDto,
};
use crate::features::cells::services::CellService;
use crate::shared::types::{ApiResponse, Meta};

/// List cells
///
/// Returns every cell, or only the caller's cells when the `user` query flag is set.
#[utoipa::path(
    get,
    path = "/api/cells",
    params(ListCellsQuery),
    responses(
        (status = 200, description = "List of cells", body = ApiResponse<Vec<CellResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "cells",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_cells(
    user: AuthenticatedUser,
    State(service): State<Arc<CellService>>,
    Query(query): Query<ListCellsQuery>,
) -> Result<Json<ApiResponse<Vec<CellResponseDto>>>> {
    let cells = service.list(&user, query.only_own()).await?;
    let meta = Meta {
        total: cells.len() as i64,
    };

    Ok(Json(ApiResponse::success(Some(cells), None, Some(meta))))
}

/// Create a cell
#[utoipa::path(
    post,
    path = "/api/cells",
    request_body = CreateCellDto,
    responses(
        (status = 200, description = "Cell created", body = ApiResponse<CellResponseDto>),
        (status = 400, description = "Validation error, duplicate name, or insert failure")
    ),
    tag = "cells"
)]
pub async fn create_cell(
    State(service): State<Arc<CellService>>,
    AppJson(dto): AppJson<CreateCellDto>,
) -> Result<Json<ApiResponse<CellResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let cell = service.create(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(cell),
        Some("Successfully added cell".to_string()),
        None,
    )))
}

/// Partially update a cell
///
/// Only the fields present in the body are changed.
#[utoipa::path(
    put,
    path = "/api/cells/{cell_id}",
    params(
        ("cell_id" = Uuid, Path, description = "Cell ID")
    ),
    request_body = UpdateCellDto,
    responses(
        (status = 200, description = "Cell updated", body = ApiResponse<CellResponseDto>),
        (status = 404, description = "Cell not found")
    ),
    tag = "cells"
)]
pub async fn update_cell(
    State(service): State<Arc<CellService>>,
    Path(cell_id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateCellDto>,
) -> Result<Json<ApiResponse<CellResponseDto>>> {
    let cell = service.update(cell_id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(cell),
        Some("Successfully updated cell".to_string()),
        None,
    )))
}

/// Delete a cell
#[utoipa::path(
    delete,
    path = "/api/cells/{cell_id}",
    params(
        ("cell_id" = Uuid, Path, description = "Cell ID")
    ),
    responses(
        (status = 200, description = "Cell deleted"),
        (status = 404, description = "Cell not found")
    ),
    tag = "cells"
)]
pub async fn delete_cell(
    State(service): State<Arc<CellService>>,
    Path(cell_id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(cell_id).await?;
    Ok(Json(ApiResponse::message("Cell deleted successfully")))
}
