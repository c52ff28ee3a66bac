use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::error::{DatabaseError, ErrorKind};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::cells::models::{Cell, NewCell};

use super::CellRepository;

/// In-process cell store for tests. Insertion order stands in for creation order.
#[derive(Default)]
pub struct InMemoryCellRepository {
    cells: RwLock<Vec<Cell>>,
    // email -> user id
    users: HashMap<String, String>,
    unique_names: bool,
}

impl InMemoryCellRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user_id: &str, email: &str) -> Self {
        self.users.insert(email.to_string(), user_id.to_string());
        self
    }

    /// Reject colliding names on insert and save, like the `cells_name_key` constraint
    pub fn with_unique_names(mut self) -> Self {
        self.unique_names = true;
        self
    }

    pub async fn count(&self) -> usize {
        self.cells.read().await.len()
    }

    fn check_name(&self, cells: &[Cell], id: Option<Uuid>, name: &str) -> Result<()> {
        if self.unique_names && cells.iter().any(|c| Some(c.id) != id && c.name == name) {
            return Err(unique_violation());
        }
        Ok(())
    }
}

/// The error Postgres reports when a write hits `cells_name_key`
pub fn unique_violation() -> AppError {
    AppError::Database(sqlx::Error::Database(Box::new(UniqueViolation(
        "cells_name_key",
    ))))
}

#[derive(Debug)]
struct UniqueViolation(&'static str);

impl fmt::Display for UniqueViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "duplicate key value violates unique constraint \"{}\"",
            self.0
        )
    }
}

impl StdError for UniqueViolation {}

impl DatabaseError for UniqueViolation {
    fn message(&self) -> &str {
        "duplicate key value violates unique constraint"
    }

    fn constraint(&self) -> Option<&str> {
        Some(self.0)
    }

    fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
        self
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::UniqueViolation
    }
}

#[async_trait]
impl CellRepository for InMemoryCellRepository {
    async fn get_all(&self) -> Result<Vec<Cell>> {
        Ok(self.cells.read().await.clone())
    }

    async fn get_cells_by_user_id(&self, user_id: &str) -> Result<Vec<Cell>> {
        Ok(self
            .cells
            .read()
            .await
            .iter()
            .filter(|c| c.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Cell>> {
        Ok(self
            .cells
            .read()
            .await
            .iter()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Cell>> {
        Ok(self.cells.read().await.iter().find(|c| c.id == id).cloned())
    }

    async fn add_cell_by_user_email(&self, new_cell: NewCell) -> Result<Option<Cell>> {
        let Some(user_id) = self.users.get(&new_cell.user_email) else {
            return Ok(None);
        };

        let mut cells = self.cells.write().await;
        self.check_name(&cells, None, &new_cell.name)?;

        let now = Utc::now();
        let cell = Cell {
            id: Uuid::now_v7(),
            name: new_cell.name,
            location: new_cell.location,
            latitude: new_cell.latitude,
            longitude: new_cell.longitude,
            archive: new_cell.archive,
            user_id: Some(user_id.clone()),
            created_at: now,
            updated_at: now,
        };
        cells.push(cell.clone());

        Ok(Some(cell))
    }

    async fn save(&self, cell: &Cell) -> Result<Cell> {
        let mut cells = self.cells.write().await;
        self.check_name(&cells, Some(cell.id), &cell.name)?;

        let stored = cells
            .iter_mut()
            .find(|c| c.id == cell.id)
            .ok_or_else(|| AppError::NotFound("Cell not found".to_string()))?;

        stored.name = cell.name.clone();
        stored.location = cell.location.clone();
        stored.latitude = cell.latitude;
        stored.longitude = cell.longitude;
        stored.archive = cell.archive;
        stored.updated_at = Utc::now();

        Ok(stored.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut cells = self.cells.write().await;
        let before = cells.len();
        cells.retain(|c| c.id != id);
        Ok(cells.len() < before)
    }
}
