use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::cells::models::{Cell, NewCell};

/// Store operations the cell service depends on.
///
/// Listings are ordered by creation time, then id.
#[async_trait]
pub trait CellRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Cell>>;

    async fn get_cells_by_user_id(&self, user_id: &str) -> Result<Vec<Cell>>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Cell>>;

    async fn get(&self, id: Uuid) -> Result<Option<Cell>>;

    /// Insert a cell owned by the user registered under `new_cell.user_email`.
    ///
    /// Returns `None` when no user has that email.
    async fn add_cell_by_user_email(&self, new_cell: NewCell) -> Result<Option<Cell>>;

    /// Persist the mutable fields of `cell` and return the stored row
    async fn save(&self, cell: &Cell) -> Result<Cell>;

    /// Returns false when no row had that id
    async fn delete(&self, id: Uuid) -> Result<bool>;
}
