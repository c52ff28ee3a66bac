use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::cells::models::{Cell, NewCell};

use super::CellRepository;

/// Postgres-backed cell store
pub struct PgCellRepository {
    pool: PgPool,
}

impl PgCellRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CellRepository for PgCellRepository {
    async fn get_all(&self) -> Result<Vec<Cell>> {
        sqlx::query_as::<_, Cell>(
            r#"
            SELECT id, name, location, latitude, longitude, archive, user_id, created_at, updated_at
            FROM cells
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list cells: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn get_cells_by_user_id(&self, user_id: &str) -> Result<Vec<Cell>> {
        sqlx::query_as::<_, Cell>(
            r#"
            SELECT id, name, location, latitude, longitude, archive, user_id, created_at, updated_at
            FROM cells
            WHERE user_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list cells for user {}: {:?}", user_id, e);
            AppError::Database(e)
        })
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Cell>> {
        sqlx::query_as::<_, Cell>(
            r#"
            SELECT id, name, location, latitude, longitude, archive, user_id, created_at, updated_at
            FROM cells
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to find cell by name: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn get(&self, id: Uuid) -> Result<Option<Cell>> {
        sqlx::query_as::<_, Cell>(
            r#"
            SELECT id, name, location, latitude, longitude, archive, user_id, created_at, updated_at
            FROM cells
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get cell {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn add_cell_by_user_email(&self, new_cell: NewCell) -> Result<Option<Cell>> {
        // Owner lookup and insert in one statement; no matching user inserts nothing
        sqlx::query_as::<_, Cell>(
            r#"
            INSERT INTO cells (id, name, location, latitude, longitude, archive, user_id)
            SELECT $1, $2, $3, $4, $5, $6, u.id
            FROM users u
            WHERE u.email = $7
            RETURNING id, name, location, latitude, longitude, archive, user_id, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&new_cell.name)
        .bind(&new_cell.location)
        .bind(new_cell.latitude)
        .bind(new_cell.longitude)
        .bind(new_cell.archive)
        .bind(&new_cell.user_email)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn save(&self, cell: &Cell) -> Result<Cell> {
        let saved = sqlx::query_as::<_, Cell>(
            r#"
            UPDATE cells
            SET name = $2, location = $3, latitude = $4, longitude = $5, archive = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, location, latitude, longitude, archive, user_id, created_at, updated_at
            "#,
        )
        .bind(cell.id)
        .bind(&cell.name)
        .bind(&cell.location)
        .bind(cell.latitude)
        .bind(cell.longitude)
        .bind(cell.archive)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        // Row can disappear between lookup and save under a concurrent delete
        saved.ok_or_else(|| AppError::NotFound("Cell not found".to_string()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM cells WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete cell {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
