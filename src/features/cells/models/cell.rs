use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a cell site record
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Cell {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub archive: bool,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload; the owner is resolved from `user_email` by the store
#[derive(Debug, Clone)]
pub struct NewCell {
    pub name: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub archive: bool,
    pub user_email: String,
}
