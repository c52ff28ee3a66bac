pub mod auth;
pub mod cells;
