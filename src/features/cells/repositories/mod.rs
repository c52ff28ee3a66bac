//! Persistence contract for cells and its implementations.

mod cell_repository;
#[cfg(test)]
mod memory;
mod pg_cell_repository;

pub use cell_repository::CellRepository;
#[cfg(test)]
pub use memory::{unique_violation, InMemoryCellRepository};
pub use pg_cell_repository::PgCellRepository;
