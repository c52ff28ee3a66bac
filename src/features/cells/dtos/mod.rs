mod cell_dto;

pub use cell_dto::{CellResponseDto, CreateCellDto, ListCellsQuery, UpdateCellDto};
