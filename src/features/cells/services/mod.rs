mod cell_service;

pub use cell_service::CellService;
