//! Cell site registry.
//!
//! A cell is a named physical or logical site with coordinates, an archive
//! flag, and an owning user. Names are unique across all cells.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/cells` | Yes | List all cells, or the caller's with `?user=true` |
//! | POST | `/api/cells` | No | Create a cell for the user with `userEmail` |
//! | PUT | `/api/cells/{cell_id}` | No | Partially update a cell |
//! | DELETE | `/api/cells/{cell_id}` | No | Delete a cell |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgCellRepository;
pub use services::CellService;
