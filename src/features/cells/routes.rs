use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};

use crate::core::middleware::auth_middleware;
use crate::features::auth::JwtValidator;
use crate::features::cells::handlers;
use crate::features::cells::services::CellService;

/// Routes that need an authenticated caller
pub fn protected_routes(service: Arc<CellService>) -> Router {
    Router::new()
        .route("/api/cells", get(handlers::list_cells))
        .with_state(service)
}

/// Routes open to any caller
pub fn public_routes(service: Arc<CellService>) -> Router {
    Router::new()
        .route("/api/cells", post(handlers::create_cell))
        .route(
            "/api/cells/{cell_id}",
            put(handlers::update_cell).delete(handlers::delete_cell),
        )
        .with_state(service)
}

/// All cell routes, with the JWT guard in front of the protected ones
pub fn routes(service: Arc<CellService>, validator: Arc<JwtValidator>) -> Router {
    protected_routes(Arc::clone(&service))
        .route_layer(from_fn_with_state(validator, auth_middleware))
        .merge(public_routes(service))
}
