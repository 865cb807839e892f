//! Route definitions for the `/systems` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::system;
use crate::state::AppState;

/// Routes mounted at `/systems`.
///
/// ```text
/// GET    /        -> list (?q=)
/// POST   /        -> create
/// PUT    /{id}    -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(system::list).post(system::create))
        .route("/{id}", put(system::update))
}
