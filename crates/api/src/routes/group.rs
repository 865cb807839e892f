//! Route definitions for the `/groups` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::group;
use crate::state::AppState;

/// Routes mounted at `/groups`.
///
/// ```text
/// GET    /        -> list (?q=)
/// POST   /        -> create
/// PUT    /{id}    -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(group::list).post(group::create))
        .route("/{id}", put(group::update))
}
