//! Route definitions for the `/distributions` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::distribution;
use crate::state::AppState;

/// Routes mounted at `/distributions`.
///
/// ```text
/// GET    /                  -> list (?q=)
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id (distribution + schedule + query)
/// PUT    /{id}              -> update
/// GET    /{id}/lineage      -> lineage (full chain)
/// PATCH  /{id}/deactivate   -> deactivate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(distribution::list).post(distribution::create))
        .route(
            "/{id}",
            get(distribution::get_by_id).put(distribution::update),
        )
        .route("/{id}/lineage", get(distribution::lineage))
        .route("/{id}/deactivate", patch(distribution::deactivate))
}
