//! Route definitions for the `/schedules` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::schedule;
use crate::state::AppState;

/// Routes mounted at `/schedules`.
///
/// ```text
/// GET    /              -> list (?q=), annotated with usage counts
/// POST   /              -> create
/// GET    /{id}          -> get_by_id (schedule + lineage + usage)
/// PUT    /{id}          -> update
/// GET    /{id}/usage    -> usage
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(schedule::list).post(schedule::create))
        .route("/{id}", get(schedule::get_by_id).put(schedule::update))
        .route("/{id}/usage", get(schedule::usage))
}
