//! Route definitions for the `/queries` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::query;
use crate::state::AppState;

/// Routes mounted at `/queries`.
///
/// ```text
/// GET    /                -> list (?q=), annotated with usage counts
/// POST   /                -> create
/// GET    /data-sources    -> data_sources
/// GET    /databases       -> data_sources (front-end alias)
/// GET    /{id}            -> get_by_id (query + system lineage + usage)
/// PUT    /{id}            -> update
/// GET    /{id}/usage      -> usage
/// POST   /{id}/test       -> test
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(query::list).post(query::create))
        .route("/data-sources", get(query::data_sources))
        .route("/databases", get(query::data_sources))
        .route("/{id}", get(query::get_by_id).put(query::update))
        .route("/{id}/usage", get(query::usage))
        .route("/{id}/test", post(query::test))
}
