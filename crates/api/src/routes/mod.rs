pub mod distribution;
pub mod group;
pub mod health;
pub mod query;
pub mod schedule;
pub mod system;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /systems                         list (?q), create
/// /systems/{id}                    update
///
/// /groups                          list (?q), create
/// /groups/{id}                     update
///
/// /distribution-types              list
///
/// /queries                         list (?q, with usage counts), create
/// /queries/data-sources            list
/// /queries/databases               alias of data-sources
/// /queries/{id}                    detail, update
/// /queries/{id}/usage              schedules and distributions using it
/// /queries/{id}/test               test stub (POST)
///
/// /schedules                       list (?q, with usage counts), create
/// /schedules/{id}                  detail, update
/// /schedules/{id}/usage            distributions using it
///
/// /distributions                   list (?q), create
/// /distributions/{id}              detail, update
/// /distributions/{id}/lineage      full lineage chain
/// /distributions/{id}/deactivate   deactivate (PATCH)
///
/// /dashboard/stats                 active vs. total counts
/// /integrity                       data-integrity report
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Reference data.
        .nest("/systems", system::router())
        .nest("/groups", group::router())
        .route(
            "/distribution-types",
            get(handlers::distribution_type::list),
        )
        // Linked entities.
        .nest("/queries", query::router())
        .nest("/schedules", schedule::router())
        .nest("/distributions", distribution::router())
        // Overview and diagnostics.
        .route("/dashboard/stats", get(handlers::dashboard::stats))
        .route("/integrity", get(handlers::integrity::report))
}
