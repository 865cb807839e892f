//! Handlers for the `/queries` resource.
//!
//! Besides list/create/update, a query exposes its downstream usage
//! (schedules and distributions that depend on it) and a test stub that
//! previews the result shape without touching the data source.

use axum::extract::{self, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use disthub_core::entities::{Query, UpsertMode};
use disthub_core::error::CoreError;
use disthub_core::lineage::{self, QueryLineage, QueryUsage};
use disthub_core::prepare::prepare_query;
use disthub_core::query_test::{self, QueryTestResult};
use disthub_core::search;
use serde::Serialize;

use crate::catalog;
use crate::error::{AppError, AppResult};
use crate::handlers::ensure_path_id;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Detail view: the query, the system it was saved against and everything
/// that depends on it.
#[derive(Debug, Serialize)]
pub struct QueryDetail<'a> {
    pub query: &'a Query,
    pub lineage: QueryLineage<'a>,
    pub usage: QueryUsage<'a>,
}

/// GET /api/v1/queries
///
/// Each row carries `scheduleCount` and `distributionCount`, recomputed on
/// every request.
pub async fn list(
    State(state): State<AppState>,
    extract::Query(params): extract::Query<SearchParams>,
) -> AppResult<Response> {
    let snapshot = catalog::load(&state).await?;
    let rows = lineage::annotate_queries(
        search::filter(&snapshot.queries, params.term()),
        &snapshot.schedules,
        &snapshot.distributions,
    );
    Ok(Json(DataResponse { data: rows }).into_response())
}

/// GET /api/v1/queries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let snapshot = catalog::load(&state).await?;
    let query = snapshot.query(&id).ok_or_else(|| not_found(&id))?;
    let detail = QueryDetail {
        query,
        lineage: lineage::query_lineage(query, &snapshot),
        usage: lineage::usage_for_query(&query.id, &snapshot.schedules, &snapshot.distributions),
    };
    Ok(Json(DataResponse { data: detail }).into_response())
}

/// GET /api/v1/queries/{id}/usage
///
/// An id with no stored query still reports the schedules that reference
/// it, so orphans left by a removed query stay visible.
pub async fn usage(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let snapshot = catalog::load(&state).await?;
    let usage = lineage::usage_for_query(&id, &snapshot.schedules, &snapshot.distributions);
    Ok(Json(DataResponse { data: usage }).into_response())
}

/// GET /api/v1/queries/data-sources
/// GET /api/v1/queries/databases
pub async fn data_sources(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<String>>>> {
    let data = state.repo.list_data_sources().await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/queries/{id}/test
///
/// Always 200 for a known query; a failed test is reported in the body.
pub async fn test(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<QueryTestResult>>> {
    let (snapshot, sources) = tokio::try_join!(catalog::load(&state), async {
        state.repo.list_data_sources().await.map_err(AppError::from)
    })?;
    let query = snapshot.query(&id).ok_or_else(|| not_found(&id))?;
    let result = query_test::run_test(query, &sources);
    tracing::debug!(
        id = %query.id,
        success = result.success,
        rows = result.rows.len(),
        "Query test finished"
    );
    Ok(Json(DataResponse { data: result }))
}

/// POST /api/v1/queries
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<Query>,
) -> AppResult<(StatusCode, Json<DataResponse<Query>>)> {
    let snapshot = catalog::load(&state).await?;
    let query = prepare_query(input, UpsertMode::Insert, &snapshot)?;
    let saved = state.repo.upsert_query(query).await?;
    tracing::info!(id = %saved.id, system_id = %saved.system_id, "Query created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: saved })))
}

/// PUT /api/v1/queries/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<Query>,
) -> AppResult<Json<DataResponse<Query>>> {
    ensure_path_id(&id, &input.id)?;
    let snapshot = catalog::load(&state).await?;
    let query = prepare_query(input, UpsertMode::Update, &snapshot)?;
    let saved = state.repo.upsert_query(query).await?;
    tracing::info!(id = %saved.id, "Query updated");
    Ok(Json(DataResponse { data: saved }))
}

fn not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Query",
        id: id.to_string(),
    })
}
