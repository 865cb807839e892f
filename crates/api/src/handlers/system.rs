//! Handlers for the `/systems` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use disthub_core::entities::{System, UpsertMode};
use disthub_core::prepare::prepare_system;
use disthub_core::search;

use crate::catalog;
use crate::error::AppResult;
use crate::handlers::ensure_path_id;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/systems
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<System>>>> {
    let snapshot = catalog::load(&state).await?;
    let data = search::filter(&snapshot.systems, params.term())
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/systems
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<System>,
) -> AppResult<(StatusCode, Json<DataResponse<System>>)> {
    let snapshot = catalog::load(&state).await?;
    let system = prepare_system(input, UpsertMode::Insert, &snapshot)?;
    let saved = state.repo.upsert_system(system).await?;
    tracing::info!(id = %saved.id, "System created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: saved })))
}

/// PUT /api/v1/systems/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<System>,
) -> AppResult<Json<DataResponse<System>>> {
    ensure_path_id(&id, &input.id)?;
    let snapshot = catalog::load(&state).await?;
    let system = prepare_system(input, UpsertMode::Update, &snapshot)?;
    let saved = state.repo.upsert_system(system).await?;
    tracing::info!(id = %saved.id, "System updated");
    Ok(Json(DataResponse { data: saved }))
}
