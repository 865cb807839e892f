//! Handlers for the `/groups` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use disthub_core::entities::{Group, UpsertMode};
use disthub_core::prepare::prepare_group;
use disthub_core::search;

use crate::catalog;
use crate::error::AppResult;
use crate::handlers::ensure_path_id;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/groups
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<Group>>>> {
    let snapshot = catalog::load(&state).await?;
    let data = search::filter(&snapshot.groups, params.term())
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/groups
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<Group>,
) -> AppResult<(StatusCode, Json<DataResponse<Group>>)> {
    let snapshot = catalog::load(&state).await?;
    let group = prepare_group(input, UpsertMode::Insert, &snapshot)?;
    let saved = state.repo.upsert_group(group).await?;
    tracing::info!(id = %saved.id, "Group created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: saved })))
}

/// PUT /api/v1/groups/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<Group>,
) -> AppResult<Json<DataResponse<Group>>> {
    ensure_path_id(&id, &input.id)?;
    let snapshot = catalog::load(&state).await?;
    let group = prepare_group(input, UpsertMode::Update, &snapshot)?;
    let saved = state.repo.upsert_group(group).await?;
    tracing::info!(id = %saved.id, "Group updated");
    Ok(Json(DataResponse { data: saved }))
}
