//! Handlers for the `/distributions` resource.
//!
//! Distributions are the leaves of the catalog: nothing depends on them, so
//! they expose lineage (what they depend on) instead of usage.

use axum::extract::{self, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use disthub_core::entities::{Distribution, UpsertMode};
use disthub_core::error::CoreError;
use disthub_core::lineage::{self, DistributionLineage};
use disthub_core::prepare::prepare_distribution;
use disthub_core::search;
use serde::Serialize;

use crate::catalog;
use crate::error::{AppError, AppResult};
use crate::handlers::ensure_path_id;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Detail view: the distribution with the schedule and query behind it.
#[derive(Debug, Serialize)]
pub struct DistributionDetail<'a> {
    pub distribution: &'a Distribution,
    #[serde(flatten)]
    pub lineage: DistributionLineage<'a>,
}

/// GET /api/v1/distributions
pub async fn list(
    State(state): State<AppState>,
    extract::Query(params): extract::Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<Distribution>>>> {
    let snapshot = catalog::load(&state).await?;
    let data = search::filter(&snapshot.distributions, params.term())
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/distributions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let snapshot = catalog::load(&state).await?;
    let distribution = snapshot.distribution(&id).ok_or_else(|| not_found(&id))?;
    let detail = DistributionDetail {
        distribution,
        lineage: lineage::lineage_for_distribution(
            distribution,
            &snapshot.schedules,
            &snapshot.queries,
        ),
    };
    Ok(Json(DataResponse { data: detail }).into_response())
}

/// GET /api/v1/distributions/{id}/lineage
///
/// The full System -> Query -> Schedule -> Distribution chain. Each node
/// reports whether it came from a live lookup, the save-time embed, or is
/// missing.
pub async fn lineage(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let snapshot = catalog::load(&state).await?;
    let distribution = snapshot.distribution(&id).ok_or_else(|| not_found(&id))?;
    let chain = lineage::lineage_chain(distribution, &snapshot);
    Ok(Json(DataResponse { data: chain }).into_response())
}

/// POST /api/v1/distributions
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<Distribution>,
) -> AppResult<(StatusCode, Json<DataResponse<Distribution>>)> {
    let snapshot = catalog::load(&state).await?;
    let distribution = prepare_distribution(input, UpsertMode::Insert, &snapshot)?;
    let saved = state.repo.upsert_distribution(distribution).await?;
    tracing::info!(id = %saved.id, schedule_id = %saved.schedule_id, "Distribution created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: saved })))
}

/// PUT /api/v1/distributions/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<Distribution>,
) -> AppResult<Json<DataResponse<Distribution>>> {
    ensure_path_id(&id, &input.id)?;
    let snapshot = catalog::load(&state).await?;
    let distribution = prepare_distribution(input, UpsertMode::Update, &snapshot)?;
    let saved = state.repo.upsert_distribution(distribution).await?;
    tracing::info!(id = %saved.id, "Distribution updated");
    Ok(Json(DataResponse { data: saved }))
}

/// PATCH /api/v1/distributions/{id}/deactivate
///
/// One-way: there is no matching reactivate endpoint.
pub async fn deactivate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Distribution>>> {
    let distribution = state.repo.deactivate_distribution(&id).await?;
    tracing::info!(id = %distribution.id, "Distribution deactivated");
    Ok(Json(DataResponse { data: distribution }))
}

fn not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Distribution",
        id: id.to_string(),
    })
}
