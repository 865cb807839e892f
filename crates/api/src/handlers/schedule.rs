//! Handlers for the `/schedules` resource.

use axum::extract::{self, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use disthub_core::entities::{Schedule, UpsertMode};
use disthub_core::error::CoreError;
use disthub_core::lineage::{self, ScheduleLineage, ScheduleUsage};
use disthub_core::prepare::prepare_schedule;
use disthub_core::search;
use serde::Serialize;

use crate::catalog;
use crate::error::{AppError, AppResult};
use crate::handlers::ensure_path_id;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Detail view: the schedule, its group, query and system, and the
/// distributions it feeds.
#[derive(Debug, Serialize)]
pub struct ScheduleDetail<'a> {
    pub schedule: &'a Schedule,
    pub lineage: ScheduleLineage<'a>,
    pub usage: ScheduleUsage<'a>,
}

/// GET /api/v1/schedules
pub async fn list(
    State(state): State<AppState>,
    extract::Query(params): extract::Query<SearchParams>,
) -> AppResult<Response> {
    let snapshot = catalog::load(&state).await?;
    let rows = lineage::annotate_schedules(
        search::filter(&snapshot.schedules, params.term()),
        &snapshot.distributions,
    );
    Ok(Json(DataResponse { data: rows }).into_response())
}

/// GET /api/v1/schedules/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let snapshot = catalog::load(&state).await?;
    let schedule = snapshot.schedule(&id).ok_or_else(|| not_found(&id))?;
    let detail = ScheduleDetail {
        schedule,
        lineage: lineage::schedule_lineage(schedule, &snapshot),
        usage: lineage::usage_for_schedule(&schedule.id, &snapshot.distributions),
    };
    Ok(Json(DataResponse { data: detail }).into_response())
}

/// GET /api/v1/schedules/{id}/usage
pub async fn usage(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let snapshot = catalog::load(&state).await?;
    let usage = lineage::usage_for_schedule(&id, &snapshot.distributions);
    Ok(Json(DataResponse { data: usage }).into_response())
}

/// POST /api/v1/schedules
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<Schedule>,
) -> AppResult<(StatusCode, Json<DataResponse<Schedule>>)> {
    let snapshot = catalog::load(&state).await?;
    let schedule = prepare_schedule(input, UpsertMode::Insert, &snapshot)?;
    let saved = state.repo.upsert_schedule(schedule).await?;
    tracing::info!(id = %saved.id, query_id = %saved.query_id, "Schedule created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: saved })))
}

/// PUT /api/v1/schedules/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<Schedule>,
) -> AppResult<Json<DataResponse<Schedule>>> {
    ensure_path_id(&id, &input.id)?;
    let snapshot = catalog::load(&state).await?;
    let schedule = prepare_schedule(input, UpsertMode::Update, &snapshot)?;
    let saved = state.repo.upsert_schedule(schedule).await?;
    tracing::info!(id = %saved.id, "Schedule updated");
    Ok(Json(DataResponse { data: saved }))
}

fn not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Schedule",
        id: id.to_string(),
    })
}
