//! Handlers for the `/dashboard` overview.

use axum::extract::State;
use axum::Json;
use disthub_core::dashboard::{self, ActivityStat};

use crate::catalog;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard/stats
pub async fn stats(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ActivityStat>>>> {
    let snapshot = catalog::load(&state).await?;
    Ok(Json(DataResponse {
        data: dashboard::activity_stats(&snapshot),
    }))
}
