//! Handlers for the `/integrity` report.

use axum::extract::State;
use axum::Json;
use disthub_core::integrity::{dangling_references, IntegrityWarning};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/integrity
///
/// Records dropped by normalization (blank or repeated ids) followed by
/// references that do not resolve.
pub async fn report(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<IntegrityWarning>>>> {
    let (snapshot, mut warnings) = state.repo.load_snapshot().await?.normalize();
    warnings.extend(dangling_references(&snapshot));
    Ok(Json(DataResponse { data: warnings }))
}
