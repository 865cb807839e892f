//! Handlers for the read-only `/distribution-types` resource.

use axum::extract::State;
use axum::Json;
use disthub_core::entities::DistributionType;

use crate::catalog;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/distribution-types
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<DistributionType>>>> {
    let snapshot = catalog::load(&state).await?;
    Ok(Json(DataResponse {
        data: snapshot.distribution_types,
    }))
}
