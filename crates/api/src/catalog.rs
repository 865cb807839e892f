//! Per-request catalog loading.
//!
//! Every read reloads the full snapshot from the repository, normalizes it
//! and logs whatever normalization dropped. Nothing is cached between
//! requests, so usage counts always reflect the latest saves.

use disthub_core::snapshot::CatalogSnapshot;

use crate::error::AppResult;
use crate::state::AppState;

/// Load and normalize the full catalog.
pub async fn load(state: &AppState) -> AppResult<CatalogSnapshot> {
    let raw = state.repo.load_snapshot().await?;
    let (snapshot, warnings) = raw.normalize();
    for warning in &warnings {
        tracing::warn!(
            issue = %warning.issue,
            entity = warning.entity,
            id = warning.id.as_deref().unwrap_or(""),
            "{}",
            warning.message
        );
    }
    Ok(snapshot)
}
