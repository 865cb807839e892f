//! Request handlers for the catalog resources.
//!
//! Reads load a fresh snapshot through [`crate::catalog::load`] and hand
//! borrowed slices to the resolver. Writes validate and re-snapshot embeds
//! with `disthub_core::prepare` before calling the repository.

pub mod dashboard;
pub mod distribution;
pub mod distribution_type;
pub mod group;
pub mod integrity;
pub mod query;
pub mod schedule;
pub mod system;

use crate::error::{AppError, AppResult};

/// Reject a `PUT` whose body names a different record than the path.
pub(crate) fn ensure_path_id(path_id: &str, body_id: &str) -> AppResult<()> {
    if path_id == body_id {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "path id '{path_id}' does not match body id '{body_id}'"
        )))
    }
}
