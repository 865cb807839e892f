use std::sync::Arc;

use disthub_db::EntityRepository;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Catalog storage, PostgreSQL or in-memory.
    pub repo: Arc<dyn EntityRepository>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
