//! Row type for the `collector_queries` table.

use disthub_core::entities::{Query, System};
use disthub_core::types::{ActiveFlag, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from `collector_queries`. `system_snapshot` holds the system as it
/// was when the query was saved.
#[derive(Debug, Clone, FromRow)]
pub struct QueryRow {
    pub id: String,
    pub system_id: String,
    pub name: String,
    pub description: String,
    pub data_source: String,
    pub data_query: String,
    pub data_columns: String,
    pub max_results: i32,
    pub is_active: ActiveFlag,
    pub system_snapshot: Option<Json<System>>,
    pub create_ts: Timestamp,
}

impl From<QueryRow> for Query {
    fn from(row: QueryRow) -> Self {
        Self {
            id: row.id,
            system_id: row.system_id,
            name: row.name,
            description: row.description,
            data_source: row.data_source,
            data_query: row.data_query,
            data_columns: row.data_columns,
            max_results: row.max_results,
            is_active: row.is_active,
            system: row.system_snapshot.map(|Json(system)| system),
            create_ts: Some(row.create_ts),
        }
    }
}
