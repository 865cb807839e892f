//! Row type for the `distributer_distributions` table.

use disthub_core::entities::{Distribution, DistributionType};
use disthub_core::types::{ActiveFlag, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from `distributer_distributions`. `type_snapshot` holds the
/// distribution type as it was when the distribution was saved.
#[derive(Debug, Clone, FromRow)]
pub struct DistributionRow {
    pub id: String,
    pub type_snapshot: Option<Json<DistributionType>>,
    pub schedule_id: String,
    pub parameters: Option<String>,
    pub is_active: ActiveFlag,
    pub create_ts: Timestamp,
}

impl From<DistributionRow> for Distribution {
    fn from(row: DistributionRow) -> Self {
        Self {
            id: row.id,
            distribution_type: row.type_snapshot.map(|Json(kind)| kind),
            schedule_id: row.schedule_id,
            parameters: row.parameters,
            is_active: row.is_active,
            create_ts: Some(row.create_ts),
        }
    }
}
