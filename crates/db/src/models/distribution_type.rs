//! Row type for the `distributer_types` table.

use disthub_core::entities::DistributionType;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct DistributionTypeRow {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

impl From<DistributionTypeRow> for DistributionType {
    fn from(row: DistributionTypeRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
        }
    }
}
