//! Row type for the `collector_systems` table.

use disthub_core::entities::System;
use disthub_core::types::Timestamp;
use sqlx::FromRow;

/// A row from `collector_systems`.
#[derive(Debug, Clone, FromRow)]
pub struct SystemRow {
    pub id: String,
    pub name: String,
    pub department: Option<i32>,
    pub user_manager: Option<String>,
    pub line_of_business: Option<i32>,
    pub create_ts: Timestamp,
}

impl From<SystemRow> for System {
    fn from(row: SystemRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            department: row.department,
            user_manager: row.user_manager,
            line_of_business: row.line_of_business,
            create_ts: Some(row.create_ts),
        }
    }
}
