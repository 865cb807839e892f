//! Row type for the `scheduler_groups` table.

use disthub_core::entities::Group;
use disthub_core::types::Timestamp;
use sqlx::FromRow;

/// A row from `scheduler_groups`.
#[derive(Debug, Clone, FromRow)]
pub struct GroupRow {
    pub id: String,
    pub name: String,
    pub department: Option<i32>,
    pub user_manager: Option<String>,
    pub line_of_business: Option<i32>,
    pub create_ts: Timestamp,
}

impl From<GroupRow> for Group {
    fn from(row: GroupRow) -> Self {
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
