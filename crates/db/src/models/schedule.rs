//! Row type for the `scheduler_schedules` table.

use disthub_core::entities::{Group, Schedule};
use disthub_core::types::{ActiveFlag, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from `scheduler_schedules`. `group_snapshot` holds the group as it
/// was when the schedule was saved.
#[derive(Debug, Clone, FromRow)]
pub struct ScheduleRow {
    pub id: String,
    pub name: String,
    pub query_id: String,
    pub parameters: Option<String>,
    pub cron: String,
    pub next_run: Option<Timestamp>,
    pub group_snapshot: Option<Json<Group>>,
    pub is_active: ActiveFlag,
    pub create_ts: Timestamp,
}

impl From<ScheduleRow> for Schedule {
    fn from(row: ScheduleRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            query_id: row.query_id,
            parameters: row.parameters,
            cron: row.cron,
            next_run: row.next_run,
            group: row.group_snapshot.map(|Json(group)| group),
            is_active: row.is_active,
            create_ts: Some(row.create_ts),
        }
    }
}
