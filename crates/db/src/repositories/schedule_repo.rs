//! Repository for the `scheduler_schedules` table.

use disthub_core::entities::Schedule;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::schedule::ScheduleRow;

/// Column list for scheduler_schedules queries.
const COLUMNS: &str = "id, name, query_id, parameters, cron, next_run, \
    group_snapshot, is_active, create_ts";

/// Provides list and upsert operations for schedules.
pub struct ScheduleRepo;

impl ScheduleRepo {
    /// List all schedules, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Schedule>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scheduler_schedules ORDER BY create_ts, id");
        let rows = sqlx::query_as::<_, ScheduleRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Schedule::from).collect())
    }

    /// Insert or replace a schedule, including its group snapshot. An
    /// existing row keeps its `create_ts`.
    pub async fn upsert(pool: &PgPool, input: &Schedule) -> Result<Schedule, sqlx::Error> {
        let query = format!(
            "INSERT INTO scheduler_schedules
                (id, name, query_id, parameters, cron, next_run,
                 group_snapshot, is_active, create_ts)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, now()))
             ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                query_id = EXCLUDED.query_id,
                parameters = EXCLUDED.parameters,
                cron = EXCLUDED.cron,
                next_run = EXCLUDED.next_run,
                group_snapshot = EXCLUDED.group_snapshot,
                is_active = EXCLUDED.is_active
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ScheduleRow>(&query)
            .bind(&input.id)
            .bind(&input.name)
            .bind(&input.query_id)
            .bind(&input.parameters)
            .bind(&input.cron)
            .bind(input.next_run)
            .bind(input.group.as_ref().map(Json))
            .bind(input.is_active)
            .bind(input.create_ts)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }
}
