//! Repository for the `scheduler_groups` table.

use disthub_core::entities::Group;
use sqlx::PgPool;

use crate::models::group::GroupRow;

/// Column list for scheduler_groups queries.
const COLUMNS: &str = "id, name, department, user_manager, line_of_business, create_ts";

/// Provides list and upsert operations for schedule groups.
pub struct GroupRepo;

impl GroupRepo {
    /// List all groups, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Group>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scheduler_groups ORDER BY create_ts, id");
        let rows = sqlx::query_as::<_, GroupRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Group::from).collect())
    }

    /// Insert or replace a group. An existing row keeps its `create_ts`.
    pub async fn upsert(pool: &PgPool, group: &Group) -> Result<Group, sqlx::Error> {
        let query = format!(
            "INSERT INTO scheduler_groups
                (id, name, department, user_manager, line_of_business, create_ts)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, now()))
             ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                department = EXCLUDED.department,
                user_manager = EXCLUDED.user_manager,
                line_of_business = EXCLUDED.line_of_business
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, GroupRow>(&query)
            .bind(&group.id)
            .bind(&group.name)
            .bind(group.department)
            .bind(&group.user_manager)
            .bind(group.line_of_business)
            .bind(group.create_ts)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }
}
