//! Repository for the `collector_systems` table.

use disthub_core::entities::System;
use sqlx::PgPool;

use crate::models::system::SystemRow;

/// Column list for collector_systems queries.
const COLUMNS: &str = "id, name, department, user_manager, line_of_business, create_ts";

/// Provides list and upsert operations for source systems.
pub struct SystemRepo;

impl SystemRepo {
    /// List all systems, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<System>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM collector_systems ORDER BY create_ts, id");
        let rows = sqlx::query_as::<_, SystemRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(System::from).collect())
    }

    /// Insert or replace a system. An existing row keeps its `create_ts`.
    pub async fn upsert(pool: &PgPool, system: &System) -> Result<System, sqlx::Error> {
        let query = format!(
            "INSERT INTO collector_systems
                (id, name, department, user_manager, line_of_business, create_ts)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, now()))
             ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                department = EXCLUDED.department,
                user_manager = EXCLUDED.user_manager,
                line_of_business = EXCLUDED.line_of_business
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, SystemRow>(&query)
            .bind(&system.id)
            .bind(&system.name)
            .bind(system.department)
            .bind(&system.user_manager)
            .bind(system.line_of_business)
            .bind(system.create_ts)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }
}
