//! Repository for the `collector_queries` table.

use disthub_core::entities::Query;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::query::QueryRow;

/// Column list for collector_queries queries.
const COLUMNS: &str = "id, system_id, name, description, data_source, data_query, \
    data_columns, max_results, is_active, system_snapshot, create_ts";

/// Provides list and upsert operations for queries.
pub struct QueryRepo;

impl QueryRepo {
    /// List all queries, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Query>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM collector_queries ORDER BY create_ts, id");
        let rows = sqlx::query_as::<_, QueryRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Query::from).collect())
    }

    /// Insert or replace a query, including its system snapshot. An existing
    /// row keeps its `create_ts`.
    pub async fn upsert(pool: &PgPool, input: &Query) -> Result<Query, sqlx::Error> {
        let query = format!(
            "INSERT INTO collector_queries
                (id, system_id, name, description, data_source, data_query,
                 data_columns, max_results, is_active, system_snapshot, create_ts)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, COALESCE($11, now()))
             ON CONFLICT (id) DO UPDATE SET
                system_id = EXCLUDED.system_id,
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                data_source = EXCLUDED.data_source,
                data_query = EXCLUDED.data_query,
                data_columns = EXCLUDED.data_columns,
                max_results = EXCLUDED.max_results,
                is_active = EXCLUDED.is_active,
                system_snapshot = EXCLUDED.system_snapshot
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, QueryRow>(&query)
            .bind(&input.id)
            .bind(&input.system_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.data_source)
            .bind(&input.data_query)
            .bind(&input.data_columns)
            .bind(input.max_results)
            .bind(input.is_active)
            .bind(input.system.as_ref().map(Json))
            .bind(input.create_ts)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }
}
