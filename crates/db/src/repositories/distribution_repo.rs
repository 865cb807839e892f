//! Repository for the `distributer_distributions` table.

use disthub_core::entities::Distribution;
use disthub_core::types::INACTIVE;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::distribution::DistributionRow;

/// Column list for distributer_distributions queries.
const COLUMNS: &str = "id, type_snapshot, schedule_id, parameters, is_active, create_ts";

/// Provides list, upsert and deactivate operations for distributions.
pub struct DistributionRepo;

impl DistributionRepo {
    /// List all distributions, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Distribution>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM distributer_distributions ORDER BY create_ts, id"
        );
        let rows = sqlx::query_as::<_, DistributionRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Distribution::from).collect())
    }

    /// Insert or replace a distribution, including its type snapshot. An
    /// existing row keeps its `create_ts`.
    pub async fn upsert(
        pool: &PgPool,
        input: &Distribution,
    ) -> Result<Distribution, sqlx::Error> {
        let query = format!(
            "INSERT INTO distributer_distributions
                (id, type_snapshot, schedule_id, parameters, is_active, create_ts)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, now()))
             ON CONFLICT (id) DO UPDATE SET
                type_snapshot = EXCLUDED.type_snapshot,
                schedule_id = EXCLUDED.schedule_id,
                parameters = EXCLUDED.parameters,
                is_active = EXCLUDED.is_active
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, DistributionRow>(&query)
            .bind(&input.id)
            .bind(input.distribution_type.as_ref().map(Json))
            .bind(&input.schedule_id)
            .bind(&input.parameters)
            .bind(input.is_active)
            .bind(input.create_ts)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// Switch a distribution off. Returns `None` if no row has this id.
    pub async fn deactivate(
        pool: &PgPool,
        id: &str,
    ) -> Result<Option<Distribution>, sqlx::Error> {
        let query = format!(
            "UPDATE distributer_distributions SET is_active = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, DistributionRow>(&query)
            .bind(id)
            .bind(INACTIVE)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Distribution::from))
    }
}
