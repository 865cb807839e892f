//! Repository for the `distributer_types` table (seeded by migration).

use disthub_core::entities::DistributionType;
use sqlx::PgPool;

use crate::models::distribution_type::DistributionTypeRow;

pub struct DistributionTypeRepo;

impl DistributionTypeRepo {
    /// List all distribution types ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<DistributionType>, sqlx::Error> {
        let rows = sqlx::query_as::<_, DistributionTypeRow>(
            "SELECT id, name, description FROM distributer_types ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(DistributionType::from).collect())
    }
}
