//! Repository for the `collector_data_sources` table (seeded by migration).

use sqlx::PgPool;

pub struct DataSourceRepo;

impl DataSourceRepo {
    /// Names of the data sources a query may target.
    pub async fn list(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT name FROM collector_data_sources ORDER BY name")
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }
}
