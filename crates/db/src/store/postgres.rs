use async_trait::async_trait;
use disthub_core::entities::{Distribution, DistributionType, Group, Query, Schedule, System};
use disthub_core::error::CoreError;

use crate::error::StoreError;
use crate::repositories::{
    DataSourceRepo, DistributionRepo, DistributionTypeRepo, GroupRepo, QueryRepo, ScheduleRepo,
    SystemRepo,
};
use crate::DbPool;

use super::EntityRepository;

/// [`EntityRepository`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgEntityRepository {
    pool: DbPool,
}

impl PgEntityRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityRepository for PgEntityRepository {
    async fn list_systems(&self) -> Result<Vec<System>, StoreError> {
        Ok(SystemRepo::list(&self.pool).await?)
    }

    async fn list_groups(&self) -> Result<Vec<Group>, StoreError> {
        Ok(GroupRepo::list(&self.pool).await?)
    }

    async fn list_distribution_types(&self) -> Result<Vec<DistributionType>, StoreError> {
        Ok(DistributionTypeRepo::list(&self.pool).await?)
    }

    async fn list_queries(&self) -> Result<Vec<Query>, StoreError> {
        Ok(QueryRepo::list(&self.pool).await?)
    }

    async fn list_schedules(&self) -> Result<Vec<Schedule>, StoreError> {
        Ok(ScheduleRepo::list(&self.pool).await?)
    }

    async fn list_distributions(&self) -> Result<Vec<Distribution>, StoreError> {
        Ok(DistributionRepo::list(&self.pool).await?)
    }

    async fn list_data_sources(&self) -> Result<Vec<String>, StoreError> {
        Ok(DataSourceRepo::list(&self.pool).await?)
    }

    async fn upsert_system(&self, system: System) -> Result<System, StoreError> {
        Ok(SystemRepo::upsert(&self.pool, &system).await?)
    }

    async fn upsert_group(&self, group: Group) -> Result<Group, StoreError> {
        Ok(GroupRepo::upsert(&self.pool, &group).await?)
    }

    async fn upsert_query(&self, query: Query) -> Result<Query, StoreError> {
        Ok(QueryRepo::upsert(&self.pool, &query).await?)
    }

    async fn upsert_schedule(&self, schedule: Schedule) -> Result<Schedule, StoreError> {
        Ok(ScheduleRepo::upsert(&self.pool, &schedule).await?)
    }

    async fn upsert_distribution(
        &self,
        distribution: Distribution,
    ) -> Result<Distribution, StoreError> {
        Ok(DistributionRepo::upsert(&self.pool, &distribution).await?)
    }

    async fn deactivate_distribution(&self, id: &str) -> Result<Distribution, StoreError> {
        DistributionRepo::deactivate(&self.pool, id)
            .await?
            .ok_or_else(|| {
                StoreError::Core(CoreError::NotFound {
                    entity: "Distribution",
                    id: id.to_string(),
                })
            })
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
