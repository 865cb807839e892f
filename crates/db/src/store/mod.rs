//! The entity repository seam.
//!
//! Handlers depend on `Arc<dyn EntityRepository>` and never on a concrete
//! backend. Each request reloads the full catalog through
//! [`EntityRepository::load_snapshot`].

mod memory;
mod postgres;

pub use memory::MemoryEntityRepository;
pub use postgres::PgEntityRepository;

use async_trait::async_trait;
use disthub_core::entities::{Distribution, DistributionType, Group, Query, Schedule, System};
use disthub_core::snapshot::CatalogSnapshot;

use crate::error::StoreError;

/// Storage operations over the six catalog collections.
///
/// Upserts are keyed on `id`: a record without `createTs` is stamped on
/// insert, an existing record keeps its stored `createTs`. List operations
/// return records in a stable order.
#[async_trait]
pub trait EntityRepository: Send + Sync {
    async fn list_systems(&self) -> Result<Vec<System>, StoreError>;

    async fn list_groups(&self) -> Result<Vec<Group>, StoreError>;

    async fn list_distribution_types(&self) -> Result<Vec<DistributionType>, StoreError>;

    async fn list_queries(&self) -> Result<Vec<Query>, StoreError>;

    async fn list_schedules(&self) -> Result<Vec<Schedule>, StoreError>;

    async fn list_distributions(&self) -> Result<Vec<Distribution>, StoreError>;

    /// Names of the data sources a query may target.
    async fn list_data_sources(&self) -> Result<Vec<String>, StoreError>;

    async fn upsert_system(&self, system: System) -> Result<System, StoreError>;

    async fn upsert_group(&self, group: Group) -> Result<Group, StoreError>;

    async fn upsert_query(&self, query: Query) -> Result<Query, StoreError>;

    async fn upsert_schedule(&self, schedule: Schedule) -> Result<Schedule, StoreError>;

    async fn upsert_distribution(
        &self,
        distribution: Distribution,
    ) -> Result<Distribution, StoreError>;

    /// Set `isActive = 0` on a distribution. Unknown ids are `NotFound`.
    async fn deactivate_distribution(&self, id: &str) -> Result<Distribution, StoreError>;

    /// Health check for the storage backend.
    async fn health_check(&self) -> Result<(), StoreError>;

    /// Fetch all six collections concurrently and wait for every one.
    async fn load_snapshot(&self) -> Result<CatalogSnapshot, StoreError> {
        let (systems, groups, distribution_types, queries, schedules, distributions) = tokio::try_join!(
            self.list_systems(),
            self.list_groups(),
            self.list_distribution_types(),
            self.list_queries(),
            self.list_schedules(),
            self.list_distributions(),
        )?;

        Ok(CatalogSnapshot {
            systems,
            groups,
            distribution_types,
            queries,
            schedules,
            distributions,
        })
    }
}
