use async_trait::async_trait;
use chrono::Utc;
use disthub_core::entities::{
    Distribution, DistributionType, Entity, Group, Query, Schedule, System, UpsertMode,
};
use disthub_core::error::CoreError;
use disthub_core::snapshot::CatalogSnapshot;
use disthub_core::types::INACTIVE;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::fixtures;

use super::EntityRepository;

/// [`EntityRepository`] held in process memory.
///
/// Used for local runs without a database and by the integration tests.
/// Collections keep insertion order; an upsert of a known id replaces the
/// record in place.
pub struct MemoryEntityRepository {
    catalog: RwLock<CatalogSnapshot>,
    data_sources: Vec<String>,
}

impl MemoryEntityRepository {
    pub fn new(catalog: CatalogSnapshot, data_sources: Vec<String>) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            data_sources,
        }
    }

    /// A repository seeded with the demo catalog.
    pub fn with_fixtures() -> Self {
        Self::new(fixtures::catalog(), fixtures::data_sources())
    }
}

impl Default for MemoryEntityRepository {
    fn default() -> Self {
        Self::new(CatalogSnapshot::default(), fixtures::data_sources())
    }
}

/// Replace the record with the same id or append a new one.
fn upsert_into<E: Entity>(items: &mut Vec<E>, mut entity: E) -> E {
    let mode = match items.iter().position(|item| item.id() == entity.id()) {
        Some(index) => {
            entity.set_create_ts(items[index].create_ts());
            items[index] = entity.clone();
            UpsertMode::Update
        }
        None => {
            if entity.create_ts().is_none() {
                entity.set_create_ts(Some(Utc::now()));
            }
            items.push(entity.clone());
            UpsertMode::Insert
        }
    };
    tracing::debug!(kind = E::KIND, id = entity.id(), mode = mode.as_str(), "Upserted in memory");
    entity
}

#[async_trait]
impl EntityRepository for MemoryEntityRepository {
    async fn list_systems(&self) -> Result<Vec<System>, StoreError> {
        Ok(self.catalog.read().await.systems.clone())
    }

    async fn list_groups(&self) -> Result<Vec<Group>, StoreError> {
        Ok(self.catalog.read().await.groups.clone())
    }

    async fn list_distribution_types(&self) -> Result<Vec<DistributionType>, StoreError> {
        Ok(self.catalog.read().await.distribution_types.clone())
    }

    async fn list_queries(&self) -> Result<Vec<Query>, StoreError> {
        Ok(self.catalog.read().await.queries.clone())
    }

    async fn list_schedules(&self) -> Result<Vec<Schedule>, StoreError> {
        Ok(self.catalog.read().await.schedules.clone())
    }

    async fn list_distributions(&self) -> Result<Vec<Distribution>, StoreError> {
        Ok(self.catalog.read().await.distributions.clone())
    }

    async fn list_data_sources(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.data_sources.clone())
    }

    async fn upsert_system(&self, system: System) -> Result<System, StoreError> {
        Ok(upsert_into(&mut self.catalog.write().await.systems, system))
    }

    async fn upsert_group(&self, group: Group) -> Result<Group, StoreError> {
        Ok(upsert_into(&mut self.catalog.write().await.groups, group))
    }

    async fn upsert_query(&self, query: Query) -> Result<Query, StoreError> {
        Ok(upsert_into(&mut self.catalog.write().await.queries, query))
    }

    async fn upsert_schedule(&self, schedule: Schedule) -> Result<Schedule, StoreError> {
        Ok(upsert_into(&mut self.catalog.write().await.schedules, schedule))
    }

    async fn upsert_distribution(
        &self,
        distribution: Distribution,
    ) -> Result<Distribution, StoreError> {
        Ok(upsert_into(
            &mut self.catalog.write().await.distributions,
            distribution,
        ))
    }

    async fn deactivate_distribution(&self, id: &str) -> Result<Distribution, StoreError> {
        let mut catalog = self.catalog.write().await;
        let distribution = catalog
            .distributions
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "Distribution",
                id: id.to_string(),
            })?;
        distribution.is_active = INACTIVE;
        Ok(distribution.clone())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn load_snapshot(&self) -> Result<CatalogSnapshot, StoreError> {
        Ok(self.catalog.read().await.clone())
    }
}
