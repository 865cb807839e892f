//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Saves are upserts keyed on `id`.

pub mod data_source_repo;
pub mod distribution_repo;
pub mod distribution_type_repo;
pub mod group_repo;
pub mod query_repo;
pub mod schedule_repo;
pub mod system_repo;

pub use data_source_repo::DataSourceRepo;
pub use distribution_repo::DistributionRepo;
pub use distribution_type_repo::DistributionTypeRepo;
pub use group_repo::GroupRepo;
pub use query_repo::QueryRepo;
pub use schedule_repo::ScheduleRepo;
pub use system_repo::SystemRepo;
