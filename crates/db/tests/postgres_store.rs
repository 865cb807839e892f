//! Integration tests for the PostgreSQL entity repository.
//!
//! Each test gets a fresh database from `#[sqlx::test]` with the crate's
//! migrations applied. They need `DATABASE_URL` and are ignored by default:
//! run with `cargo test -- --ignored`.

use assert_matches::assert_matches;
use disthub_core::entities::{Distribution, Group, Query, Schedule, System};
use disthub_core::error::CoreError;
use disthub_core::types::{ACTIVE, INACTIVE};
use disthub_db::{EntityRepository, PgEntityRepository, StoreError};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_system(id: &str) -> System {
    System {
        id: id.to_string(),
        name: "CRM Core".to_string(),
        department: Some(101),
        user_manager: Some("David Cohen".to_string()),
        line_of_business: None,
        create_ts: None,
    }
}

fn new_query(id: &str, system: &System) -> Query {
    Query {
        id: id.to_string(),
        system_id: system.id.clone(),
        name: "Active Customers".to_string(),
        description: String::new(),
        data_source: "Oracle_Prod".to_string(),
        data_query: "SELECT 1".to_string(),
        data_columns: "id".to_string(),
        max_results: 10,
        is_active: ACTIVE,
        system: Some(system.clone()),
        create_ts: None,
    }
}

fn new_schedule(id: &str, query_id: &str, group: &Group) -> Schedule {
    Schedule {
        id: id.to_string(),
        name: "Morning Sync".to_string(),
        query_id: query_id.to_string(),
        parameters: None,
        cron: "0 0 8 * * ?".to_string(),
        next_run: None,
        group: Some(group.clone()),
        is_active: ACTIVE,
        create_ts: None,
    }
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn migrations_seed_types_and_data_sources(pool: PgPool) {
    let repo = PgEntityRepository::new(pool);

    let types = repo.list_distribution_types().await.unwrap();
    let names: Vec<_> = types.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Email", "SFTP", "Kafka"]);

    let sources = repo.list_data_sources().await.unwrap();
    assert_eq!(sources.len(), 3);
    assert!(sources.contains(&"Oracle_Prod".to_string()));
}

// ---------------------------------------------------------------------------
// Upsert
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn upsert_round_trips_embeds_and_keeps_create_ts(pool: PgPool) {
    let repo = PgEntityRepository::new(pool);
    let system = repo.upsert_system(new_system("SYS001")).await.unwrap();

    let created = repo.upsert_query(new_query("QRY001", &system)).await.unwrap();
    let stamped = created.create_ts.expect("create_ts stamped on insert");
    assert_eq!(created.system.as_ref().map(|s| s.name.as_str()), Some("CRM Core"));

    let mut edited = created.clone();
    edited.name = "Renamed".to_string();
    edited.create_ts = None;
    let updated = repo.upsert_query(edited).await.unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.create_ts, Some(stamped));
    assert_eq!(repo.list_queries().await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn snapshot_loads_every_collection(pool: PgPool) {
    let repo = PgEntityRepository::new(pool);
    let system = repo.upsert_system(new_system("SYS001")).await.unwrap();
    let group = repo
        .upsert_group(Group {
            id: "GRP001".to_string(),
            name: "Daily Reports".to_string(),
            department: None,
            user_manager: None,
            line_of_business: None,
            create_ts: None,
        })
        .await
        .unwrap();
    repo.upsert_query(new_query("QRY001", &system)).await.unwrap();
    repo.upsert_schedule(new_schedule("SCH001", "QRY001", &group))
        .await
        .unwrap();

    let snapshot = repo.load_snapshot().await.unwrap();
    assert_eq!(snapshot.systems.len(), 1);
    assert_eq!(snapshot.groups.len(), 1);
    assert_eq!(snapshot.queries.len(), 1);
    assert_eq!(snapshot.schedules[0].group.as_ref().unwrap().id, "GRP001");
    assert!(snapshot.distributions.is_empty());
}

// ---------------------------------------------------------------------------
// Deactivation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn deactivate_distribution(pool: PgPool) {
    let repo = PgEntityRepository::new(pool);
    let kind = repo.list_distribution_types().await.unwrap().remove(0);
    repo.upsert_distribution(Distribution {
        id: "DST001".to_string(),
        distribution_type: Some(kind),
        schedule_id: "SCH001".to_string(),
        parameters: Some(r#"{"to": "ops@example.com"}"#.to_string()),
        is_active: ACTIVE,
        create_ts: None,
    })
    .await
    .unwrap();

    let deactivated = repo.deactivate_distribution("DST001").await.unwrap();
    assert_eq!(deactivated.is_active, INACTIVE);

    let err = repo.deactivate_distribution("DST404").await.unwrap_err();
    assert_matches!(err, StoreError::Core(CoreError::NotFound { .. }));
}
