//! Demo catalog for the in-memory backend.
//!
//! Mirrors the seed data operators see on a fresh install: three systems,
//! three groups, the three distribution channel kinds and a small linked
//! chain of queries, schedules and distributions.

use chrono::{TimeZone, Utc};
use disthub_core::entities::{
    Distribution, DistributionType, Group, Query, Schedule, System,
};
use disthub_core::snapshot::CatalogSnapshot;
use disthub_core::types::{Timestamp, ACTIVE, INACTIVE};

/// Seed timestamp shared by every fixture record.
fn seeded_at() -> Option<Timestamp> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single()
}

/// Names of the data sources queries may target.
pub fn data_sources() -> Vec<String> {
    ["Oracle_Prod", "SQLServer_Reporting", "Postgres_Analytics"]
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn systems() -> Vec<System> {
    [
        ("SYS001", "CRM Core", 101, "David Cohen"),
        ("SYS002", "Legacy Billing", 102, "Sarah Levy"),
        ("SYS003", "Data Warehouse", 103, "Moshe Katz"),
    ]
    .into_iter()
    .map(|(id, name, department, manager)| System {
        id: id.into(),
        name: name.into(),
        department: Some(department),
        user_manager: Some(manager.into()),
        line_of_business: None,
        create_ts: seeded_at(),
    })
    .collect()
}

pub fn groups() -> Vec<Group> {
    [
        ("GRP001", "Daily Reports"),
        ("GRP002", "Monthly Audits"),
        ("GRP003", "Critical Alerts"),
    ]
    .into_iter()
    .map(|(id, name)| Group {
        id: id.into(),
        name: name.into(),
        department: None,
        user_manager: None,
        line_of_business: None,
        create_ts: seeded_at(),
    })
    .collect()
}

pub fn distribution_types() -> Vec<DistributionType> {
    [
        ("TYPE001", "Email", "Send via SMTP"),
        ("TYPE002", "SFTP", "Upload to remote server"),
        ("TYPE003", "Kafka", "Push to topic"),
    ]
    .into_iter()
    .map(|(id, name, description)| DistributionType {
        id: id.into(),
        name: name.into(),
        description: Some(description.into()),
    })
    .collect()
}

/// The full demo catalog, with embeds taken from the reference fixtures.
pub fn catalog() -> CatalogSnapshot {
    let systems = systems();
    let groups = groups();
    let distribution_types = distribution_types();

    let queries = vec![
        Query {
            id: "QRY001".into(),
            system_id: "SYS001".into(),
            name: "Active Customers".into(),
            description: "All customers with an active status".into(),
            data_source: "Oracle_Prod".into(),
            data_query: r#"SELECT * FROM customers WHERE status = "ACTIVE""#.into(),
            data_columns: "id, name, email, last_login".into(),
            max_results: 5000,
            is_active: ACTIVE,
            system: Some(systems[0].clone()),
            create_ts: seeded_at(),
        },
        Query {
            id: "QRY002".into(),
            system_id: "SYS003".into(),
            name: "Pending Transactions".into(),
            description: "Transactions waiting for settlement".into(),
            data_source: "Postgres_Analytics".into(),
            data_query: r#"SELECT id, amount FROM tx WHERE state = "PENDING""#.into(),
            data_columns: "id, amount, created_at".into(),
            max_results: 100,
            is_active: ACTIVE,
            system: Some(systems[2].clone()),
            create_ts: seeded_at(),
        },
    ];

    let schedules = vec![
        Schedule {
            id: "SCH001".into(),
            name: "Morning Sync".into(),
            query_id: "QRY001".into(),
            parameters: None,
            cron: "0 0 8 * * ?".into(),
            next_run: None,
            group: Some(groups[0].clone()),
            is_active: ACTIVE,
            create_ts: seeded_at(),
        },
        Schedule {
            id: "SCH002".into(),
            name: "Weekly Audit".into(),
            query_id: "QRY002".into(),
            parameters: None,
            cron: "0 0 12 ? * FRI".into(),
            next_run: None,
            group: Some(groups[1].clone()),
            is_active: INACTIVE,
            create_ts: seeded_at(),
        },
    ];

    let distributions = vec![
        Distribution {
            id: "DST001".into(),
            distribution_type: Some(distribution_types[0].clone()),
            schedule_id: "SCH001".into(),
            parameters: Some(
                r#"{"to": "managers@menora.co.il", "subject": "Daily Report"}"#.into(),
            ),
            is_active: ACTIVE,
            create_ts: seeded_at(),
        },
        Distribution {
            id: "DST002".into(),
            distribution_type: Some(distribution_types[1].clone()),
            schedule_id: "SCH002".into(),
            parameters: Some(r#"{"host": "sftp.partner.com", "path": "/uploads"}"#.into()),
            is_active: ACTIVE,
            create_ts: seeded_at(),
        },
    ];

    CatalogSnapshot {
        systems,
        groups,
        distribution_types,
        queries,
        schedules,
        distributions,
    }
}

#[cfg(test)]
mod tests {
    use disthub_core::integrity::dangling_references;

    use super::*;

    #[test]
    fn demo_catalog_is_consistent() {
        let catalog = catalog();
        assert!(dangling_references(&catalog).is_empty());

        let (normalized, warnings) = catalog.clone().normalize();
        assert!(warnings.is_empty());
        assert_eq!(normalized, catalog);
    }

    #[test]
    fn every_fixture_is_timestamped() {
        let catalog = catalog();
        assert!(catalog.queries.iter().all(|q| q.create_ts.is_some()));
        assert!(catalog.distributions.iter().all(|d| d.create_ts.is_some()));
    }
}
