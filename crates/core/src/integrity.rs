//! Data-integrity findings for catalog snapshots.
//!
//! Nothing here fails: malformed records and dangling references are
//! reported as [`IntegrityWarning`]s for the operational log and the
//! integrity endpoint, while the resolver keeps working on what is left.

use std::collections::HashSet;

use serde::Serialize;

use crate::entities::Entity;
use crate::snapshot::CatalogSnapshot;

/// Kind of integrity problem detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrityIssue {
    /// The record has an empty or whitespace-only `id`.
    MissingId,
    /// A second record with an already-seen `id`.
    DuplicateId,
    /// A foreign-key-like field names a record that does not exist.
    DanglingReference,
}

impl IntegrityIssue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingId => "missing_id",
            Self::DuplicateId => "duplicate_id",
            Self::DanglingReference => "dangling_reference",
        }
    }
}

impl std::fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single integrity finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrityWarning {
    pub issue: IntegrityIssue,
    /// Entity kind of the offending record.
    pub entity: &'static str,
    /// Id of the offending record, when it has one.
    pub id: Option<String>,
    pub message: String,
}

/// Report every reference that does not resolve against the snapshot.
///
/// Covers `Query.systemId`, `Schedule.queryId` and `Distribution.scheduleId`,
/// in collection order.
pub fn dangling_references(snapshot: &CatalogSnapshot) -> Vec<IntegrityWarning> {
    let system_ids = ids(&snapshot.systems);
    let query_ids = ids(&snapshot.queries);
    let schedule_ids = ids(&snapshot.schedules);

    let mut warnings = Vec::new();

    for query in &snapshot.queries {
        if !system_ids.contains(query.system_id.as_str()) {
            warnings.push(dangling(query, "system", &query.system_id));
        }
    }
    for schedule in &snapshot.schedules {
        if !query_ids.contains(schedule.query_id.as_str()) {
            warnings.push(dangling(schedule, "query", &schedule.query_id));
        }
    }
    for dist in &snapshot.distributions {
        if !schedule_ids.contains(dist.schedule_id.as_str()) {
            warnings.push(dangling(dist, "schedule", &dist.schedule_id));
        }
    }

    warnings
}

fn ids<E: Entity>(items: &[E]) -> HashSet<&str> {
    items.iter().map(Entity::id).collect()
}

fn dangling<E: Entity>(entity: &E, target: &str, target_id: &str) -> IntegrityWarning {
    IntegrityWarning {
        issue: IntegrityIssue::DanglingReference,
        entity: E::KIND,
        id: Some(entity.id().to_string()),
        message: format!(
            "{} {} references unknown {target} '{target_id}'",
            E::KIND,
            entity.id()
        ),
    }
}
