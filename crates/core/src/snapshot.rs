//! The full in-memory catalog handed to the resolver.
//!
//! Callers load every collection, normalize once, and pass borrowed slices
//! into [`crate::lineage`]. Nothing in this crate keeps a snapshot around
//! between requests.

use std::collections::HashSet;

use serde::Serialize;

use crate::entities::{Distribution, DistributionType, Entity, Group, Query, Schedule, System};
use crate::integrity::{IntegrityIssue, IntegrityWarning};

/// One consistent read of all six catalog collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub systems: Vec<System>,
    pub groups: Vec<Group>,
    pub distribution_types: Vec<DistributionType>,
    pub queries: Vec<Query>,
    pub schedules: Vec<Schedule>,
    pub distributions: Vec<Distribution>,
}

impl CatalogSnapshot {
    /// Drop records that cannot take part in a join.
    ///
    /// Records with a blank `id` are removed, and for repeated ids only the
    /// first occurrence is kept. Collection order is otherwise preserved.
    /// Every dropped record yields one warning.
    pub fn normalize(self) -> (Self, Vec<IntegrityWarning>) {
        let mut warnings = Vec::new();
        let normalized = Self {
            systems: retain_joinable(self.systems, &mut warnings),
            groups: retain_joinable(self.groups, &mut warnings),
            distribution_types: retain_joinable(self.distribution_types, &mut warnings),
            queries: retain_joinable(self.queries, &mut warnings),
            schedules: retain_joinable(self.schedules, &mut warnings),
            distributions: retain_joinable(self.distributions, &mut warnings),
        };
        (normalized, warnings)
    }

    pub fn system(&self, id: &str) -> Option<&System> {
        find_by_id(&self.systems, id)
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        find_by_id(&self.groups, id)
    }

    pub fn distribution_type(&self, id: &str) -> Option<&DistributionType> {
        find_by_id(&self.distribution_types, id)
    }

    pub fn query(&self, id: &str) -> Option<&Query> {
        find_by_id(&self.queries, id)
    }

    pub fn schedule(&self, id: &str) -> Option<&Schedule> {
        find_by_id(&self.schedules, id)
    }

    pub fn distribution(&self, id: &str) -> Option<&Distribution> {
        find_by_id(&self.distributions, id)
    }
}

/// Resolve-or-none lookup by id. First match wins.
pub fn find_by_id<'a, E: Entity>(items: &'a [E], id: &str) -> Option<&'a E> {
    items.iter().find(|item| item.id() == id)
}

fn retain_joinable<E: Entity>(items: Vec<E>, warnings: &mut Vec<IntegrityWarning>) -> Vec<E> {
    let mut seen = HashSet::with_capacity(items.len());
    let mut kept = Vec::with_capacity(items.len());

    for item in items {
        let id = item.id();
        if id.trim().is_empty() {
            warnings.push(IntegrityWarning {
                issue: IntegrityIssue::MissingId,
                entity: E::KIND,
                id: None,
                message: format!("{} record without an id was skipped", E::KIND),
            });
            continue;
        }
        if !seen.insert(id.to_string()) {
            warnings.push(IntegrityWarning {
                issue: IntegrityIssue::DuplicateId,
                entity: E::KIND,
                id: Some(id.to_string()),
                message: format!("duplicate {} id '{id}' was skipped", E::KIND),
            });
            continue;
        }
        kept.push(item);
    }

    kept
}
