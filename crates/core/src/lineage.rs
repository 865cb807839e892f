//! Lineage resolver: usage and ancestry over the in-memory catalog.
//!
//! Every function here is pure and synchronous. Inputs are borrowed slices of
//! the current snapshot, outputs borrow from those slices, and no input is
//! ever mutated. A reference that does not resolve (a `queryId` or
//! `scheduleId` naming nothing) is never an error: it shows up as `None`,
//! [`Resolved::Missing`] or an empty vector so the caller can render a
//! "not found" state for that node only.
//!
//! # Embeds vs. live lookups
//!
//! Child records carry save-time copies of some parents (`Query.system`,
//! `Schedule.group`, `Distribution.distributionType`). The precedence rule is:
//!
//! - the immediate parent an entity was saved with is taken from its embed
//!   ([`Resolved::Snapshot`]), falling back to a lookup by id only when the
//!   embed is absent or names a different id;
//! - every ancestor further up is re-resolved by id against the current
//!   collections ([`Resolved::Live`]), falling back to the embed only when
//!   the id no longer resolves.
//!
//! Trusting embeds uniformly would show stale schedule, query and system
//! names after those records are edited.

use std::collections::HashSet;

use serde::Serialize;

use crate::entities::{Distribution, DistributionType, Entity, Group, Query, Schedule, System};
use crate::snapshot::{find_by_id, CatalogSnapshot};

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Everything downstream of a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryUsage<'a> {
    pub schedules: Vec<&'a Schedule>,
    pub distributions: Vec<&'a Distribution>,
}

/// Everything downstream of a schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleUsage<'a> {
    pub distributions: Vec<&'a Distribution>,
}

/// The two-hop join Distribution -> Schedule -> Query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionLineage<'a> {
    pub schedule: Option<&'a Schedule>,
    pub query: Option<&'a Query>,
}

/// Outcome of resolving one node of a lineage chain.
#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "source", content = "value", rename_all = "snake_case")]
pub enum Resolved<'a, T> {
    /// Looked up by id in the current collection.
    Live(&'a T),
    /// The embedded copy stored on the child at save time.
    Snapshot(&'a T),
    /// Neither an embed nor a live record is available.
    Missing,
}

impl<'a, T> Resolved<'a, T> {
    pub fn get(&self) -> Option<&'a T> {
        match *self {
            Self::Live(value) | Self::Snapshot(value) => Some(value),
            Self::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl<'a, T: Entity> Resolved<'a, T> {
    /// Immediate-parent rule: embed first, live lookup as fallback.
    ///
    /// The embed is only trusted when it names the referenced id.
    fn prefer_embed(embed: Option<&'a T>, id: &str, collection: &'a [T]) -> Self {
        match embed {
            Some(value) if value.id() == id => Self::Snapshot(value),
            _ => find_by_id(collection, id).map_or(Self::Missing, Self::Live),
        }
    }

    /// Ancestor rule: live lookup first, embed as fallback.
    fn prefer_live(id: &str, collection: &'a [T], embed: Option<&'a T>) -> Self {
        match find_by_id(collection, id) {
            Some(value) => Self::Live(value),
            None => embed.map_or(Self::Missing, Self::Snapshot),
        }
    }
}

impl<T> Clone for Resolved<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Resolved<'_, T> {}

/// Full ancestry of a distribution: System -> Query -> Schedule -> Distribution,
/// plus the schedule's group and the distribution's type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineageChain<'a> {
    pub distribution: &'a Distribution,
    pub distribution_type: Resolved<'a, DistributionType>,
    pub schedule: Resolved<'a, Schedule>,
    pub group: Resolved<'a, Group>,
    pub query: Resolved<'a, Query>,
    pub system: Resolved<'a, System>,
}

/// Ancestry of a query as shown on its own detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryLineage<'a> {
    pub system: Resolved<'a, System>,
}

/// Ancestry of a schedule as shown on its own detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleLineage<'a> {
    pub group: Resolved<'a, Group>,
    pub query: Resolved<'a, Query>,
    pub system: Resolved<'a, System>,
}

/// A query list row annotated with its downstream counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryListRow<'a> {
    #[serde(flatten)]
    pub query: &'a Query,
    pub schedule_count: usize,
    pub distribution_count: usize,
}

/// A schedule list row annotated with its downstream count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleListRow<'a> {
    #[serde(flatten)]
    pub schedule: &'a Schedule,
    pub distribution_count: usize,
}

// ---------------------------------------------------------------------------
// Usage
// ---------------------------------------------------------------------------

/// Schedules running `query_id` and the distributions fed by those schedules.
///
/// Both vectors keep input collection order and are empty, never absent,
/// when nothing matches.
pub fn usage_for_query<'a>(
    query_id: &str,
    schedules: &'a [Schedule],
    distributions: &'a [Distribution],
) -> QueryUsage<'a> {
    let schedules: Vec<&Schedule> = schedules
        .iter()
        .filter(|s| s.query_id == query_id)
        .collect();

    let schedule_ids: HashSet<&str> = schedules.iter().map(|s| s.id.as_str()).collect();

    let distributions = distributions
        .iter()
        .filter(|d| schedule_ids.contains(d.schedule_id.as_str()))
        .collect();

    QueryUsage {
        schedules,
        distributions,
    }
}

/// Distributions delivering the results of `schedule_id`, in input order.
pub fn usage_for_schedule<'a>(
    schedule_id: &str,
    distributions: &'a [Distribution],
) -> ScheduleUsage<'a> {
    ScheduleUsage {
        distributions: distributions
            .iter()
            .filter(|d| d.schedule_id == schedule_id)
            .collect(),
    }
}

/// Annotate each query with how many schedules and distributions depend on it.
///
/// Computed from the collections passed in on every call; nothing is cached.
pub fn annotate_queries<'a, I>(
    queries: I,
    schedules: &'a [Schedule],
    distributions: &'a [Distribution],
) -> Vec<QueryListRow<'a>>
where
    I: IntoIterator<Item = &'a Query>,
{
    queries
        .into_iter()
        .map(|query| {
            let usage = usage_for_query(&query.id, schedules, distributions);
            QueryListRow {
                query,
                schedule_count: usage.schedules.len(),
                distribution_count: usage.distributions.len(),
            }
        })
        .collect()
}

/// Annotate each schedule with how many distributions depend on it.
pub fn annotate_schedules<'a, I>(
    schedules: I,
    distributions: &'a [Distribution],
) -> Vec<ScheduleListRow<'a>>
where
    I: IntoIterator<Item = &'a Schedule>,
{
    schedules
        .into_iter()
        .map(|schedule| ScheduleListRow {
            schedule,
            distribution_count: usage_for_schedule(&schedule.id, distributions)
                .distributions
                .len(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Ancestry
// ---------------------------------------------------------------------------

/// Resolve the schedule and query behind a distribution.
///
/// A missing schedule short-circuits: the query is then `None` without a
/// second lookup.
pub fn lineage_for_distribution<'a>(
    distribution: &Distribution,
    schedules: &'a [Schedule],
    queries: &'a [Query],
) -> DistributionLineage<'a> {
    let schedule = find_by_id(schedules, &distribution.schedule_id);
    let query = schedule.and_then(|s| find_by_id(queries, &s.query_id));
    DistributionLineage { schedule, query }
}

/// Assemble the full chain for a distribution.
///
/// The distribution type is the immediate parent the distribution was saved
/// with, so its embed is shown as-is. Schedule, group, query and system are
/// ancestors and are re-resolved by id.
pub fn lineage_chain<'a>(
    distribution: &'a Distribution,
    snapshot: &'a CatalogSnapshot,
) -> LineageChain<'a> {
    let hops = lineage_for_distribution(distribution, &snapshot.schedules, &snapshot.queries);

    let distribution_type = distribution
        .distribution_type
        .as_ref()
        .map_or(Resolved::Missing, Resolved::Snapshot);

    let group = hops
        .schedule
        .and_then(|s| s.group.as_ref())
        .map_or(Resolved::Missing, |embed| {
            Resolved::prefer_live(&embed.id, &snapshot.groups, Some(embed))
        });

    let system = hops.query.map_or(Resolved::Missing, |q| {
        Resolved::prefer_live(&q.system_id, &snapshot.systems, q.system.as_ref())
    });

    LineageChain {
        distribution,
        distribution_type,
        schedule: hops.schedule.map_or(Resolved::Missing, Resolved::Live),
        group,
        query: hops.query.map_or(Resolved::Missing, Resolved::Live),
        system,
    }
}

/// Resolve the system a query was saved against.
pub fn query_lineage<'a>(query: &'a Query, snapshot: &'a CatalogSnapshot) -> QueryLineage<'a> {
    QueryLineage {
        system: Resolved::prefer_embed(query.system.as_ref(), &query.system_id, &snapshot.systems),
    }
}

/// Resolve a schedule's group (immediate parent) and its query and system
/// (ancestors).
pub fn schedule_lineage<'a>(
    schedule: &'a Schedule,
    snapshot: &'a CatalogSnapshot,
) -> ScheduleLineage<'a> {
    let group = match schedule.group.as_ref() {
        Some(embed) => Resolved::Snapshot(embed),
        None => Resolved::Missing,
    };

    let query = find_by_id(&snapshot.queries, &schedule.query_id);

    let system = query.map_or(Resolved::Missing, |q| {
        Resolved::prefer_live(&q.system_id, &snapshot.systems, q.system.as_ref())
    });

    ScheduleLineage {
        group,
        query: query.map_or(Resolved::Missing, Resolved::Live),
        system,
    }
}
