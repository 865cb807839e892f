//! Activity statistics for the dashboard overview.

use serde::Serialize;

use crate::snapshot::CatalogSnapshot;

/// Active vs. total count for one entity collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityStat {
    /// Collection name (`queries`, `schedules`, `distributions`).
    pub name: &'static str,
    pub active: usize,
    pub total: usize,
    /// `active / total` as a percentage; `0.0` for an empty collection.
    pub active_pct: f64,
}

impl ActivityStat {
    fn new(name: &'static str, active: usize, total: usize) -> Self {
        let active_pct = if total == 0 {
            0.0
        } else {
            (active as f64 / total as f64) * 100.0
        };
        Self {
            name,
            active,
            total,
            active_pct,
        }
    }
}

/// Compute the overview cards for queries, schedules and distributions.
pub fn activity_stats(snapshot: &CatalogSnapshot) -> Vec<ActivityStat> {
    vec![
        ActivityStat::new(
            "queries",
            snapshot.queries.iter().filter(|q| q.is_active()).count(),
            snapshot.queries.len(),
        ),
        ActivityStat::new(
            "schedules",
            snapshot.schedules.iter().filter(|s| s.is_active()).count(),
            snapshot.schedules.len(),
        ),
        ActivityStat::new(
            "distributions",
            snapshot.distributions.iter().filter(|d| d.is_active()).count(),
            snapshot.distributions.len(),
        ),
    ]
}
