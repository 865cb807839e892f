//! Free-text filtering for the list views.
//!
//! Matching is a case-insensitive substring test over a few identifying
//! fields per entity. List views search what they display, so embedded
//! names (system, group, distribution type) are matched as stored.

use crate::entities::{Distribution, Group, Query, Schedule, System};

/// Entities that can be filtered by a search term.
pub trait Searchable {
    /// Fields matched against the term, in display order.
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Query {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.id.as_str()];
        if let Some(system) = &self.system {
            fields.push(system.name.as_str());
        }
        fields
    }
}

impl Searchable for Schedule {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.id.as_str()];
        if let Some(group) = &self.group {
            fields.push(group.name.as_str());
        }
        fields
    }
}

impl Searchable for Distribution {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.id.as_str(), self.schedule_id.as_str()];
        if let Some(kind) = &self.distribution_type {
            fields.push(kind.name.as_str());
        }
        fields
    }
}

impl Searchable for System {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.id.as_str()]
    }
}

impl Searchable for Group {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.id.as_str()]
    }
}

/// Whether `item` matches `term`. A blank term matches everything.
pub fn matches<T: Searchable>(item: &T, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

/// Keep the items matching `term`, in input order.
pub fn filter<'a, T: Searchable>(items: &'a [T], term: Option<&str>) -> Vec<&'a T> {
    match term {
        Some(term) => items.iter().filter(|item| matches(*item, term)).collect(),
        None => items.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{distribution, distribution_type, group, query, schedule, system};

    #[test]
    fn blank_term_matches_everything() {
        let queries = vec![query("QRY001", "SYS001"), query("QRY002", "SYS001")];
        assert_eq!(filter(&queries, Some("  ")).len(), 2);
        assert_eq!(filter(&queries, None).len(), 2);
    }

    #[test]
    fn query_matches_id_name_and_embedded_system() {
        let mut q = query("QRY001", "SYS001");
        q.name = "Active Customers".into();
        q.system = Some(system("SYS001", "CRM Core"));

        assert!(matches(&q, "qry0"));
        assert!(matches(&q, "CUSTOMERS"));
        assert!(matches(&q, "crm"));
        assert!(!matches(&q, "billing"));
    }

    #[test]
    fn schedule_matches_group_name() {
        let mut s = schedule("SCH001", "QRY001");
        s.group = Some(group("GRP001", "Daily Reports"));
        assert!(matches(&s, "daily"));
        assert!(!matches(&s, "QRY001"));
    }

    #[test]
    fn distribution_matches_schedule_id_and_type() {
        let mut d = distribution("DST001", "SCH002");
        d.distribution_type = Some(distribution_type("TYPE002", "SFTP"));
        assert!(matches(&d, "sch002"));
        assert!(matches(&d, "sftp"));
        assert!(!matches(&d, "kafka"));
    }

    #[test]
    fn filter_preserves_order() {
        let systems = vec![
            system("SYS003", "Data Warehouse"),
            system("SYS001", "CRM Core"),
            system("SYS002", "Legacy Billing"),
        ];
        let hits: Vec<_> = filter(&systems, Some("sys00"))
            .into_iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(hits, ["SYS003", "SYS001", "SYS002"]);
    }
}
