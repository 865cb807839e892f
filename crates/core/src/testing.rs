//! Minimal record builders shared by the unit tests in this crate.

use crate::entities::{Distribution, DistributionType, Group, Query, Schedule, System};
use crate::types::ACTIVE;

pub fn system(id: &str, name: &str) -> System {
    System {
        id: id.into(),
        name: name.into(),
        department: None,
        user_manager: None,
        line_of_business: None,
        create_ts: None,
    }
}

pub fn group(id: &str, name: &str) -> Group {
    Group {
        id: id.into(),
        name: name.into(),
        department: None,
        user_manager: None,
        line_of_business: None,
        create_ts: None,
    }
}

pub fn distribution_type(id: &str, name: &str) -> DistributionType {
    DistributionType {
        id: id.into(),
        name: name.into(),
        description: None,
    }
}

pub fn query(id: &str, system_id: &str) -> Query {
    Query {
        id: id.into(),
        system_id: system_id.into(),
        name: format!("Query {id}"),
        description: String::new(),
        data_source: "Oracle_Prod".into(),
        data_query: "SELECT 1".into(),
        data_columns: "id, name".into(),
        max_results: 100,
        is_active: ACTIVE,
        system: None,
        create_ts: None,
    }
}

pub fn schedule(id: &str, query_id: &str) -> Schedule {
    Schedule {
        id: id.into(),
        name: format!("Schedule {id}"),
        query_id: query_id.into(),
        parameters: None,
        cron: "0 0 8 * * ?".into(),
        next_run: None,
        group: None,
        is_active: ACTIVE,
        create_ts: None,
    }
}

pub fn distribution(id: &str, schedule_id: &str) -> Distribution {
    Distribution {
        id: id.into(),
        distribution_type: None,
        schedule_id: schedule_id.into(),
        parameters: None,
        is_active: ACTIVE,
        create_ts: None,
    }
}
