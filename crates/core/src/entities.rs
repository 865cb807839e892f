//! Catalog entity records.
//!
//! Plain data shared by every layer: the repository persists them, the
//! resolver joins them, the API serializes them. Field names are camelCase on
//! the wire to stay compatible with the dashboard front end.
//!
//! The `system`, `group` and `distribution_type` fields are *embeds*: copies
//! of the referenced record taken at save time. They are not kept in sync
//! with the reference collections; see [`crate::lineage`] for the rule that
//! decides when an embed is trusted.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{ActiveFlag, EntityId, Timestamp, ACTIVE};

// ---------------------------------------------------------------------------
// Entity trait
// ---------------------------------------------------------------------------

/// Behaviour common to every catalog collection member.
pub trait Entity: Clone {
    /// Human-readable entity name for errors and log fields.
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// Creation timestamp. Present once the record has been persisted.
    fn create_ts(&self) -> Option<Timestamp>;

    fn set_create_ts(&mut self, ts: Option<Timestamp>);
}

/// Whether a save creates a record or replaces a stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertMode {
    Insert,
    Update,
}

impl UpsertMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Update => "update",
        }
    }
}

macro_rules! impl_entity {
    ($ty:ty, $kind:literal) => {
        impl Entity for $ty {
            const KIND: &'static str = $kind;

            fn id(&self) -> &str {
                &self.id
            }

            fn create_ts(&self) -> Option<Timestamp> {
                self.create_ts
            }

            fn set_create_ts(&mut self, ts: Option<Timestamp>) {
                self.create_ts = ts;
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Reference data
// ---------------------------------------------------------------------------

/// A source system that queries collect data from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct System {
    #[validate(length(min = 1, message = "id is required"))]
    pub id: EntityId,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_manager: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_of_business: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_ts: Option<Timestamp>,
}

/// A grouping used to organise schedules. Same shape as [`System`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[validate(length(min = 1, message = "id is required"))]
    pub id: EntityId,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_manager: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_of_business: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_ts: Option<Timestamp>,
}

/// Output channel kind (Email, SFTP, Kafka, ...). Static reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionType {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Entity for DistributionType {
    const KIND: &'static str = "DistributionType";

    fn id(&self) -> &str {
        &self.id
    }

    fn create_ts(&self) -> Option<Timestamp> {
        None
    }

    fn set_create_ts(&mut self, _ts: Option<Timestamp>) {}
}

// ---------------------------------------------------------------------------
// Linked entities
// ---------------------------------------------------------------------------

/// A stored data-extraction definition against a named data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    #[validate(length(min = 1, message = "id is required"))]
    pub id: EntityId,
    #[validate(length(min = 1, message = "systemId is required"))]
    pub system_id: EntityId,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1, message = "dataSource is required"))]
    pub data_source: String,
    #[validate(length(min = 1, message = "dataQuery is required"))]
    pub data_query: String,
    #[serde(default)]
    pub data_columns: String,
    #[validate(range(min = 1, message = "maxResults must be positive"))]
    pub max_results: i32,
    #[validate(range(min = 0, max = 1, message = "isActive must be 0 or 1"))]
    pub is_active: ActiveFlag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<System>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_ts: Option<Timestamp>,
}

/// A cron-driven trigger that runs a [`Query`] with a parameter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[validate(length(min = 1, message = "id is required"))]
    pub id: EntityId,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "queryId is required"))]
    pub query_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
    #[validate(length(min = 1, message = "cron is required"))]
    pub cron: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_run: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,
    #[validate(range(min = 0, max = 1, message = "isActive must be 0 or 1"))]
    pub is_active: ActiveFlag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_ts: Option<Timestamp>,
}

/// An output channel delivering a [`Schedule`]'s results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    #[validate(length(min = 1, message = "id is required"))]
    pub id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution_type: Option<DistributionType>,
    #[validate(length(min = 1, message = "scheduleId is required"))]
    pub schedule_id: EntityId,
    /// Free text, expected to hold a JSON object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
    #[validate(range(min = 0, max = 1, message = "isActive must be 0 or 1"))]
    pub is_active: ActiveFlag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_ts: Option<Timestamp>,
}

impl_entity!(System, "System");
impl_entity!(Group, "Group");
impl_entity!(Query, "Query");
impl_entity!(Schedule, "Schedule");
impl_entity!(Distribution, "Distribution");

impl Query {
    pub fn is_active(&self) -> bool {
        self.is_active == ACTIVE
    }
}

impl Schedule {
    pub fn is_active(&self) -> bool {
        self.is_active == ACTIVE
    }
}

impl Distribution {
    pub fn is_active(&self) -> bool {
        self.is_active == ACTIVE
    }
}
