/// Entity identifiers are operator-assigned strings (e.g. `QRY001`).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Activity flag stored as `0` / `1`, matching the upstream collector schema.
pub type ActiveFlag = i16;

/// The record participates in collection, scheduling or distribution.
pub const ACTIVE: ActiveFlag = 1;

/// The record is switched off.
pub const INACTIVE: ActiveFlag = 0;
