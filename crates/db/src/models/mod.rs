//! Database row types.
//!
//! Each row struct maps one table and converts into the matching
//! `disthub_core::entities` record. Embedded parents are stored as JSONB.

pub mod distribution;
pub mod distribution_type;
pub mod group;
pub mod query;
pub mod schedule;
pub mod system;
