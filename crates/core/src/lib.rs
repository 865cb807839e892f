//! Domain core for the distribution hub.
//!
//! Entity records, the lineage resolver and the write-path rules. No I/O:
//! everything here operates on borrowed collections handed in by the
//! repository layer.

pub mod dashboard;
pub mod entities;
pub mod error;
pub mod integrity;
pub mod lineage;
pub mod prepare;
pub mod search;
pub mod snapshot;
pub mod types;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;
