//! Preparing submitted records for persistence.
//!
//! The resolver tolerates dangling references, but the write path does not
//! create new ones: a submitted record must name parents that exist at save
//! time, and its embeds are re-snapshotted from the authoritative
//! collections so they reflect the state at the moment of saving.

use crate::entities::{Distribution, Entity, Group, Query, Schedule, System, UpsertMode};
use crate::error::CoreError;
use crate::snapshot::{find_by_id, CatalogSnapshot};
use crate::validation;

/// Check the submitted mode against what is stored and carry over the
/// stored creation timestamp on update.
///
/// - Insert of an id that already exists is a conflict.
/// - Update of an id that does not exist is not found.
pub fn reconcile_mode<E: Entity>(
    entity: &mut E,
    mode: UpsertMode,
    existing: Option<&E>,
) -> Result<(), CoreError> {
    match (mode, existing) {
        (UpsertMode::Insert, Some(_)) => Err(CoreError::Conflict(format!(
            "{} with id '{}' already exists",
            E::KIND,
            entity.id()
        ))),
        (UpsertMode::Insert, None) => {
            entity.set_create_ts(None);
            Ok(())
        }
        (UpsertMode::Update, Some(stored)) => {
            entity.set_create_ts(stored.create_ts());
            Ok(())
        }
        (UpsertMode::Update, None) => Err(CoreError::NotFound {
            entity: E::KIND,
            id: entity.id().to_string(),
        }),
    }
}

pub fn prepare_system(
    mut system: System,
    mode: UpsertMode,
    snapshot: &CatalogSnapshot,
) -> Result<System, CoreError> {
    validation::validate_system(&system)?;
    let existing = snapshot.system(&system.id);
    reconcile_mode(&mut system, mode, existing)?;
    Ok(system)
}

pub fn prepare_group(
    mut group: Group,
    mode: UpsertMode,
    snapshot: &CatalogSnapshot,
) -> Result<Group, CoreError> {
    validation::validate_group(&group)?;
    let existing = snapshot.group(&group.id);
    reconcile_mode(&mut group, mode, existing)?;
    Ok(group)
}

/// Validate a query and embed the current copy of its system.
pub fn prepare_query(
    mut query: Query,
    mode: UpsertMode,
    snapshot: &CatalogSnapshot,
) -> Result<Query, CoreError> {
    validation::validate_query(&query)?;
    let existing = snapshot.query(&query.id);
    reconcile_mode(&mut query, mode, existing)?;

    let system = find_by_id(&snapshot.systems, &query.system_id)
        .ok_or_else(|| unknown("system", &query.system_id))?;
    query.system = Some(system.clone());
    Ok(query)
}

/// Validate a schedule, check its query exists and embed the current copy
/// of its group.
pub fn prepare_schedule(
    mut schedule: Schedule,
    mode: UpsertMode,
    snapshot: &CatalogSnapshot,
) -> Result<Schedule, CoreError> {
    validation::validate_schedule(&schedule)?;
    let existing = snapshot.schedule(&schedule.id);
    reconcile_mode(&mut schedule, mode, existing)?;

    if snapshot.query(&schedule.query_id).is_none() {
        return Err(unknown("query", &schedule.query_id));
    }

    let group_id = schedule.group.as_ref().map(|g| g.id.clone()).unwrap_or_default();
    let group = snapshot
        .group(&group_id)
        .ok_or_else(|| unknown("group", &group_id))?;
    schedule.group = Some(group.clone());
    Ok(schedule)
}

/// Validate a distribution, check its schedule exists and embed the current
/// copy of its distribution type.
pub fn prepare_distribution(
    mut distribution: Distribution,
    mode: UpsertMode,
    snapshot: &CatalogSnapshot,
) -> Result<Distribution, CoreError> {
    validation::validate_distribution(&distribution)?;
    let existing = snapshot.distribution(&distribution.id);
    reconcile_mode(&mut distribution, mode, existing)?;

    if snapshot.schedule(&distribution.schedule_id).is_none() {
        return Err(unknown("schedule", &distribution.schedule_id));
    }

    let type_id = distribution
        .distribution_type
        .as_ref()
        .map(|t| t.id.clone())
        .unwrap_or_default();
    let kind = snapshot
        .distribution_type(&type_id)
        .ok_or_else(|| unknown("distribution type", &type_id))?;
    distribution.distribution_type = Some(kind.clone());
    Ok(distribution)
}

fn unknown(what: &str, id: &str) -> CoreError {
    CoreError::Validation(format!("unknown {what} '{id}'"))
}
