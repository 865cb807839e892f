//! Write-path field validation.
//!
//! Field rules are declared on the entity structs with `validator` derives;
//! the functions here run them and add the cross-field rules that derives
//! cannot express. Every failure is a [`CoreError::Validation`].

use validator::{Validate, ValidationErrors};

use crate::entities::{Distribution, Group, Query, Schedule, System};
use crate::error::CoreError;

/// Quartz-style cron: seconds, minutes, hours, day-of-month, month,
/// day-of-week and an optional year.
const CRON_MIN_FIELDS: usize = 6;
const CRON_MAX_FIELDS: usize = 7;

pub fn validate_system(system: &System) -> Result<(), CoreError> {
    run_derived(system)?;
    require_id("id", &system.id)
}

pub fn validate_group(group: &Group) -> Result<(), CoreError> {
    run_derived(group)?;
    require_id("id", &group.id)
}

pub fn validate_query(query: &Query) -> Result<(), CoreError> {
    run_derived(query)?;
    require_id("id", &query.id)?;
    require_id("systemId", &query.system_id)
}

/// Schedules additionally need a group and a well-formed cron expression.
pub fn validate_schedule(schedule: &Schedule) -> Result<(), CoreError> {
    run_derived(schedule)?;
    require_id("id", &schedule.id)?;
    require_id("queryId", &schedule.query_id)?;
    if schedule.group.is_none() {
        return Err(CoreError::Validation("group is required".into()));
    }
    validate_cron(&schedule.cron)
}

/// Distributions additionally need a type, and parameters (when given)
/// must hold a JSON object.
pub fn validate_distribution(distribution: &Distribution) -> Result<(), CoreError> {
    run_derived(distribution)?;
    require_id("id", &distribution.id)?;
    require_id("scheduleId", &distribution.schedule_id)?;
    if distribution.distribution_type.is_none() {
        return Err(CoreError::Validation("distributionType is required".into()));
    }
    match distribution.parameters.as_deref().map(str::trim) {
        None | Some("") => Ok(()),
        Some(raw) => validate_json_object("parameters", raw),
    }
}

/// Check the field count of a cron expression. Field contents are not
/// interpreted here.
pub fn validate_cron(cron: &str) -> Result<(), CoreError> {
    let fields = cron.split_whitespace().count();
    if (CRON_MIN_FIELDS..=CRON_MAX_FIELDS).contains(&fields) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "cron must have {CRON_MIN_FIELDS} or {CRON_MAX_FIELDS} fields, got {fields}"
        )))
    }
}

fn validate_json_object(name: &str, raw: &str) -> Result<(), CoreError> {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Object(_)) => Ok(()),
        Ok(_) => Err(CoreError::Validation(format!(
            "{name} must be a JSON object"
        ))),
        Err(e) => Err(CoreError::Validation(format!(
            "{name} is not valid JSON: {e}"
        ))),
    }
}

/// Ids are join keys compared exactly: surrounding whitespace is refused.
fn require_id(name: &str, value: &str) -> Result<(), CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{name} is required")));
    }
    if trimmed.len() != value.len() {
        return Err(CoreError::Validation(format!(
            "{name} must not start or end with whitespace"
        )));
    }
    Ok(())
}

fn run_derived<T: Validate>(entity: &T) -> Result<(), CoreError> {
    entity
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Flatten derive errors into one sorted, `; `-separated message.
fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let field = field.to_string();
            field_errors.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}
