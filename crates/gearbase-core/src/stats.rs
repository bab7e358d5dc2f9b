//! Read-only lookup into the externally-owned stats document.
//!
//! Shape: `location -> mode -> resource type -> field -> value`, where a
//! value is either a plain count or a per-status breakdown. Missing keys are
//! reported as typed errors rather than silently returning nothing.

use crate::access::Limits;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

/// Location bucket that aggregates every location.
pub const ALL_LOCATIONS: &str = "all";

/// Mode used when the caller does not name one.
pub const DEFAULT_MODE: &str = "production";

///
/// StatValue
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    /// Plain count, e.g. `items.total`.
    Number(i64),
    /// Per-status breakdown, e.g. `items.status.expired`.
    Breakdown(BTreeMap<String, i64>),
}

/// Stats for one resource type: field name to value.
pub type StatGroup = BTreeMap<String, StatValue>;

/// `location -> mode -> resource type -> StatGroup`.
pub type Stats = BTreeMap<String, BTreeMap<String, BTreeMap<String, StatGroup>>>;

///
/// StatError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum StatError {
    /// No usable location/mode bucket in the stats document.
    #[error("invalid stats")]
    InvalidStats,

    #[error("stat doesn't exist: {0}")]
    UnknownType(String),

    #[error("stat value doesn't exist: {0}")]
    UnknownField(String),
}

/// All fields of one resource type. The location falls back to the `"all"`
/// bucket when absent or the literal `"null"`; mode defaults to
/// `"production"`.
pub fn stat_group<'a>(
    stats: &'a Stats,
    kind: &str,
    location: Option<&str>,
    mode: Option<&str>,
) -> Result<&'a StatGroup, StatError> {
    let bucket = location
        .filter(|loc| !loc.is_empty() && *loc != "null")
        .and_then(|loc| stats.get(loc))
        .or_else(|| stats.get(ALL_LOCATIONS))
        .ok_or(StatError::InvalidStats)?;

    let modes = bucket
        .get(mode.unwrap_or(DEFAULT_MODE))
        .ok_or(StatError::InvalidStats)?;

    modes
        .get(kind)
        .ok_or_else(|| StatError::UnknownType(kind.to_owned()))
}

/// One field of one resource type.
pub fn stat<'a>(
    stats: &'a Stats,
    kind: &str,
    field: &str,
    location: Option<&str>,
    mode: Option<&str>,
) -> Result<&'a StatValue, StatError> {
    stat_group(stats, kind, location, mode)?
        .get(field)
        .ok_or_else(|| StatError::UnknownField(field.to_owned()))
}

/// One field of one resource type, required to be a plain count.
pub fn stat_number(
    stats: &Stats,
    kind: &str,
    field: &str,
    location: Option<&str>,
    mode: Option<&str>,
) -> Result<i64, StatError> {
    match stat(stats, kind, field, location, mode)? {
        StatValue::Number(n) => Ok(*n),
        StatValue::Breakdown(_) => Err(StatError::UnknownField(field.to_owned())),
    }
}

/// One field of one resource type, required to be a per-status breakdown.
pub fn stat_breakdown<'a>(
    stats: &'a Stats,
    kind: &str,
    field: &str,
    location: Option<&str>,
    mode: Option<&str>,
) -> Result<&'a BTreeMap<String, i64>, StatError> {
    match stat(stats, kind, field, location, mode)? {
        StatValue::Breakdown(map) => Ok(map),
        StatValue::Number(_) => Err(StatError::UnknownField(field.to_owned())),
    }
}

/// Items the plan still allows: the max minus live items, where expired
/// items hand their slot back.
pub fn num_items_left(limits: &Limits, stats: &Stats) -> Result<i64, StatError> {
    let per_status = stat_breakdown(stats, "items", "status", None, None)?;
    let total = stat_number(stats, "items", "total", None, None)?;
    let expired = per_status.get("expired").copied().unwrap_or_default();

    Ok(limits.max_items - total + expired)
}

/// Seats the plan still allows, counting only active users.
pub fn num_users_left(limits: &Limits, stats: &Stats) -> Result<i64, StatError> {
    let per_status = stat_breakdown(stats, "users", "status", None, None)?;
    let active = per_status.get("active").copied().unwrap_or_default();

    Ok(limits.max_users - active)
}

///
/// TESTS
///
