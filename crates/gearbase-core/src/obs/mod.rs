//! Event boundary for the model layer.
//!
//! Entities never dispatch to listeners directly; every lifecycle
//! notification flows through [`ModelEvent`] and [`EventSink`]. The default
//! sink counts events per entity in process-local state, which is what the
//! test plumbing inspects.

mod sink;

pub use sink::{EventSink, ModelEvent, with_event_sink};
pub(crate) use sink::record;

use std::{cell::RefCell, collections::BTreeMap};

thread_local! {
    static FROM_JSON_COUNTS: RefCell<BTreeMap<&'static str, u64>> =
        const { RefCell::new(BTreeMap::new()) };
}

pub(crate) fn bump_from_json(entity: &'static str) {
    FROM_JSON_COUNTS.with(|counts| {
        let mut counts = counts.borrow_mut();
        let entry = counts.entry(entity).or_default();
        *entry = entry.saturating_add(1);
    });
}

/// Number of `fromJson` events recorded for one entity since the last reset.
#[must_use]
pub fn from_json_count(entity: &str) -> u64 {
    FROM_JSON_COUNTS.with(|counts| counts.borrow().get(entity).copied().unwrap_or_default())
}

/// Reset all event counters.
pub fn reset_counts() {
    FROM_JSON_COUNTS.with(|counts| counts.borrow_mut().clear());
}
