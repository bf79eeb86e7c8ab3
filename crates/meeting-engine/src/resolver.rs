//! Find every stretch of the day long enough for a meeting.
//!
//! Resolution runs in up to two passes over the same gap search. The first
//! (inclusive) pass treats both mandatory and optional attendees as busy. If
//! that leaves no room, the second pass ignores optional attendees, so the
//! meeting still goes ahead for everyone who has to be there.
//!
//! A pass collects the intervals of blocking events, sorts them by start, and
//! walks them looking for free stretches: one before the first busy interval,
//! and one after each busy interval that does not itself end inside another.
//! Each stretch runs to the next busy start (or the end of the day) and is
//! kept if it fits the requested duration.

use std::iter;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::blocking::BlockingSet;
use crate::event::Event;
use crate::request::MeetingRequest;
use crate::time_range::{TimeRange, DAY_MINUTES, START_OF_DAY};

/// Which attendees a resolver pass treats as busy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pass {
    /// Mandatory and optional attendees both block.
    Inclusive,
    /// Only mandatory attendees block.
    MandatoryOnly,
}

impl Pass {
    pub fn blocks_optional(self) -> bool {
        self == Pass::Inclusive
    }
}

/// Result of [`resolve`]: the free ranges and the pass that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub pass: Pass,
    /// Disjoint ranges sorted by start, each at least the requested duration.
    pub slots: Vec<TimeRange>,
}

/// Free ranges for `request`, falling back to mandatory attendees only when
/// optional attendees make the meeting impossible.
///
/// Equivalent to `resolve(events, request).slots`. An empty result means the
/// meeting cannot happen today.
pub fn query(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    resolve(events, request).slots
}

/// Like [`query`], but also reports which pass the answer came from.
///
/// The mandatory-only pass is skipped when there are no optional attendees,
/// since it would repeat the inclusive pass exactly.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(events = events.len(), duration = request.duration_minutes())
)]
pub fn resolve(events: &[Event], request: &MeetingRequest) -> Resolution {
    let slots = query_pass(events, request, Pass::Inclusive);
    if !slots.is_empty() || request.optional_attendees().is_empty() {
        return Resolution {
            pass: Pass::Inclusive,
            slots,
        };
    }

    debug!(
        optional = request.optional_attendees().len(),
        "no room with optional attendees, retrying with mandatory attendees only"
    );
    Resolution {
        pass: Pass::MandatoryOnly,
        slots: query_pass(events, request, Pass::MandatoryOnly),
    }
}

/// Run a single pass of the gap search.
pub fn query_pass(events: &[Event], request: &MeetingRequest, pass: Pass) -> Vec<TimeRange> {
    let duration = request.duration_minutes();

    if duration > DAY_MINUTES {
        return Vec::new();
    }
    if !request.has_attendees() {
        return vec![TimeRange::WHOLE_DAY];
    }

    let blocking = BlockingSet::collect(events, request, pass);
    let Some(first_start) = blocking.first_start() else {
        return vec![TimeRange::WHOLE_DAY];
    };

    let candidates = iter::once((START_OF_DAY, first_start)).chain(blocking.iter().map(|busy| {
        let start = busy.end();
        let end = blocking.next_start_after(start).unwrap_or(DAY_MINUTES);
        (start, end)
    }));

    let mut gaps: Vec<TimeRange> = Vec::new();
    for (start, end) in candidates {
        if end <= start || end - start < duration || blocking.covers(start) {
            continue;
        }
        let gap = TimeRange::from_bounds(start, end);
        // Accepted gaps arrive in start order; a repeat can only match the last one.
        if gaps.last().is_some_and(|last| last.contains(&gap)) {
            continue;
        }
        trace!(?pass, %gap, "free range");
        gaps.push(gap);
    }

    gaps
}
