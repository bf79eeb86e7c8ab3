//! Blocking intervals: the parts of the day already taken by someone the
//! meeting has to work around.
//!
//! The intervals are kept sorted by start (then end, then input order) next to
//! a running maximum of their ends. Both questions the gap search asks, "where
//! does the next busy period begin?" and "is this minute already taken?", are
//! then a binary search away.

use crate::event::Event;
use crate::request::MeetingRequest;
use crate::resolver::Pass;
use crate::time_range::TimeRange;

/// Sorted busy intervals for one resolver pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockingSet {
    ranges: Vec<TimeRange>,
    /// `reach[i]` is the largest end among `ranges[..=i]`.
    reach: Vec<u32>,
}

impl BlockingSet {
    /// Collect the intervals of every event that blocks `request` in `pass`.
    ///
    /// An event blocks when one of its attendees is mandatory, or, in the
    /// inclusive pass, optional. Empty event ranges take up no time and are
    /// skipped.
    pub fn collect(events: &[Event], request: &MeetingRequest, pass: Pass) -> Self {
        let blocking = events.iter().filter(|event| {
            !event.attendees().is_disjoint(request.mandatory_attendees())
                || (pass.blocks_optional()
                    && !event.attendees().is_disjoint(request.optional_attendees()))
        });
        Self::from_ranges(blocking.map(Event::when))
    }

    /// Build a set from arbitrary ranges. Order and overlap do not matter.
    pub fn from_ranges(ranges: impl IntoIterator<Item = TimeRange>) -> Self {
        let mut ranges: Vec<TimeRange> = ranges.into_iter().filter(|r| !r.is_empty()).collect();

        // Stable, so equal ranges keep their input order.
        ranges.sort_by_key(|r| (r.start(), r.end()));

        let reach = ranges
            .iter()
            .scan(0, |max_end, r| {
                *max_end = r.end().max(*max_end);
                Some(*max_end)
            })
            .collect();

        Self { ranges, reach }
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// The blocking intervals, sorted by start.
    pub fn ranges(&self) -> &[TimeRange] {
        &self.ranges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimeRange> {
        self.ranges.iter()
    }

    /// Start of the earliest blocking interval.
    pub fn first_start(&self) -> Option<u32> {
        self.ranges.first().map(TimeRange::start)
    }

    /// Smallest blocking start strictly greater than `minute`.
    pub fn next_start_after(&self, minute: u32) -> Option<u32> {
        let idx = self.started_by(minute);
        self.ranges.get(idx).map(TimeRange::start)
    }

    /// True when some blocking interval contains `minute`.
    pub fn covers(&self, minute: u32) -> bool {
        match self.started_by(minute) {
            0 => false,
            idx => self.reach[idx - 1] > minute,
        }
    }

    /// Number of intervals starting at or before `minute`.
    fn started_by(&self, minute: u32) -> usize {
        self.ranges.partition_point(|r| r.start() <= minute)
    }
}

impl<'a> IntoIterator for &'a BlockingSet {
    type Item = &'a TimeRange;
    type IntoIter = std::slice::Iter<'a, TimeRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
