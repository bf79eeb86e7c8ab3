//! Half-open ranges of minutes within a single day.
//!
//! A [`TimeRange`] is `[start, end)` measured in minutes since midnight, with
//! `0 <= start <= end <= 1440`. Ranges are immutable and can only be built
//! through validating constructors, so every value in circulation upholds the
//! invariant.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MeetingError, Result};

/// Number of minutes in a day. Also the exclusive end of [`TimeRange::WHOLE_DAY`].
pub const DAY_MINUTES: u32 = 24 * 60;

/// First minute of the day (00:00).
pub const START_OF_DAY: u32 = 0;

/// Last minute of the day (23:59). Use with an inclusive end.
pub const END_OF_DAY: u32 = DAY_MINUTES - 1;

/// Convert a clock time to minutes since midnight.
///
/// `minutes_of_day(9, 30)` is 570. No range checking is done here; the
/// result is validated when it is used to build a [`TimeRange`].
pub const fn minutes_of_day(hours: u32, minutes: u32) -> u32 {
    hours * 60 + minutes
}

/// An immutable `[start, end)` range of minutes within one day.
///
/// Ordering is by start, then by end. See [`cmp_by_end`] for the end-first
/// ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawRange", into = "RawRange")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

impl TimeRange {
    /// The range covering the entire day, `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        end: DAY_MINUTES,
    };

    /// Build the half-open range `[start, end)`.
    ///
    /// # Errors
    /// Returns `MeetingError::InvalidRange` if `start > end` and
    /// `MeetingError::OutOfDay` if `end > 1440`.
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start > end {
            return Err(MeetingError::InvalidRange { start, end });
        }
        if end > DAY_MINUTES {
            return Err(MeetingError::OutOfDay { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build a range from two bounds, optionally treating `end` as the last
    /// included minute.
    ///
    /// `from_start_end(START_OF_DAY, END_OF_DAY, true)` equals
    /// [`TimeRange::WHOLE_DAY`].
    pub fn from_start_end(start: u32, end: u32, inclusive: bool) -> Result<Self> {
        if inclusive {
            Self::new(start, end.saturating_add(1))
        } else {
            Self::new(start, end)
        }
    }

    /// Build the range that starts at `start` and lasts `duration` minutes.
    pub fn from_start_duration(start: u32, duration: u32) -> Result<Self> {
        Self::new(start, start.saturating_add(duration))
    }

    /// Bounds that the caller has already checked.
    pub(crate) const fn from_bounds(start: u32, end: u32) -> Self {
        debug_assert!(start <= end && end <= DAY_MINUTES);
        Self { start, end }
    }

    pub const fn start(&self) -> u32 {
        self.start
    }

    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Length of the range in minutes.
    pub const fn duration(&self) -> u32 {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True when `other` lies entirely within this range.
    ///
    /// Every range contains itself, and any range contains an empty range
    /// positioned within its bounds.
    pub const fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// True when `minute` falls in `[start, end)`.
    pub const fn contains_minute(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }

    /// Two ranges overlap iff `a.start < b.end && b.start < a.end`.
    ///
    /// Adjacent ranges (one ends exactly when the other starts) do NOT overlap.
    pub const fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Order ranges by end, then by start.
pub fn cmp_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
    a.end.cmp(&b.end).then(a.start.cmp(&b.start))
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:02}:{:02}, {:02}:{:02})",
            self.start / 60,
            self.start % 60,
            self.end / 60,
            self.end % 60
        )
    }
}

/// Wire shape of a range. Deserialization goes through [`TimeRange::new`].
#[derive(Serialize, Deserialize)]
struct RawRange {
    start: u32,
    end: u32,
}

impl TryFrom<RawRange> for TimeRange {
    type Error = MeetingError;

    fn try_from(raw: RawRange) -> Result<Self> {
        TimeRange::new(raw.start, raw.end)
    }
}

impl From<TimeRange> for RawRange {
    fn from(range: TimeRange) -> Self {
        RawRange {
            start: range.start,
            end: range.end,
        }
    }
}
