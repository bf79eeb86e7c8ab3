//! The meeting being scheduled: who must come, who may come, and for how long.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A request to find room in the day for a meeting.
///
/// Mandatory attendees must be free for the whole meeting. Optional attendees
/// are accommodated when possible and dropped when they make the meeting
/// impossible; see [`crate::resolver::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    #[serde(default, rename = "attendees", alias = "mandatory_attendees")]
    mandatory_attendees: HashSet<String>,
    #[serde(default)]
    optional_attendees: HashSet<String>,
    duration_minutes: u32,
}

impl MeetingRequest {
    pub fn new<I, S>(attendees: I, duration_minutes: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mandatory_attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: HashSet::new(),
            duration_minutes,
        }
    }

    /// Add one optional attendee.
    pub fn with_optional_attendee(mut self, attendee: impl Into<String>) -> Self {
        self.optional_attendees.insert(attendee.into());
        self
    }

    /// Add several optional attendees.
    pub fn with_optional_attendees<I, S>(mut self, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees
            .extend(attendees.into_iter().map(Into::into));
        self
    }

    pub fn mandatory_attendees(&self) -> &HashSet<String> {
        &self.mandatory_attendees
    }

    pub fn optional_attendees(&self) -> &HashSet<String> {
        &self.optional_attendees
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// True when anyone at all, mandatory or optional, is invited.
    pub fn has_attendees(&self) -> bool {
        !self.mandatory_attendees.is_empty() || !self.optional_attendees.is_empty()
    }
}
