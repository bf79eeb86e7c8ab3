//! Calendar events as seen by the resolver: a time range and who is busy.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::time_range::TimeRange;

/// A calendar entry that keeps its attendees busy for `when`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    title: String,
    when: TimeRange,
    #[serde(default)]
    attendees: HashSet<String>,
}

impl Event {
    pub fn new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn when(&self) -> TimeRange {
        self.when
    }

    pub fn attendees(&self) -> &HashSet<String> {
        &self.attendees
    }
}
