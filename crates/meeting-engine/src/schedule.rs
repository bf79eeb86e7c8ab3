//! JSON document pairing a day's events with one meeting request.
//!
//! ```json
//! {
//!   "events": [{"title": "Standup", "when": {"start": 540, "end": 600}, "attendees": ["alice"]}],
//!   "request": {"attendees": ["alice"], "optional_attendees": ["bob"], "duration_minutes": 30}
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::event::Event;
use crate::request::MeetingRequest;
use crate::resolver::{self, Resolution};

/// A day's events together with the meeting to fit between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub events: Vec<Event>,
    pub request: MeetingRequest,
}

impl Schedule {
    /// Parse a schedule document. Ranges are validated while parsing.
    ///
    /// # Errors
    /// Returns `MeetingError::Json` if the document is malformed, including
    /// when a range is inverted, runs past 1440, or a duration is negative.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve the request against this schedule's events.
    pub fn resolve(&self) -> Resolution {
        resolver::resolve(&self.events, &self.request)
    }
}
