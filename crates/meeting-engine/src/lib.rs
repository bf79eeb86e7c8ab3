//! # meeting-engine
//!
//! Find the times in a day when a meeting can happen.
//!
//! Given the day's calendar events and a [`MeetingRequest`] (mandatory
//! attendees, optional attendees, a duration), the engine returns every
//! free stretch of the day that is long enough. Optional attendees are
//! honoured when possible; if they leave no room at all, the answer falls back
//! to the mandatory attendees alone.
//!
//! ```rust
//! use meeting_engine::{query, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![Event::new("Standup", TimeRange::new(540, 600).unwrap(), ["alice"])];
//! let request = MeetingRequest::new(["alice"], 30);
//!
//! let free = query(&events, &request);
//! assert_eq!(free, vec![TimeRange::new(0, 540).unwrap(), TimeRange::new(600, 1440).unwrap()]);
//! ```
//!
//! ## Modules
//!
//! - [`time_range`] — half-open `[start, end)` minutes within a day
//! - [`event`] — an event's range and attendees
//! - [`request`] — the meeting to schedule
//! - [`blocking`] — sorted busy intervals for one pass
//! - [`resolver`] — two-pass gap search
//! - [`schedule`] — JSON document of events plus a request
//! - [`error`] — Error types

pub mod blocking;
pub mod error;
pub mod event;
pub mod request;
pub mod resolver;
pub mod schedule;
pub mod time_range;

pub use blocking::BlockingSet;
pub use error::MeetingError;
pub use event::Event;
pub use request::MeetingRequest;
pub use resolver::{query, query_pass, resolve, Pass, Resolution};
pub use schedule::Schedule;
pub use time_range::{cmp_by_end, minutes_of_day, TimeRange, DAY_MINUTES, END_OF_DAY, START_OF_DAY};
