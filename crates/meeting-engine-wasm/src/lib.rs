//! WASM bindings for meeting-engine.
//!
//! Exposes the meeting resolver to JavaScript via `wasm-bindgen`. Events and
//! requests cross the boundary as JSON strings, in the same shape the
//! `find-meeting` CLI reads.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p meeting-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/meeting-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/meeting_engine_wasm.wasm
//! ```

use meeting_engine::{Event, MeetingRequest, Resolution};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Parse the events array and the request, then resolve them.
///
/// Kept free of `JsValue` so it can run on any target.
fn resolve_json(events_json: &str, request_json: &str) -> Result<Resolution, String> {
    let events: Vec<Event> = serde_json::from_str(events_json)
        .map_err(|e| format!("Invalid events JSON: {}", e))?;
    let request: MeetingRequest = serde_json::from_str(request_json)
        .map_err(|e| format!("Invalid request JSON: {}", e))?;

    Ok(meeting_engine::resolve(&events, &request))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Find every free range of the day that fits the meeting.
///
/// `events_json` is a JSON array of `{title, when: {start, end}, attendees}`
/// objects; `request_json` is `{attendees, optional_attendees, duration_minutes}`.
/// Returns a JSON array of `{start, end}` objects in minutes since midnight.
#[wasm_bindgen(js_name = "findMeetingTimes")]
pub fn find_meeting_times(events_json: &str, request_json: &str) -> Result<String, JsValue> {
    let resolution =
        resolve_json(events_json, request_json).map_err(|e| JsValue::from_str(&e))?;
    to_json(&resolution.slots)
}

/// Like `findMeetingTimes`, but returns `{pass, slots}` where `pass` is
/// `"inclusive"` or `"mandatory_only"` (optional attendees were dropped).
#[wasm_bindgen(js_name = "findMeetingTimesExplained")]
pub fn find_meeting_times_explained(
    events_json: &str,
    request_json: &str,
) -> Result<String, JsValue> {
    let resolution =
        resolve_json(events_json, request_json).map_err(|e| JsValue::from_str(&e))?;
    to_json(&resolution)
}
