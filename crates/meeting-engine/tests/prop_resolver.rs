//! Property-based tests for the resolver using proptest.
//!
//! These check invariants that hold for *any* day of events, not just the
//! hand-picked cases in `resolver_tests.rs`.

use meeting_engine::{query, query_pass, Event, MeetingRequest, Pass, TimeRange, DAY_MINUTES};
use proptest::prelude::*;
use proptest::sample::subsequence;

const PEOPLE: [&str; 5] = ["alice", "bob", "carol", "dave", "erin"];

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_range() -> impl Strategy<Value = TimeRange> {
    (0u32..=DAY_MINUTES)
        .prop_flat_map(|start| (Just(start), start..=DAY_MINUTES))
        .prop_map(|(start, end)| TimeRange::new(start, end).unwrap())
}

/// Mostly short ranges, which leave gaps worth finding.
fn arb_short_range() -> impl Strategy<Value = TimeRange> {
    (0u32..DAY_MINUTES, 1u32..=180)
        .prop_map(|(start, len)| TimeRange::new(start, (start + len).min(DAY_MINUTES)).unwrap())
}

fn arb_people() -> impl Strategy<Value = Vec<&'static str>> {
    subsequence(PEOPLE.to_vec(), 0..=3)
}

fn arb_event() -> impl Strategy<Value = Event> {
    (
        prop_oneof![3 => arb_short_range(), 1 => arb_range()],
        subsequence(PEOPLE.to_vec(), 1..=2),
    )
        .prop_map(|(when, attendees)| Event::new("Event", when, attendees))
}

fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(arb_event(), 0..12)
}

fn arb_duration() -> impl Strategy<Value = u32> {
    prop_oneof![4 => 0u32..=240, 1 => 0u32..=1600]
}

fn arb_request() -> impl Strategy<Value = MeetingRequest> {
    (arb_people(), arb_people(), arb_duration()).prop_map(|(mandatory, optional, duration)| {
        MeetingRequest::new(mandatory, duration).with_optional_attendees(optional)
    })
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 512,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Oracle: merge busy periods, then take the complement
// ---------------------------------------------------------------------------

fn free_by_merging(events: &[Event], request: &MeetingRequest, pass: Pass) -> Vec<TimeRange> {
    let mut busy: Vec<(u32, u32)> = events
        .iter()
        .filter(|e| {
            e.attendees().iter().any(|a| {
                request.mandatory_attendees().contains(a)
                    || (pass == Pass::Inclusive && request.optional_attendees().contains(a))
            })
        })
        .map(|e| (e.when().start(), e.when().end()))
        .filter(|(start, end)| start < end)
        .collect();
    busy.sort();

    let mut merged: Vec<(u32, u32)> = Vec::new();
    for (start, end) in busy {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    let mut free = Vec::new();
    let mut cursor = 0;
    for (start, end) in merged {
        if cursor < start {
            free.push((cursor, start));
        }
        cursor = cursor.max(end);
    }
    if cursor < DAY_MINUTES {
        free.push((cursor, DAY_MINUTES));
    }

    free.into_iter()
        .filter(|(start, end)| end - start >= request.duration_minutes())
        .map(|(start, end)| TimeRange::new(start, end).unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Property 1: every range is in the day, non-empty and long enough
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn ranges_are_bounded_and_long_enough(events in arb_events(), request in arb_request()) {
        for slot in query(&events, &request) {
            prop_assert!(slot.start() < slot.end(), "empty range {:?}", slot);
            prop_assert!(slot.end() <= DAY_MINUTES);
            prop_assert!(
                slot.duration() >= request.duration_minutes(),
                "{:?} shorter than {} minutes",
                slot,
                request.duration_minutes()
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: ranges are sorted and pairwise disjoint
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn ranges_are_sorted_and_disjoint(events in arb_events(), request in arb_request()) {
        let slots = query(&events, &request);
        for pair in slots.windows(2) {
            prop_assert!(
                pair[0].end() < pair[1].start(),
                "ranges touch or overlap: {:?} {:?}",
                pair[0],
                pair[1]
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: a meeting longer than a day never fits
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn over_long_meetings_never_fit(
        events in arb_events(),
        mandatory in arb_people(),
        optional in arb_people(),
        duration in (DAY_MINUTES + 1)..=10_000u32,
    ) {
        let request = MeetingRequest::new(mandatory, duration).with_optional_attendees(optional);
        prop_assert!(query(&events, &request).is_empty());
    }
}

// ---------------------------------------------------------------------------
// Property 4: nobody invited → the whole day
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn no_attendees_frees_the_whole_day(events in arb_events(), duration in 0u32..=DAY_MINUTES) {
        let request = MeetingRequest::new(Vec::<String>::new(), duration);
        prop_assert_eq!(query(&events, &request), vec![TimeRange::WHOLE_DAY]);
    }
}

// ---------------------------------------------------------------------------
// Property 5: idempotence and independence from event order
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn query_is_deterministic(events in arb_events(), request in arb_request()) {
        let first = query(&events, &request);
        prop_assert_eq!(&first, &query(&events, &request));

        let mut reversed = events.clone();
        reversed.reverse();
        prop_assert_eq!(&first, &query(&reversed, &request));
    }
}

// ---------------------------------------------------------------------------
// Property 6: dropping optional attendees only widens free time
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn mandatory_only_pass_contains_inclusive_pass(events in arb_events(), request in arb_request()) {
        let inclusive = query_pass(&events, &request, Pass::Inclusive);
        let mandatory = query_pass(&events, &request, Pass::MandatoryOnly);
        for slot in &inclusive {
            prop_assert!(
                mandatory.iter().any(|m| m.contains(slot)),
                "{:?} from the inclusive pass is not inside any of {:?}",
                slot,
                mandatory
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 7: each pass finds exactly the complement of the merged busy time
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn pass_matches_merged_complement(
        events in arb_events(),
        mandatory in subsequence(PEOPLE.to_vec(), 1..=3),
        optional in arb_people(),
        duration in 0u32..=DAY_MINUTES,
    ) {
        let request = MeetingRequest::new(mandatory, duration).with_optional_attendees(optional);
        for pass in [Pass::Inclusive, Pass::MandatoryOnly] {
            prop_assert_eq!(
                query_pass(&events, &request, pass),
                free_by_merging(&events, &request, pass),
                "pass {:?}",
                pass
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 8: the fallback only happens when the inclusive pass is empty
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn query_prefers_the_inclusive_pass(events in arb_events(), request in arb_request()) {
        let inclusive = query_pass(&events, &request, Pass::Inclusive);
        let expected = if inclusive.is_empty() {
            query_pass(&events, &request, Pass::MandatoryOnly)
        } else {
            inclusive
        };
        prop_assert_eq!(query(&events, &request), expected);
    }
}
