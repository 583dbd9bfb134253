//! Property-based tests for dispatch semantics.
//!
//! These tests use proptest to check the engine against a plain map model
//! across many randomly generated transition tables.

use gearshift::Engine;
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const STATES: [&str; 4] = ["idle", "low", "high", "fault"];
const EVENTS: [&str; 3] = ["up", "down", "reset"];

/// (state index, event index) -> destination state index
type Table = BTreeMap<(usize, usize), usize>;

prop_compose! {
    fn arbitrary_table()(
        table in prop::collection::btree_map((0..STATES.len(), 0..EVENTS.len()), 0..STATES.len(), 0..12)
    ) -> Table {
        table
    }
}

fn build(initial: usize, entries: &[((usize, usize), usize)]) -> Engine<&'static str, &'static str> {
    let engine = Engine::new(STATES[initial]);
    for &((state, event), destination) in entries {
        let target = STATES[destination];
        engine.register_handler(STATES[state], EVENTS[event], move || target);
    }
    engine
}

proptest! {
    #[test]
    fn current_state_follows_last_matched_handler(
        table in arbitrary_table(),
        initial in 0..STATES.len(),
        events in prop::collection::vec(0..EVENTS.len(), 0..30)
    ) {
        let entries: Vec<_> = table.clone().into_iter().collect();
        let engine = build(initial, &entries);
        let mut expected = initial;

        for event in events {
            if let Some(&destination) = table.get(&(expected, event)) {
                expected = destination;
            }
            let returned = engine.dispatch(EVENTS[event]).unwrap();
            prop_assert_eq!(returned, STATES[expected]);
            prop_assert_eq!(engine.current_state(), STATES[expected]);
        }
    }

    #[test]
    fn unregistered_pairs_are_noops(
        table in arbitrary_table(),
        state in 0..STATES.len(),
        event in 0..EVENTS.len()
    ) {
        prop_assume!(!table.contains_key(&(state, event)));

        let calls = Arc::new(AtomicUsize::new(0));
        let engine = Engine::new(STATES[state]);
        for (&(s, e), &d) in &table {
            let counter = Arc::clone(&calls);
            let target = STATES[d];
            engine.register_handler(STATES[s], EVENTS[e], move || {
                counter.fetch_add(1, Ordering::SeqCst);
                target
            });
        }

        prop_assert_eq!(engine.dispatch(EVENTS[event]).unwrap(), STATES[state]);
        prop_assert_eq!(calls.load(Ordering::SeqCst), 0);
        prop_assert!(engine.history().is_empty());
    }

    #[test]
    fn later_registration_replaces_earlier(
        state in 0..STATES.len(),
        event in 0..EVENTS.len(),
        first in 0..STATES.len(),
        second in 0..STATES.len()
    ) {
        let first_calls = Arc::new(AtomicUsize::new(0));
        let second_calls = Arc::new(AtomicUsize::new(0));
        let engine = Engine::new(STATES[state]);

        let counter = Arc::clone(&first_calls);
        let target = STATES[first];
        let replaced = engine.insert_handler(STATES[state], EVENTS[event], move || {
            counter.fetch_add(1, Ordering::SeqCst);
            target
        });
        prop_assert!(replaced.is_none());

        let counter = Arc::clone(&second_calls);
        let target = STATES[second];
        let replaced = engine.insert_handler(STATES[state], EVENTS[event], move || {
            counter.fetch_add(1, Ordering::SeqCst);
            target
        });
        prop_assert!(replaced.is_some());

        prop_assert_eq!(engine.dispatch(EVENTS[event]).unwrap(), STATES[second]);
        prop_assert_eq!(first_calls.load(Ordering::SeqCst), 0);
        prop_assert_eq!(second_calls.load(Ordering::SeqCst), 1);
        prop_assert_eq!(engine.handler_count(), 1);
    }

    #[test]
    fn registration_order_does_not_matter(
        (ordered, shuffled) in arbitrary_table().prop_flat_map(|table| {
            let entries: Vec<_> = table.into_iter().collect();
            (Just(entries.clone()), Just(entries).prop_shuffle())
        })
    ) {
        for initial in 0..STATES.len() {
            for event in EVENTS {
                let chained = build(initial, &ordered);
                let reordered = build(initial, &shuffled);

                prop_assert_eq!(chained.handler_count(), reordered.handler_count());
                prop_assert_eq!(chained.can(&event), reordered.can(&event));
                prop_assert_eq!(chained.dispatch(event), reordered.dispatch(event));
            }
        }
    }

    #[test]
    fn history_never_exceeds_capacity(
        capacity in 0usize..6,
        presses in 0usize..20
    ) {
        let config = gearshift::config::ConfigBuilder::new()
            .history_capacity(capacity)
            .build()
            .unwrap();
        let engine = Engine::with_config("off", config);
        engine
            .register_handler("off", "press", || "on")
            .register_handler("on", "press", || "off");

        for _ in 0..presses {
            engine.dispatch("press").unwrap();
        }

        let history = engine.history();
        prop_assert_eq!(history.len(), presses.min(capacity));
        if let Some(last) = history.last() {
            prop_assert_eq!(last.to, engine.current_state());
        }
    }
}
