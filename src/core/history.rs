//! Transition history tracking.
//!
//! Every committed transition produces a [`TransitionRecord`]. The engine
//! keeps the most recent ones in a bounded [`StateHistory`] and hands the
//! same records to transition observers.

use super::state::{Event, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use gearshift::core::TransitionRecord;
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: "closed".to_string(),
///     to: "open".to_string(),
///     event: "open".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert!(!record.is_self_loop());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord<S, E> {
    /// The state the engine was in when the event was dispatched
    pub from: S,
    /// The state returned by the handler
    pub to: S,
    /// The dispatched event
    pub event: E,
    /// When the new state was committed
    pub timestamp: DateTime<Utc>,
}

impl<S: State, E: Event> TransitionRecord<S, E> {
    /// Create a record stamped with the current time.
    pub fn now(from: S, to: S, event: E) -> Self {
        Self {
            from,
            to,
            event,
            timestamp: Utc::now(),
        }
    }

    /// True when the handler returned the state it was invoked from.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered, bounded history of committed transitions.
///
/// Once `capacity` records are held, recording a new one drops the oldest.
/// A capacity of zero disables recording entirely.
///
/// # Example
///
/// ```rust
/// use gearshift::core::{StateHistory, TransitionRecord};
///
/// let mut history = StateHistory::with_capacity(2);
/// history.record(TransitionRecord::now("a", "b", "next"));
/// history.record(TransitionRecord::now("b", "c", "next"));
/// history.record(TransitionRecord::now("c", "a", "next"));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.get_path(), vec![&"b", &"c", &"a"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory<S, E> {
    capacity: usize,
    records: VecDeque<TransitionRecord<S, E>>,
}

impl<S: State, E: Event> StateHistory<S, E> {
    /// Create an empty history holding at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            records: VecDeque::with_capacity(capacity.min(1024)),
        }
    }

    /// Append a record, evicting the oldest one when full.
    pub fn record(&mut self, record: TransitionRecord<S, E>) {
        if self.capacity == 0 {
            return;
        }
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// Maximum number of records kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TransitionRecord<S, E>> {
        self.records.iter()
    }

    /// Most recently committed transition.
    pub fn last(&self) -> Option<&TransitionRecord<S, E>> {
        self.records.back()
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained record followed by
    /// the `to` state of every record.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(&first.from);
        }
        path.extend(self.records.iter().map(|r| &r.to));
        path
    }

    /// Time between the oldest and newest retained records.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.front()?, self.records.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(from: &'static str, to: &'static str) -> TransitionRecord<&'static str, &'static str> {
        TransitionRecord::now(from, to, "next")
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<String, String> = StateHistory::with_capacity(8);
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_keeps_order() {
        let mut history = StateHistory::with_capacity(8);
        history.record(record("1", "2"));
        history.record(record("2", "3"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.get_path(), vec![&"1", &"2", &"3"]);
        assert_eq!(history.last().map(|r| r.to), Some("3"));
    }

    #[test]
    fn record_evicts_oldest_when_full() {
        let mut history = StateHistory::with_capacity(2);
        history.record(record("1", "2"));
        history.record(record("2", "3"));
        history.record(record("3", "4"));

        assert_eq!(history.len(), 2);
        let froms: Vec<_> = history.iter().map(|r| r.from).collect();
        assert_eq!(froms, vec!["2", "3"]);
    }

    #[test]
    fn zero_capacity_records_nothing() {
        let mut history = StateHistory::with_capacity(0);
        history.record(record("1", "2"));
        assert!(history.is_empty());
        assert_eq!(history.capacity(), 0);
    }

    #[test]
    fn self_loop_is_detected() {
        assert!(record("on", "on").is_self_loop());
        assert!(!record("on", "off").is_self_loop());
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let mut history = StateHistory::with_capacity(4);
        history.record(TransitionRecord {
            from: "a".to_string(),
            to: "b".to_string(),
            event: "go".to_string(),
            timestamp: start,
        });
        history.record(TransitionRecord {
            from: "b".to_string(),
            to: "c".to_string(),
            event: "go".to_string(),
            timestamp: start + chrono::Duration::seconds(3),
        });

        assert_eq!(history.duration(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn history_serializes_with_string_tokens() {
        let mut history = StateHistory::with_capacity(4);
        history.record(TransitionRecord::now(
            "closed".to_string(),
            "open".to_string(),
            "open".to_string(),
        ));

        let json = serde_json::to_string(&history).unwrap();
        let restored: StateHistory<String, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.last(), history.last());
    }
}
