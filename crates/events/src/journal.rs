//! Append-only, in-memory event journal.

use serde::{Deserialize, Serialize};

use crate::event::Event;

/// A journaled event plus its position in the journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry<E> {
    /// 1-based, strictly increasing position.
    sequence: u64,
    payload: E,
}

impl<E> JournalEntry<E> {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }
}

/// Append-only journal of events for a single session.
///
/// Nothing is ever removed or rewritten; it lives as long as its owner.
#[derive(Debug, Clone)]
pub struct Journal<E> {
    entries: Vec<JournalEntry<E>>,
}

impl<E> Default for Journal<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E: Event> Journal<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event, returning the sequence number assigned to it.
    pub fn append(&mut self, event: E) -> u64 {
        let sequence = self.entries.last().map(|e| e.sequence).unwrap_or(0) + 1;
        tracing::trace!(
            sequence,
            event_type = event.event_type(),
            event_version = event.version(),
            "journal append"
        );
        self.entries.push(JournalEntry {
            sequence,
            payload: event,
        });
        sequence
    }

    pub fn entries(&self) -> &[JournalEntry<E>] {
        &self.entries
    }

    pub fn last(&self) -> Option<&JournalEntry<E>> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over event payloads in append order.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entries.iter().map(JournalEntry::payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    #[derive(Debug, Clone, PartialEq)]
    struct Ping {
        at: DateTime<Utc>,
        n: u32,
    }

    impl Event for Ping {
        fn event_type(&self) -> &'static str {
            "test.ping"
        }

        fn version(&self) -> u32 {
            1
        }

        fn occurred_at(&self) -> DateTime<Utc> {
            self.at
        }
    }

    fn ping(n: u32) -> Ping {
        Ping { at: Utc::now(), n }
    }

    #[test]
    fn empty_journal_has_no_entries() {
        let journal: Journal<Ping> = Journal::new();
        assert!(journal.is_empty());
        assert_eq!(journal.len(), 0);
        assert!(journal.last().is_none());
    }

    #[test]
    fn append_assigns_increasing_sequence_numbers() {
        let mut journal = Journal::new();
        assert_eq!(journal.append(ping(1)), 1);
        assert_eq!(journal.append(ping(2)), 2);
        assert_eq!(journal.append(ping(3)), 3);

        let sequences: Vec<u64> = journal.entries().iter().map(|e| e.sequence()).collect();
        assert_eq!(sequences, vec![1, 2, 3]);
    }

    #[test]
    fn iter_yields_payloads_in_append_order() {
        let mut journal = Journal::new();
        journal.append(ping(10));
        journal.append(ping(20));

        let ns: Vec<u32> = journal.iter().map(|p| p.n).collect();
        assert_eq!(ns, vec![10, 20]);
        assert_eq!(journal.last().map(|e| e.payload().n), Some(20));
    }
}
