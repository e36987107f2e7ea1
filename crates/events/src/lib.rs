//! Ledger events and the in-memory journal they are recorded in.

pub mod event;
pub mod journal;

pub use event::Event;
pub use journal::{Journal, JournalEntry};
