//! # Entry Store
//!
//! Process-lifetime collection of journal entries shared by every request.
//!

use std::fmt::Debug;

use crate::error::JournalError;
use crate::model::JournalEntry;

pub mod in_memory;

pub use crate::store::in_memory::InMemoryEntryStore;

/// Append-only, ordered storage for entries.
///
/// Each `append` and each `list` takes effect atomically, a `list` never
/// observes a half-applied `append`.
pub trait EntryStore: Debug + Send + Sync {
    /// Add an entry to the end of the store, returning the new size
    fn append(&self, entry: JournalEntry) -> Result<usize, JournalError>;

    /// Snapshot of every entry in insertion order
    fn list(&self) -> Result<Vec<JournalEntry>, JournalError>;

    fn len(&self) -> Result<usize, JournalError>;

    fn is_empty(&self) -> Result<bool, JournalError> {
        Ok(self.len()? == 0)
    }
}
