//! 🍂 libjournal
//!
//! Journal entries kept in memory and shared across requests.
//!
//! # Examples
//!
//! Appending to and listing a store:
//!
//! ```
//! use libjournal::model::JournalEntry;
//! use libjournal::store::{EntryStore, InMemoryEntryStore};
//!
//! let store = InMemoryEntryStore::new();
//! store.append(JournalEntry::new().with_mood("calm"))?;
//! let entries = store.list()?;
//! assert_eq!(entries.len(), 1);
//! # Ok::<(), libjournal::error::JournalError>(())
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod store;
pub mod view;
