pub mod entry;

pub use crate::model::entry::JournalEntry;
