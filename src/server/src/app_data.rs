use std::sync::Arc;

use libjournal::store::{EntryStore, InMemoryEntryStore};

#[derive(Debug, Clone)]
pub struct JournalAppData {
    pub store: Arc<dyn EntryStore>,
}

impl JournalAppData {
    pub fn new(store: Arc<dyn EntryStore>) -> JournalAppData {
        JournalAppData { store }
    }

    pub fn in_memory() -> JournalAppData {
        JournalAppData::new(Arc::new(InMemoryEntryStore::new()))
    }
}
