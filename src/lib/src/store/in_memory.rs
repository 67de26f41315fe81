use parking_lot::Mutex;

use crate::error::JournalError;
use crate::model::JournalEntry;
use crate::store::EntryStore;

#[derive(Debug, Default)]
pub struct InMemoryEntryStore {
    entries: Mutex<Vec<JournalEntry>>,
}

impl InMemoryEntryStore {
    pub fn new() -> InMemoryEntryStore {
        InMemoryEntryStore::default()
    }
}

impl EntryStore for InMemoryEntryStore {
    fn append(&self, entry: JournalEntry) -> Result<usize, JournalError> {
        let mut entries = self.entries.lock();
        entries.push(entry);
        Ok(entries.len())
    }

    fn list(&self) -> Result<Vec<JournalEntry>, JournalError> {
        Ok(self.entries.lock().clone())
    }

    fn len(&self) -> Result<usize, JournalError> {
        Ok(self.entries.lock().len())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::error::JournalError;
    use crate::model::JournalEntry;
    use crate::store::{EntryStore, InMemoryEntryStore};

    #[test]
    fn test_store_starts_empty() -> Result<(), JournalError> {
        let store = InMemoryEntryStore::new();
        assert!(store.is_empty()?);
        assert_eq!(store.list()?.len(), 0);
        Ok(())
    }

    #[test]
    fn test_store_append_returns_new_size() -> Result<(), JournalError> {
        let store = InMemoryEntryStore::new();
        assert_eq!(store.append(JournalEntry::new())?, 1);
        assert_eq!(store.append(JournalEntry::new())?, 2);
        assert_eq!(store.len()?, 2);
        Ok(())
    }

    #[test]
    fn test_store_list_preserves_insertion_order() -> Result<(), JournalError> {
        let store = InMemoryEntryStore::new();
        for i in 0..10 {
            store.append(JournalEntry::new().with_text(format!("entry {}", i)))?;
        }

        let entries = store.list()?;
        assert_eq!(entries.len(), 10);
        for (i, entry) in entries.iter().enumerate() {
            assert_eq!(entry.text, Some(format!("entry {}", i)));
        }
        Ok(())
    }

    #[test]
    fn test_store_allows_duplicate_entries() -> Result<(), JournalError> {
        let store = InMemoryEntryStore::new();
        let entry = JournalEntry::new().with_mood("meh");
        store.append(entry.clone())?;
        store.append(entry.clone())?;
        assert_eq!(store.list()?, vec![entry.clone(), entry]);
        Ok(())
    }

    #[test]
    fn test_store_list_is_a_snapshot() -> Result<(), JournalError> {
        let store = InMemoryEntryStore::new();
        store.append(JournalEntry::new().with_text("first"))?;

        let snapshot = store.list()?;
        store.append(JournalEntry::new().with_text("second"))?;

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len()?, 2);
        Ok(())
    }

    #[test]
    fn test_store_list_does_not_mutate() -> Result<(), JournalError> {
        let store = InMemoryEntryStore::new();
        store.append(JournalEntry::new().with_date("2024-01-01"))?;
        let before = store.list()?;
        for _ in 0..5 {
            store.list()?;
        }
        assert_eq!(store.list()?, before);
        Ok(())
    }

    #[test]
    fn test_store_concurrent_appends_are_not_lost() -> Result<(), JournalError> {
        let store = InMemoryEntryStore::new();
        let num_threads = 8;
        let per_thread = 250;

        std::thread::scope(|s| {
            for t in 0..num_threads {
                let store = &store;
                s.spawn(move || {
                    for i in 0..per_thread {
                        let text = format!("{}-{}", t, i);
                        store.append(JournalEntry::new().with_text(text)).unwrap();
                    }
                });
            }
        });

        let entries = store.list()?;
        assert_eq!(entries.len(), num_threads * per_thread);

        let unique: HashSet<_> = entries.iter().filter_map(|e| e.text.clone()).collect();
        assert_eq!(unique.len(), num_threads * per_thread);

        // Appends from a single thread keep their relative order
        for t in 0..num_threads {
            let prefix = format!("{}-", t);
            let seq: Vec<usize> = entries
                .iter()
                .filter_map(|e| e.text.as_deref())
                .filter_map(|text| text.strip_prefix(&prefix))
                .map(|i| i.parse().unwrap())
                .collect();
            assert_eq!(seq, (0..per_thread).collect::<Vec<_>>());
        }
        Ok(())
    }

    #[test]
    fn test_store_list_never_sees_torn_state() -> Result<(), JournalError> {
        let store = InMemoryEntryStore::new();
        let total = 2000;

        std::thread::scope(|s| {
            let writer = &store;
            s.spawn(move || {
                for i in 0..total {
                    writer.append(JournalEntry::new().with_text(i.to_string())).unwrap();
                }
            });

            let reader = &store;
            s.spawn(move || {
                let mut last_len = 0;
                while last_len < total {
                    let entries = reader.list().unwrap();
                    assert!(entries.len() >= last_len);
                    for (i, entry) in entries.iter().enumerate() {
                        assert_eq!(entry.text, Some(i.to_string()));
                    }
                    last_len = entries.len();
                }
            });
        });

        assert_eq!(store.len()?, total);
        Ok(())
    }
}
