use super::DataStore;
use crate::error::{BoardError, Result};
use crate::model::{Record, Scope};
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: HashMap<(Scope, Uuid), Record>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn save_record(&mut self, record: &Record, scope: Scope) -> Result<()> {
        self.records.insert((scope, record.id), record.clone());
        Ok(())
    }

    fn get_record(&self, id: &Uuid, scope: Scope) -> Result<Record> {
        self.records
            .get(&(scope, *id))
            .cloned()
            .ok_or(BoardError::RecordNotFound(*id))
    }

    fn list_records(&self, scope: Scope) -> Result<Vec<Record>> {
        Ok(self
            .records
            .iter()
            .filter(|((s, _), _)| *s == scope)
            .map(|(_, r)| r.clone())
            .collect())
    }

    fn delete_record(&mut self, id: &Uuid, scope: Scope) -> Result<()> {
        if self.records.remove(&(scope, *id)).is_none() {
            return Err(BoardError::RecordNotFound(*id));
        }
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::RecordKind;
    use crate::rank::{key_after, OrderKey};

    /// Builds a store with a known board layout.
    ///
    /// Ranks are handed out with `key_after`, the same way `import` does, so
    /// each builder call appends to the end of its group.
    pub struct StoreFixture {
        pub store: InMemoryStore,
        pub scope: Scope,
        last_rank: HashMap<Option<Uuid>, OrderKey>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                scope: Scope::Project,
                last_rank: HashMap::new(),
            }
        }

        fn append(&mut self, kind: RecordKind, parent_id: Option<Uuid>, title: &str) -> Uuid {
            let prev = self.last_rank.get(&parent_id).map(|k| k.to_string());
            let rank = key_after(prev.as_deref()).unwrap();
            let record = Record::new(kind, parent_id, title.to_string(), rank.clone());
            self.store.save_record(&record, self.scope).unwrap();
            self.last_rank.insert(parent_id, rank);
            record.id
        }

        /// Adds a board with the given lists, each holding `cards_per_list` cards.
        pub fn with_board(self, title: &str, lists: &[&str], cards_per_list: usize) -> Self {
            let sized: Vec<_> = lists.iter().map(|l| (*l, cards_per_list)).collect();
            self.with_board_sized(title, &sized)
        }

        /// Adds a board whose lists each hold their own number of cards.
        pub fn with_board_sized(mut self, title: &str, lists: &[(&str, usize)]) -> Self {
            let board_id = self.append(RecordKind::Board, None, title);
            for &(list, cards) in lists {
                let list_id = self.append(RecordKind::List, Some(board_id), list);
                for i in 0..cards {
                    self.append(
                        RecordKind::Card,
                        Some(list_id),
                        &format!("{} card {}", list, i + 1),
                    );
                }
            }
            self
        }

        /// Saves a record as-is, bypassing rank generation.
        pub fn with_record(mut self, record: Record) -> Self {
            self.store.save_record(&record, self.scope).unwrap();
            self
        }
    }
}
