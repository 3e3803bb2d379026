use crate::errors::AppResult;
use crate::models::{EventRecord, Table};
use crate::store::RecordStore;

/// In-memory table plus the store it mirrors.
///
/// Owned by the command being executed; persisted state and memory only
/// diverge when a save fails, in which case memory keeps the old table.
pub struct EventRepository {
    store: RecordStore,
    table: Table,
}

impl EventRepository {
    pub fn open(store: RecordStore) -> AppResult<Self> {
        let table = store.load()?;
        Ok(Self { store, table })
    }

    pub fn current(&self) -> &Table {
        &self.table
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn reload(&mut self) -> AppResult<&Table> {
        self.table = self.store.load()?;
        Ok(&self.table)
    }

    /// Append `record` as the last row and persist the whole table.
    pub fn append(&mut self, record: EventRecord) -> AppResult<&Table> {
        let next = self.table.appended(record);
        self.store.save(&next)?;
        self.table = next;
        Ok(&self.table)
    }
}
