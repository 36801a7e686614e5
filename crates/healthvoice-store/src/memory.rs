use chrono::Utc;
use std::sync::RwLock;

use crate::error::StorageError;
use crate::record::{HealthLogRecord, NewHealthLog};
use crate::store::{LogQuery, LogStore};

/// Process-local store, for embedding and tests
#[derive(Default)]
pub struct MemoryLogStore {
    records: RwLock<Vec<HealthLogRecord>>,
}

impl MemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn newest_first<'a>(
        records: impl Iterator<Item = &'a HealthLogRecord>,
        limit: Option<usize>,
    ) -> Vec<HealthLogRecord> {
        let mut matched: Vec<HealthLogRecord> = records.cloned().collect();
        // Later inserts win ties, matching the SQLite id ordering
        matched.reverse();
        matched.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        if let Some(limit) = limit {
            matched.truncate(limit);
        }
        matched
    }
}

impl LogStore for MemoryLogStore {
    fn insert(&self, log: NewHealthLog) -> Result<String, StorageError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StorageError::LockPoisoned)?;
        let id = (records.len() + 1).to_string();
        records.push(log.into_record(id.clone(), Utc::now()));
        Ok(id)
    }

    fn query(&self, query: &LogQuery) -> Result<Vec<HealthLogRecord>, StorageError> {
        let records = self.records.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(Self::newest_first(
            records.iter().filter(|r| query.matches(r)),
            query.limit,
        ))
    }

    fn all(
        &self,
        owner_id: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<HealthLogRecord>, StorageError> {
        let records = self.records.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(Self::newest_first(
            records
                .iter()
                .filter(|r| owner_id.is_none() || r.owner_id.as_deref() == owner_id),
            limit,
        ))
    }

    fn count(&self) -> Result<usize, StorageError> {
        let records = self.records.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(records.len())
    }
}
