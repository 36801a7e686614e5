//! Storage interface shared by every backend

use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::error::StorageError;
use crate::record::{HealthLogRecord, NewHealthLog};

/// Time window and owner filter for a record query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    /// Inclusive lower bound
    pub start: DateTime<Utc>,
    /// Inclusive upper bound
    pub end: DateTime<Utc>,
    /// `None` = every owner
    pub owner_id: Option<String>,
    pub limit: Option<usize>,
}

impl LogQuery {
    pub fn window(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            owner_id: None,
            limit: None,
        }
    }

    /// The `days` days leading up to `now`.
    pub fn last_days(days: u32, now: DateTime<Utc>) -> Self {
        Self::window(window_start(days, now), now)
    }

    /// UTC midnight up to `now`.
    pub fn today(now: DateTime<Utc>) -> Self {
        Self::window(start_of_day(now), now)
    }

    pub fn owner(mut self, owner_id: Option<&str>) -> Self {
        self.owner_id = owner_id.map(String::from);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, record: &HealthLogRecord) -> bool {
        if record.timestamp < self.start || record.timestamp > self.end {
            return false;
        }
        match &self.owner_id {
            Some(owner) => record.owner_id.as_deref() == Some(owner.as_str()),
            None => true,
        }
    }
}

/// `now` minus `days` days, saturating at the earliest representable instant.
pub fn window_start(days: u32, now: DateTime<Utc>) -> DateTime<Utc> {
    Duration::try_days(i64::from(days))
        .and_then(|span| now.checked_sub_signed(span))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

pub fn start_of_day(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// A persistent collection of health logs.
///
/// Implementations must not lose concurrent inserts, and an insert must be
/// visible to any query issued after it returns.
pub trait LogStore: Send + Sync {
    /// Persist one record and return its assigned id.
    fn insert(&self, log: NewHealthLog) -> Result<String, StorageError>;

    /// Records matching `query`, newest first.
    fn query(&self, query: &LogQuery) -> Result<Vec<HealthLogRecord>, StorageError>;

    /// Every record for `owner_id` regardless of time, newest first.
    fn all(
        &self,
        owner_id: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<HealthLogRecord>, StorageError>;

    fn count(&self) -> Result<usize, StorageError>;

    fn query_today(
        &self,
        owner_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Vec<HealthLogRecord>, StorageError> {
        self.query(&LogQuery::today(now).owner(owner_id))
    }
}
