//! Persisted health log records

use chrono::{DateTime, Utc};
use healthvoice_core::Analysis;
use serde::{Deserialize, Serialize};

/// A stored voice note with its analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthLogRecord {
    pub id: String,
    pub prompt: String,
    pub analysis: Analysis,
    pub summary: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub owner_id: Option<String>,
}

/// A record not yet inserted; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewHealthLog {
    pub prompt: String,
    pub analysis: Analysis,
    pub summary: String,
    /// Defaults to insertion time
    pub timestamp: Option<DateTime<Utc>>,
    pub owner_id: Option<String>,
}

impl NewHealthLog {
    pub fn into_record(self, id: String, inserted_at: DateTime<Utc>) -> HealthLogRecord {
        HealthLogRecord {
            id,
            prompt: self.prompt,
            analysis: self.analysis,
            summary: self.summary,
            timestamp: self.timestamp.unwrap_or(inserted_at),
            owner_id: self.owner_id,
        }
    }
}

impl From<HealthLogRecord> for NewHealthLog {
    fn from(record: HealthLogRecord) -> Self {
        Self {
            prompt: record.prompt,
            analysis: record.analysis,
            summary: record.summary,
            timestamp: Some(record.timestamp),
            owner_id: record.owner_id,
        }
    }
}
