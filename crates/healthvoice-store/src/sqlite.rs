use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use crate::error::StorageError;
use crate::record::{HealthLogRecord, NewHealthLog};
use crate::store::{LogQuery, LogStore};

const SELECT_COLUMNS: &str = "SELECT id, owner_id, timestamp, prompt, analysis, summary FROM health_logs";

type RawRow = (i64, Option<String>, String, String, String, String);

/// SQLite-backed log store
pub struct SqliteLogStore {
    conn: Mutex<Connection>,
}

impl SqliteLogStore {
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(db_path)?;
        Self::init_schema(&conn)?;
        tracing::debug!(path = %db_path.display(), "opened health log store");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init_schema(conn: &Connection) -> Result<(), StorageError> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS health_logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                owner_id TEXT,
                timestamp TEXT NOT NULL,
                prompt TEXT NOT NULL,
                analysis TEXT NOT NULL,
                summary TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_timestamp ON health_logs(timestamp DESC);
            CREATE INDEX IF NOT EXISTS idx_owner_timestamp ON health_logs(owner_id, timestamp DESC);
            ",
        )?;
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.conn.lock().map_err(|_| StorageError::LockPoisoned)
    }

    fn fetch(
        conn: &Connection,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<HealthLogRecord>, StorageError> {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(params, |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(Self::row_to_record(row?)?);
        }
        Ok(records)
    }

    fn row_to_record(row: RawRow) -> Result<HealthLogRecord, StorageError> {
        let (id, owner_id, timestamp, prompt, analysis, summary) = row;
        let id = id.to_string();
        let timestamp = timestamp
            .parse::<DateTime<Utc>>()
            .map_err(|e| StorageError::CorruptRecord {
                id: id.clone(),
                reason: format!("bad timestamp: {}", e),
            })?;
        let analysis = serde_json::from_str(&analysis).map_err(|e| StorageError::CorruptRecord {
            id: id.clone(),
            reason: format!("bad analysis JSON: {}", e),
        })?;
        Ok(HealthLogRecord {
            id,
            prompt,
            analysis,
            summary,
            timestamp,
            owner_id,
        })
    }
}

/// Fixed-width RFC 3339 so that text order equals time order.
fn encode_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn sql_limit(limit: Option<usize>) -> i64 {
    // SQLite treats a negative LIMIT as unbounded
    limit
        .map(|l| i64::try_from(l).unwrap_or(i64::MAX))
        .unwrap_or(-1)
}

impl LogStore for SqliteLogStore {
    fn insert(&self, log: NewHealthLog) -> Result<String, StorageError> {
        let timestamp = log.timestamp.unwrap_or_else(Utc::now);
        let analysis = serde_json::to_string(&log.analysis)?;

        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO health_logs (owner_id, timestamp, prompt, analysis, summary)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                log.owner_id,
                encode_timestamp(&timestamp),
                log.prompt,
                analysis,
                log.summary,
            ],
        )?;
        let id = conn.last_insert_rowid().to_string();
        tracing::info!(id = %id, owner = ?log.owner_id, "stored health log");
        Ok(id)
    }

    fn query(&self, query: &LogQuery) -> Result<Vec<HealthLogRecord>, StorageError> {
        let start = encode_timestamp(&query.start);
        let end = encode_timestamp(&query.end);
        let limit = sql_limit(query.limit);

        let conn = self.lock()?;
        let records = match &query.owner_id {
            Some(owner) => Self::fetch(
                &conn,
                &format!(
                    "{SELECT_COLUMNS}
                     WHERE timestamp >= ?1 AND timestamp <= ?2 AND owner_id = ?3
                     ORDER BY timestamp DESC, id DESC
                     LIMIT ?4"
                ),
                params![start, end, owner, limit],
            )?,
            None => Self::fetch(
                &conn,
                &format!(
                    "{SELECT_COLUMNS}
                     WHERE timestamp >= ?1 AND timestamp <= ?2
                     ORDER BY timestamp DESC, id DESC
                     LIMIT ?3"
                ),
                params![start, end, limit],
            )?,
        };
        tracing::debug!(count = records.len(), "queried health logs");
        Ok(records)
    }

    fn all(
        &self,
        owner_id: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<HealthLogRecord>, StorageError> {
        let limit = sql_limit(limit);
        let conn = self.lock()?;
        match owner_id {
            Some(owner) => Self::fetch(
                &conn,
                &format!(
                    "{SELECT_COLUMNS} WHERE owner_id = ?1 ORDER BY timestamp DESC, id DESC LIMIT ?2"
                ),
                params![owner, limit],
            ),
            None => Self::fetch(
                &conn,
                &format!("{SELECT_COLUMNS} ORDER BY timestamp DESC, id DESC LIMIT ?1"),
                params![limit],
            ),
        }
    }

    fn count(&self) -> Result<usize, StorageError> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM health_logs", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}
