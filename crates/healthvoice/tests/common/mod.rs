#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use healthvoice_core::Config;
use healthvoice_insights::HealthService;
use healthvoice_store::{LogStore, MemoryLogStore, SqliteLogStore};
use std::path::Path;

/// Mid-afternoon, so a few hours either side stays on the same UTC day.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 15, 0, 0).unwrap()
}

pub fn memory_service() -> HealthService<MemoryLogStore> {
    HealthService::new(MemoryLogStore::new(), Config::default())
}

pub fn sqlite_service(dir: &Path) -> HealthService<SqliteLogStore> {
    let store = SqliteLogStore::new(&dir.join("healthvoice.db")).unwrap();
    HealthService::new(store, Config::default())
}

pub fn log_at<S: LogStore>(service: &HealthService<S>, text: &str, at: DateTime<Utc>) -> String {
    service.record_note_at(text, None, at).unwrap().log_id
}
