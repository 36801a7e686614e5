//! Persistence for health log records

mod error;
pub mod io;
mod memory;
mod paths;
mod record;
mod sqlite;
mod store;

pub use error::StorageError;
pub use io::{atomic_write, export_jsonl, import_jsonl, read_jsonl};
pub use memory::MemoryLogStore;
pub use paths::{Paths, HOME_ENV};
pub use record::{HealthLogRecord, NewHealthLog};
pub use sqlite::SqliteLogStore;
pub use store::{start_of_day, window_start, LogQuery, LogStore};
