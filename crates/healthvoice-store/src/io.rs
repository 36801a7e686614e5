//! JSONL export/import and atomic file writes

use std::io::Write;
use std::path::Path;

use crate::error::StorageError;
use crate::record::HealthLogRecord;
use crate::store::LogStore;

/// Write data atomically using temp file + rename
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data)?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}

/// Write every record for `owner_id` to `path`, one JSON object per line.
/// Returns the number of records written.
pub fn export_jsonl(
    store: &dyn LogStore,
    owner_id: Option<&str>,
    path: &Path,
) -> Result<usize, StorageError> {
    let records = store.all(owner_id, None)?;
    let mut buf = Vec::new();
    for record in &records {
        serde_json::to_writer(&mut buf, record)?;
        writeln!(buf)?;
    }
    atomic_write(path, &buf)?;
    tracing::info!(count = records.len(), path = %path.display(), "exported health logs");
    Ok(records.len())
}

/// Read records from a JSONL file, skipping malformed lines.
pub fn read_jsonl(path: &Path) -> Result<Vec<HealthLogRecord>, StorageError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let contents = std::fs::read_to_string(path)?;
    let mut records = Vec::new();
    for (lineno, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str(line) {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!(line = lineno + 1, error = %e, "skipping malformed record"),
        }
    }
    Ok(records)
}

/// Insert every record from a JSONL export. Ids are reassigned by the store;
/// timestamps and owners are kept.
pub fn import_jsonl(store: &dyn LogStore, path: &Path) -> Result<usize, StorageError> {
    let records = read_jsonl(path)?;
    let count = records.len();
    // Oldest first so that ids follow time order
    for record in records.into_iter().rev() {
        store.insert(record.into())?;
    }
    tracing::info!(count, path = %path.display(), "imported health logs");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryLogStore, NewHealthLog, SqliteLogStore};
    use chrono::{Duration, TimeZone, Utc};
    use healthvoice_core::{summarize, Extractor};

    fn seed(store: &dyn LogStore) {
        let base = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        for (i, text) in ["fever and chills", "took Advil", "slept 7 hours"]
            .iter()
            .enumerate()
        {
            let ts = base - Duration::days(i as i64);
            let analysis = Extractor::default().analyze_at(text, ts).unwrap();
            store
                .insert(NewHealthLog {
                    prompt: text.to_string(),
                    summary: summarize(&analysis),
                    analysis,
                    timestamp: Some(ts),
                    owner_id: Some("alice".to_string()),
                })
                .unwrap();
        }
    }

    #[test]
    fn test_export_import_preserves_records() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("export.jsonl");

        let source = MemoryLogStore::new();
        seed(&source);
        assert_eq!(export_jsonl(&source, Some("alice"), &path).unwrap(), 3);

        let target = SqliteLogStore::in_memory().unwrap();
        assert_eq!(import_jsonl(&target, &path).unwrap(), 3);

        let before = source.all(None, None).unwrap();
        let after = target.all(None, None).unwrap();
        let strip = |r: &HealthLogRecord| (r.prompt.clone(), r.timestamp, r.owner_id.clone(), r.analysis.clone());
        assert_eq!(
            before.iter().map(strip).collect::<Vec<_>>(),
            after.iter().map(strip).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_read_jsonl_skips_malformed_lines() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("mixed.jsonl");

        let source = MemoryLogStore::new();
        seed(&source);
        export_jsonl(&source, None, &path).unwrap();
        let mut contents = std::fs::read_to_string(&path).unwrap();
        contents.push_str("{not valid json}\n\n");
        std::fs::write(&path, contents).unwrap();

        assert_eq!(read_jsonl(&path).unwrap().len(), 3);
    }

    #[test]
    fn test_read_jsonl_missing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        assert!(read_jsonl(&temp.path().join("nope.jsonl")).unwrap().is_empty());
    }

    #[test]
    fn test_atomic_write() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("nested").join("report.txt");
        atomic_write(&path, b"hello").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
        assert!(!path.with_extension("tmp").exists());
    }
}
