use healthvoice_insights::HealthService;
use healthvoice_store::{HealthLogRecord, LogStore};

use super::Context;

pub fn run(ctx: &Context, days: Option<u32>, limit: usize) -> anyhow::Result<()> {
    let service = ctx.service()?;
    println!("{}", render(&service, days, ctx.owner(), limit)?);
    Ok(())
}

fn render<S: LogStore>(
    service: &HealthService<S>,
    days: Option<u32>,
    owner: Option<&str>,
    limit: usize,
) -> anyhow::Result<String> {
    let records = service.history(days, owner, Some(limit))?;
    if records.is_empty() {
        return Ok("No health logs".to_string());
    }

    let mut lines = vec![
        format!("Recent Logs (last {})", records.len()),
        "====================".to_string(),
    ];
    lines.extend(records.iter().map(format_record));
    Ok(lines.join("\n"))
}

fn format_record(record: &HealthLogRecord) -> String {
    format!(
        "  {} | #{} | {}",
        record.timestamp.format("%Y-%m-%d %H:%M"),
        record.id,
        record.summary
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use healthvoice_core::Config;
    use healthvoice_store::MemoryLogStore;

    #[test]
    fn test_history_empty() {
        let service = HealthService::new(MemoryLogStore::new(), Config::default());
        assert_eq!(render(&service, None, None, 20).unwrap(), "No health logs");
    }

    #[test]
    fn test_history_newest_first_with_limit() {
        let service = HealthService::new(MemoryLogStore::new(), Config::default());
        let now = Utc::now();
        service
            .record_note_at("cough", None, now - Duration::days(10))
            .unwrap();
        service
            .record_note_at("fever", None, now - Duration::hours(1))
            .unwrap();
        service.record_note_at("tired", None, now).unwrap();

        let out = render(&service, None, None, 2).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Recent Logs (last 2)");
        assert_eq!(lines.len(), 4);
        assert!(lines[2].contains("Presenting symptoms: Fatigue."));
        assert!(lines[3].contains("Presenting symptoms: Fever."));

        let recent = render(&service, Some(7), None, 20).unwrap();
        assert!(!recent.contains("Cough"));
    }
}
