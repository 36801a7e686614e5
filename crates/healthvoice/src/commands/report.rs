use chrono::{DateTime, Utc};
use healthvoice_insights::report::{file_name, render_text};
use healthvoice_insights::{HealthService, ReportKind};
use healthvoice_store::{atomic_write, LogStore};
use std::path::Path;

use super::Context;

pub fn run(ctx: &Context, days: Option<u32>, kind: ReportKind, out: Option<&Path>) -> anyhow::Result<()> {
    let service = ctx.service()?;
    let now = Utc::now();
    let days = days.unwrap_or_else(|| kind.default_days());
    let path = out
        .map(Path::to_path_buf)
        .unwrap_or_else(|| ctx.paths.reports_dir().join(file_name(now)));

    write_report(&service, days, kind, ctx.owner(), &path, now)?;
    println!("Report written to {}", path.display());
    Ok(())
}

fn write_report<S: LogStore>(
    service: &HealthService<S>,
    days: u32,
    kind: ReportKind,
    owner: Option<&str>,
    path: &Path,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    let summary = service.clinical_summary_at(days, owner, now)?;
    let report = render_text(&summary, days, kind, now);
    atomic_write(path, report.as_bytes())?;
    tracing::info!(path = %path.display(), kind = %kind, days, "wrote report");
    Ok(())
}
