//! JSON views and the clinical summary

use healthvoice_insights::HealthService;
use healthvoice_store::LogStore;

use super::{to_pretty_json, Context};

pub fn overview(ctx: &Context) -> anyhow::Result<()> {
    let view = ctx.service()?.overview(ctx.owner())?;
    println!("{}", to_pretty_json(&view)?);
    Ok(())
}

pub fn insights(ctx: &Context, days: Option<u32>) -> anyhow::Result<()> {
    let days = days.unwrap_or(ctx.config.insights_days);
    let view = ctx.service()?.insights(days, ctx.owner())?;
    println!("{}", to_pretty_json(&view)?);
    Ok(())
}

pub fn summary(ctx: &Context, days: Option<u32>, json: bool) -> anyhow::Result<()> {
    let days = days.unwrap_or(ctx.config.summary_days);
    let service = ctx.service()?;
    println!("{}", render_summary(&service, days, ctx.owner(), json)?);
    Ok(())
}

pub fn trends(ctx: &Context, days: Option<u32>) -> anyhow::Result<()> {
    let days = days.unwrap_or(ctx.config.trends_days);
    let view = ctx.service()?.trends(days, ctx.owner())?;
    println!("{}", to_pretty_json(&view)?);
    Ok(())
}

fn render_summary<S: LogStore>(
    service: &HealthService<S>,
    days: u32,
    owner: Option<&str>,
    json: bool,
) -> anyhow::Result<String> {
    let view = service.clinical_summary(days, owner)?;
    if json {
        to_pretty_json(&view)
    } else {
        Ok(view.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthvoice_core::Config;
    use healthvoice_insights::NO_LOGS_SUMMARY;
    use healthvoice_store::MemoryLogStore;

    #[test]
    fn test_summary_text_and_json() {
        let service = HealthService::new(MemoryLogStore::new(), Config::default());
        assert_eq!(render_summary(&service, 30, None, false).unwrap(), NO_LOGS_SUMMARY);

        service.record_note("fever and chills", None).unwrap();
        let text = render_summary(&service, 30, None, false).unwrap();
        assert!(text.starts_with("HEALTH SUMMARY - 30 DAY PERIOD"));
        assert!(text.contains("  - Fever: reported 1 time(s)"));

        let json: serde_json::Value =
            serde_json::from_str(&render_summary(&service, 30, None, true).unwrap()).unwrap();
        assert_eq!(json["total_logs"], 1);
        assert_eq!(json["period_days"], 30);
    }
}
