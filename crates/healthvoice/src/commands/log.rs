use healthvoice_insights::HealthService;
use healthvoice_store::LogStore;

use super::{note_text, to_pretty_json, Context};

pub fn run(ctx: &Context, words: &[String]) -> anyhow::Result<()> {
    let text = note_text(words)?;
    let service = ctx.service()?;
    println!("{}", record(&service, &text, ctx.owner())?);
    Ok(())
}

fn record<S: LogStore>(
    service: &HealthService<S>,
    text: &str,
    owner: Option<&str>,
) -> anyhow::Result<String> {
    let note = service.record_note(text, owner)?;
    to_pretty_json(&note)
}
