//! JSONL export and import

use healthvoice_store::{export_jsonl, import_jsonl};
use std::path::Path;

use super::Context;

pub fn export(ctx: &Context, file: &Path) -> anyhow::Result<()> {
    let service = ctx.service()?;
    let count = export_jsonl(service.store(), ctx.owner(), file)?;
    println!("Exported {} logs to {}", count, file.display());
    Ok(())
}

pub fn import(ctx: &Context, file: &Path) -> anyhow::Result<()> {
    if !file.exists() {
        anyhow::bail!("{} does not exist", file.display());
    }
    let service = ctx.service()?;
    let count = import_jsonl(service.store(), file)?;
    println!("Imported {} logs from {}", count, file.display());
    Ok(())
}
