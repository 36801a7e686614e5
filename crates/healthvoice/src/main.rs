mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use commands::Context;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the JSON views
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Commands::Version = cli.command {
        return commands::version::run();
    }

    let ctx = Context::from_cli(cli.db, cli.user)?;
    match cli.command {
        Commands::Log { text } => commands::log::run(&ctx, &text),
        Commands::Analyze { text } => commands::analyze::run(&ctx, &text),
        Commands::Overview => commands::views::overview(&ctx),
        Commands::Insights { days } => commands::views::insights(&ctx, days),
        Commands::Summary { days, json } => commands::views::summary(&ctx, days, json),
        Commands::Trends { days } => commands::views::trends(&ctx, days),
        Commands::Report { days, kind, out } => {
            commands::report::run(&ctx, days, kind, out.as_deref())
        }
        Commands::History { days, limit } => commands::history::run(&ctx, days, limit),
        Commands::Export { file } => commands::transfer::export(&ctx, &file),
        Commands::Import { file } => commands::transfer::import(&ctx, &file),
        Commands::Version => commands::version::run(),
    }
}
