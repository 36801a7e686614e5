use clap::{Parser, Subcommand};
use healthvoice_insights::ReportKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "healthvoice")]
#[command(version)]
#[command(about = "Voice-note health logging with doctor-ready summaries")]
pub struct Cli {
    /// Database file (defaults to <data dir>/healthvoice.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only read and write logs owned by this user
    #[arg(long, global = true)]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a note and store it (reads stdin when no text is given)
    Log { text: Vec<String> },

    /// Analyze a note without storing it
    Analyze { text: Vec<String> },

    /// Today's symptoms, mood, medications and logging streak
    Overview,

    /// Symptom, mood, medication and lifestyle insights
    Insights {
        #[arg(long)]
        days: Option<u32>,
    },

    /// Doctor-ready clinical summary
    Summary {
        #[arg(long)]
        days: Option<u32>,

        /// Print the full view as JSON instead of the summary text
        #[arg(long)]
        json: bool,
    },

    /// Trends with a per-day breakdown
    Trends {
        #[arg(long)]
        days: Option<u32>,
    },

    /// Write a plain-text health report
    Report {
        /// Period length (defaults by report kind)
        #[arg(long)]
        days: Option<u32>,

        /// summary, weekly, monthly or quarterly
        #[arg(long, default_value_t = ReportKind::Summary)]
        kind: ReportKind,

        /// Output file (defaults to the reports directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// List stored logs, newest first
    History {
        #[arg(long)]
        days: Option<u32>,

        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Export logs to a JSONL file
    Export { file: PathBuf },

    /// Import logs from a JSONL export
    Import { file: PathBuf },

    /// Print version information
    Version,
}
