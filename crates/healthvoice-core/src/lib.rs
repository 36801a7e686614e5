//! Keyword extraction and per-note summaries for voice health logs

mod config;
mod error;
mod extractor;
pub mod lexicon;
mod summarizer;
mod types;

pub use config::Config;
pub use error::{ConfigError, ExtractError};
pub use extractor::Extractor;
pub use summarizer::{summarize, EMPTY_SUMMARY};
pub use types::{Analysis, LifestyleEntry, MedicationMention, MoodReading, NEUTRAL_MOOD};
