//! Aggregated views over stored health logs, and the service that ties
//! extraction, storage and aggregation together.

pub mod clinical;
mod error;
pub mod insights;
pub mod overview;
pub mod report;
mod service;
mod stats;
mod tally;
pub mod trends;

pub use clinical::{SummaryView, NO_LOGS_SUMMARY};
pub use error::ServiceError;
pub use insights::InsightsView;
pub use overview::{HealthConsistency, OverviewView};
pub use report::ReportKind;
pub use service::{HealthService, LoggedNote};
pub use stats::{percentage, round1};
pub use tally::Tally;
pub use trends::{TrendsView, NO_DATA_MESSAGE};

#[cfg(test)]
pub(crate) mod testutil {
    use chrono::{DateTime, Utc};
    use healthvoice_core::{summarize, Extractor};
    use healthvoice_store::HealthLogRecord;

    pub fn record_at(text: &str, timestamp: DateTime<Utc>) -> HealthLogRecord {
        let analysis = Extractor::default().analyze_at(text, timestamp).unwrap();
        HealthLogRecord {
            id: timestamp.timestamp_nanos_opt().unwrap_or_default().to_string(),
            prompt: text.to_string(),
            summary: summarize(&analysis),
            analysis,
            timestamp,
            owner_id: None,
        }
    }
}
