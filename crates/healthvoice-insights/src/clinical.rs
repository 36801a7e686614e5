//! Doctor-ready plain-text summary of a window of logs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use healthvoice_core::lexicon::{EXERCISE, STRESS};
use healthvoice_store::HealthLogRecord;

use crate::stats::{average, per_day};
use crate::tally::Tally;

pub const NO_LOGS_SUMMARY: &str = "No health logs available for the specified period.";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub summary: String,
    pub period_days: u32,
    pub total_logs: usize,
    pub generated_at: DateTime<Utc>,
}

pub fn build(records: &[HealthLogRecord], days: u32, now: DateTime<Utc>) -> SummaryView {
    let summary = if records.is_empty() {
        NO_LOGS_SUMMARY.to_string()
    } else {
        render(records, days, now)
    };
    SummaryView {
        summary,
        period_days: days,
        total_logs: records.len(),
        generated_at: now,
    }
}

fn render(records: &[HealthLogRecord], days: u32, now: DateTime<Utc>) -> String {
    let mut symptoms = Tally::new();
    let mut moods = Tally::new();
    let mut medications = Tally::new();
    let mut sleep_hours = Vec::new();
    let mut exercise = 0;
    let mut stress = 0;

    for record in records {
        let analysis = &record.analysis;
        symptoms.extend(&analysis.symptoms);
        if let Some(mood) = analysis.detected_mood() {
            moods.add(mood);
        }
        medications.extend(analysis.medications.iter().map(|m| &m.name));
        if let Some(hours) = analysis.sleep_hours() {
            sleep_hours.push(hours);
        }
        if analysis.mentions_lifestyle(EXERCISE) {
            exercise += 1;
        }
        if analysis.mentions_lifestyle(STRESS) {
            stress += 1;
        }
    }

    let mut lines = vec![
        format!("HEALTH SUMMARY - {} DAY PERIOD", days),
        format!("Generated: {}", now.format("%Y-%m-%d %H:%M:%S UTC")),
        String::new(),
    ];

    push_section(&mut lines, "SYMPTOMS:", &symptoms, "reported");
    push_section(&mut lines, "MENTAL/EMOTIONAL STATE:", &moods, "noted");
    push_section(&mut lines, "MEDICATIONS MENTIONED:", &medications, "mentioned");

    lines.push("LIFESTYLE FACTORS:".to_string());
    if let Some(avg) = average(&sleep_hours) {
        lines.push(format!(
            "  - Average sleep: {:.1} hours (from {} mentions)",
            avg,
            sleep_hours.len()
        ));
    }
    if exercise > 0 {
        lines.push(format!("  - Exercise mentioned: {} time(s)", exercise));
    }
    if stress > 0 {
        lines.push(format!("  - Stress mentioned: {} time(s)", stress));
    }
    lines.push(String::new());

    lines.push("SUMMARY STATISTICS:".to_string());
    lines.push(format!("  - Total health logs: {}", records.len()));
    lines.push(format!("  - Period: {} days", days));
    lines.push(format!(
        "  - Average logs per day: {:.1}",
        per_day(records.len(), days)
    ));

    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, heading: &str, tally: &Tally, verb: &str) {
    if tally.is_empty() {
        return;
    }
    lines.push(heading.to_string());
    for (label, n) in tally.ranked() {
        lines.push(format!("  - {}: {} {} time(s)", label, verb, n));
    }
    lines.push(String::new());
}
