//! Dashboard snapshot: today's symptoms, mood and medications plus logging
//! consistency over the recent window.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use healthvoice_core::NEUTRAL_MOOD;
use healthvoice_store::HealthLogRecord;

use crate::stats::utc_date;
use crate::tally::Tally;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HealthConsistency {
    /// Consecutive days with at least one log, counting back from today
    pub streak_days: u32,
    pub total_logs: usize,
    pub last_log_date: Option<NaiveDate>,
    pub unique_days_logged: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OverviewView {
    pub today_symptoms: Vec<String>,
    pub mental_state: String,
    pub medications_logged: Vec<String>,
    pub health_consistency: HealthConsistency,
    pub logs_today: usize,
    pub timestamp: DateTime<Utc>,
}

/// Build the overview from today's records and the recent consistency
/// window, both newest first.
pub fn build(today: &[HealthLogRecord], recent: &[HealthLogRecord], now: DateTime<Utc>) -> OverviewView {
    let mut symptoms = Tally::new();
    let mut moods = Tally::new();
    let mut medications = Tally::new();

    for record in today {
        let analysis = &record.analysis;
        symptoms.extend(&analysis.symptoms);
        if let Some(mood) = analysis.detected_mood() {
            moods.add(mood);
        }
        medications.extend(analysis.medications.iter().map(|m| &m.name));
    }

    OverviewView {
        today_symptoms: symptoms.labels().map(String::from).collect(),
        mental_state: moods.mode().unwrap_or(NEUTRAL_MOOD).to_string(),
        medications_logged: medications.labels().map(String::from).collect(),
        health_consistency: consistency(recent, utc_date(&now)),
        logs_today: today.len(),
        timestamp: now,
    }
}

/// Streak and counts over `recent` (newest first).
pub fn consistency(recent: &[HealthLogRecord], today: NaiveDate) -> HealthConsistency {
    let dates: HashSet<NaiveDate> = recent.iter().map(|r| utc_date(&r.timestamp)).collect();

    let mut streak_days = 0;
    let mut day = today;
    while dates.contains(&day) {
        streak_days += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }

    HealthConsistency {
        streak_days,
        total_logs: recent.len(),
        last_log_date: recent.first().map(|r| utc_date(&r.timestamp)),
        unique_days_logged: dates.len(),
    }
}
