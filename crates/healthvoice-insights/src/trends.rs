//! Symptom, mood and medication trends with a per-day breakdown

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use healthvoice_store::HealthLogRecord;

use crate::stats::{percentage, round1, utc_date};
use crate::tally::Tally;

pub const NO_DATA_MESSAGE: &str = "No data available for trend analysis";

/// Trend direction; only "stable" is produced today.
pub const STABLE: &str = "stable";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SymptomTrend {
    pub symptom: String,
    pub total_occurrences: usize,
    pub frequency_percentage: f64,
    pub trend: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MoodTrend {
    pub mood: String,
    pub occurrences: usize,
    pub percentage: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MedicationTrend {
    pub name: String,
    pub mentions: usize,
    /// Mentions per day of the period, as a percentage
    pub adherence_score: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MedicationAdherence {
    pub total_mentions: usize,
    pub unique_medications: usize,
    pub medications: Vec<MedicationTrend>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DailyBreakdown {
    pub date: NaiveDate,
    pub symptoms_count: usize,
    pub unique_symptoms: usize,
    pub mood: Option<String>,
    pub medications_count: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrendsView {
    pub symptom_frequency: Vec<SymptomTrend>,
    pub mood_trends: Vec<MoodTrend>,
    pub medication_adherence: MedicationAdherence,
    pub daily_breakdown: Vec<DailyBreakdown>,
    pub period_days: u32,
    pub total_logs: usize,
    pub analysis_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

#[derive(Default)]
struct DayBucket<'a> {
    symptoms: Vec<&'a str>,
    moods: Vec<&'a str>,
    medications: usize,
}

pub fn build(records: &[HealthLogRecord], days: u32, now: DateTime<Utc>) -> TrendsView {
    if records.is_empty() {
        return TrendsView {
            symptom_frequency: Vec::new(),
            mood_trends: Vec::new(),
            medication_adherence: MedicationAdherence::default(),
            daily_breakdown: Vec::new(),
            period_days: days,
            total_logs: 0,
            analysis_date: now,
            message: Some(NO_DATA_MESSAGE.to_string()),
        };
    }

    let mut symptoms = Tally::new();
    let mut moods = Tally::new();
    let mut medications = Tally::new();
    let mut daily: BTreeMap<NaiveDate, DayBucket> = BTreeMap::new();

    for record in records {
        let analysis = &record.analysis;
        let bucket = daily.entry(utc_date(&record.timestamp)).or_default();

        symptoms.extend(&analysis.symptoms);
        bucket
            .symptoms
            .extend(analysis.symptoms.iter().map(String::as_str));

        if let Some(mood) = analysis.detected_mood() {
            moods.add(mood);
            bucket.moods.push(mood);
        }

        medications.extend(analysis.medications.iter().map(|m| &m.name));
        bucket.medications += analysis.medications.len();
    }

    let total = records.len();
    tracing::debug!(total, days = daily.len(), "building trends");

    TrendsView {
        symptom_frequency: symptoms
            .ranked()
            .into_iter()
            .map(|(symptom, n)| SymptomTrend {
                symptom: symptom.to_string(),
                total_occurrences: n,
                frequency_percentage: percentage(n, total),
                trend: STABLE.to_string(),
            })
            .collect(),
        mood_trends: moods
            .ranked()
            .into_iter()
            .map(|(mood, n)| MoodTrend {
                mood: mood.to_string(),
                occurrences: n,
                percentage: percentage(n, moods.total()),
            })
            .collect(),
        medication_adherence: MedicationAdherence {
            total_mentions: medications.total(),
            unique_medications: medications.distinct(),
            medications: medications
                .ranked()
                .into_iter()
                .map(|(name, n)| MedicationTrend {
                    name: name.to_string(),
                    mentions: n,
                    adherence_score: adherence_score(n, days),
                })
                .collect(),
        },
        daily_breakdown: daily
            .into_iter()
            .map(|(date, bucket)| DailyBreakdown {
                date,
                symptoms_count: bucket.symptoms.len(),
                unique_symptoms: bucket.symptoms.iter().collect::<HashSet<_>>().len(),
                mood: bucket.moods.first().map(|m| m.to_string()),
                medications_count: bucket.medications,
            })
            .collect(),
        period_days: days,
        total_logs: total,
        analysis_date: now,
        message: None,
    }
}

fn adherence_score(mentions: usize, days: u32) -> f64 {
    if days == 0 {
        return 0.0;
    }
    round1(mentions as f64 / f64::from(days) * 100.0)
}
