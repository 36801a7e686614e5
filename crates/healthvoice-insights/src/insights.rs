//! Structured insights over a window of logs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use healthvoice_core::lexicon::{EXERCISE, STRESS};
use healthvoice_core::NEUTRAL_MOOD;
use healthvoice_store::{window_start, HealthLogRecord};

use crate::stats::{average, percentage};
use crate::tally::Tally;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SymptomInsight {
    pub symptom: String,
    pub frequency: usize,
    /// Share of logs reporting the symptom
    pub percentage: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MentalEmotionalState {
    pub primary_mood: String,
    pub mood_distribution: BTreeMap<String, usize>,
    pub total_mood_mentions: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MedicationInsight {
    pub medication: String,
    pub mentions: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SleepInsight {
    pub average_hours: Option<f64>,
    pub mentions: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActivityInsight {
    pub mentions: usize,
    pub frequency: String,
}

impl ActivityInsight {
    fn new(mentions: usize, days: u32) -> Self {
        Self {
            mentions,
            frequency: format!("{} times in {} days", mentions, days),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LifestyleContext {
    pub sleep: SleepInsight,
    pub exercise: ActivityInsight,
    pub stress: ActivityInsight,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalysisPeriod {
    pub days: u32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_logs: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InsightsView {
    pub symptoms_detected: Vec<SymptomInsight>,
    pub mental_emotional_state: MentalEmotionalState,
    pub medications_timing: Vec<MedicationInsight>,
    pub lifestyle_context: LifestyleContext,
    pub analysis_period: AnalysisPeriod,
}

pub fn build(records: &[HealthLogRecord], days: u32, now: DateTime<Utc>) -> InsightsView {
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

    let total = records.len();
    tracing::debug!(total, days, "building insights");

    InsightsView {
        symptoms_detected: symptoms
            .ranked()
            .into_iter()
            .map(|(symptom, frequency)| SymptomInsight {
                symptom: symptom.to_string(),
                frequency,
                percentage: percentage(frequency, total),
            })
            .collect(),
        mental_emotional_state: MentalEmotionalState {
            primary_mood: moods.mode().unwrap_or(NEUTRAL_MOOD).to_string(),
            mood_distribution: moods
                .ranked()
                .into_iter()
                .map(|(mood, n)| (mood.to_string(), n))
                .collect(),
            total_mood_mentions: moods.total(),
        },
        medications_timing: medications
            .ranked()
            .into_iter()
            .map(|(medication, mentions)| MedicationInsight {
                medication: medication.to_string(),
                mentions,
            })
            .collect(),
        lifestyle_context: LifestyleContext {
            sleep: SleepInsight {
                average_hours: average(&sleep_hours),
                mentions: sleep_hours.len(),
            },
            exercise: ActivityInsight::new(exercise, days),
            stress: ActivityInsight::new(stress, days),
        },
        analysis_period: AnalysisPeriod {
            days,
            start_date: window_start(days, now),
            end_date: now,
            total_logs: total,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::record_at;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 18, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_window() {
        let view = build(&[], 7, now());
        assert!(view.symptoms_detected.is_empty());
        assert!(view.medications_timing.is_empty());
        assert_eq!(view.mental_emotional_state.primary_mood, "Neutral");
        assert!(view.mental_emotional_state.mood_distribution.is_empty());
        assert_eq!(view.mental_emotional_state.total_mood_mentions, 0);
        assert_eq!(view.lifestyle_context.sleep.average_hours, None);
        assert_eq!(view.lifestyle_context.sleep.mentions, 0);
        assert_eq!(view.lifestyle_context.exercise.frequency, "0 times in 7 days");
        assert_eq!(view.analysis_period.total_logs, 0);
        assert_eq!(view.analysis_period.start_date, now() - Duration::days(7));
        assert_eq!(view.analysis_period.end_date, now());
    }

    #[test]
    fn test_symptom_frequency_and_percentage() {
        let records = vec![
            record_at("fever and a cough", now()),
            record_at("fever again", now() - Duration::days(1)),
            record_at("feeling fine", now() - Duration::days(2)),
        ];
        let view = build(&records, 7, now());
        assert_eq!(
            view.symptoms_detected,
            vec![
                SymptomInsight {
                    symptom: "Fever".into(),
                    frequency: 2,
                    percentage: 66.7,
                },
                SymptomInsight {
                    symptom: "Cough".into(),
                    frequency: 1,
                    percentage: 33.3,
                },
            ]
        );
    }

    #[test]
    fn test_moods_and_medications() {
        let records = vec![
            record_at("calm today, took Advil", now()),
            record_at("anxious and took Advil", now() - Duration::days(1)),
            record_at("calm, took Tylenol", now() - Duration::days(2)),
        ];
        let view = build(&records, 7, now());
        let state = &view.mental_emotional_state;
        assert_eq!(state.primary_mood, "Calm");
        assert_eq!(state.total_mood_mentions, 3);
        assert_eq!(state.mood_distribution.get("Calm"), Some(&2));
        assert_eq!(state.mood_distribution.get("Anxious"), Some(&1));

        assert_eq!(view.medications_timing[0].medication, "Advil");
        assert_eq!(view.medications_timing[0].mentions, 2);
        assert_eq!(view.medications_timing[1].medication, "Tylenol");
    }

    #[test]
    fn test_lifestyle_context() {
        let records = vec![
            record_at("slept 7 hours then went to the gym", now()),
            record_at("slept 8 hours", now() - Duration::days(1)),
            record_at("so much pressure at work", now() - Duration::days(2)),
        ];
        let view = build(&records, 7, now());
        let lifestyle = &view.lifestyle_context;
        assert_eq!(lifestyle.sleep.average_hours, Some(7.5));
        assert_eq!(lifestyle.sleep.mentions, 2);
        assert_eq!(lifestyle.exercise.mentions, 1);
        assert_eq!(lifestyle.exercise.frequency, "1 times in 7 days");
        assert_eq!(lifestyle.stress.mentions, 1);
    }

    #[test]
    fn test_serializes_null_average() {
        let json = serde_json::to_value(build(&[], 7, now())).unwrap();
        assert!(json["lifestyle_context"]["sleep"]["average_hours"].is_null());
        assert_eq!(json["analysis_period"]["days"], 7);
    }
}
