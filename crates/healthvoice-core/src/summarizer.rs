//! One-paragraph clinical summary of a single analysis

use crate::lexicon::{EXERCISE, SLEEP, STRESS};
use crate::types::Analysis;

pub const EMPTY_SUMMARY: &str = "Health log recorded. No specific symptoms or concerns identified.";

pub fn summarize(analysis: &Analysis) -> String {
    let mut parts = Vec::new();

    if !analysis.symptoms.is_empty() {
        parts.push(format!(
            "Presenting symptoms: {}.",
            analysis.symptoms.join(", ")
        ));
    }

    if let Some(mood) = analysis.detected_mood() {
        parts.push(format!("Mental state: {}.", mood));
    }

    if !analysis.medications.is_empty() {
        let names: Vec<&str> = analysis
            .medications
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        parts.push(format!("Medications mentioned: {}.", names.join(", ")));
    }

    let mut highlights = Vec::new();
    if let Some(sleep) = analysis.lifestyle.get(SLEEP) {
        match sleep.hours {
            Some(hours) => highlights.push(format!("Sleep: {} hours", hours)),
            None => highlights.push("Sleep mentioned".to_string()),
        }
    }
    if analysis.mentions_lifestyle(EXERCISE) {
        highlights.push("Exercise mentioned".to_string());
    }
    if analysis.mentions_lifestyle(STRESS) {
        highlights.push("Stress mentioned".to_string());
    }
    if !highlights.is_empty() {
        parts.push(format!("Lifestyle context: {}.", highlights.join(", ")));
    }

    if parts.is_empty() {
        EMPTY_SUMMARY.to_string()
    } else {
        parts.join(" ")
    }
}
