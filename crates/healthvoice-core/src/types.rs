//! Structured analysis of a single transcript

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mood label reported when no mood keyword matched.
pub const NEUTRAL_MOOD: &str = "Neutral";

/// Mood detected in a transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodReading {
    /// Display label of the winning mood, or "Neutral"
    pub primary: String,
    /// Trigger match count per lexicon label (zero counts omitted)
    #[serde(default)]
    pub scores: BTreeMap<String, usize>,
    pub detected: bool,
}

impl MoodReading {
    pub fn neutral() -> Self {
        Self {
            primary: NEUTRAL_MOOD.to_string(),
            scores: BTreeMap::new(),
            detected: false,
        }
    }
}

impl Default for MoodReading {
    fn default() -> Self {
        Self::neutral()
    }
}

/// A medication name pulled out of the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationMention {
    pub name: String,
    /// Surrounding text, kept for traceability
    pub mentioned_in: String,
}

/// One lifestyle category found in the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifestyleEntry {
    pub mentioned: bool,
    #[serde(default)]
    pub keywords_found: Vec<String>,
    #[serde(default)]
    pub count: usize,
    /// Only set on `sleep`, when a duration was spoken
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<u32>,
}

/// Everything extracted from one voice note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub mood: MoodReading,
    #[serde(default)]
    pub medications: Vec<MedicationMention>,
    #[serde(default)]
    pub lifestyle: BTreeMap<String, LifestyleEntry>,
    pub raw_text: String,
    pub analyzed_at: DateTime<Utc>,
}

impl Analysis {
    /// Sleep hours, if a duration was captured.
    pub fn sleep_hours(&self) -> Option<u32> {
        self.lifestyle
            .get(crate::lexicon::SLEEP)
            .and_then(|entry| entry.hours)
    }

    pub fn mentions_lifestyle(&self, category: &str) -> bool {
        self.lifestyle.contains_key(category)
    }

    /// The detected mood label, `None` when the note was neutral.
    pub fn detected_mood(&self) -> Option<&str> {
        self.mood.detected.then_some(self.mood.primary.as_str())
    }
}
