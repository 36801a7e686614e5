//! Rule-based extraction of health signals from transcript text

use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashSet};

use crate::config::Config;
use crate::error::ExtractError;
use crate::lexicon::{
    display_label, LexiconEntry, LIFESTYLE_LEXICON, MEDICATION_FALSE_POSITIVES,
    MEDICATION_PATTERNS, MOOD_LEXICON, SLEEP, SLEEP_HOURS_PATTERN, SYMPTOM_LEXICON,
};
use crate::types::{Analysis, LifestyleEntry, MedicationMention, MoodReading};

/// Characters of context kept on each side of a medication match
const CONTEXT_CHARS: usize = 20;

#[derive(Debug, Clone)]
pub struct Extractor {
    max_note_chars: usize,
}

impl Extractor {
    pub fn new(max_note_chars: usize) -> Self {
        Self { max_note_chars }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_note_chars)
    }

    pub fn analyze(&self, text: &str) -> Result<Analysis, ExtractError> {
        self.analyze_at(text, Utc::now())
    }

    /// Analyze `text`, stamping the result with `now`.
    pub fn analyze_at(&self, text: &str, now: DateTime<Utc>) -> Result<Analysis, ExtractError> {
        if text.trim().is_empty() {
            return Err(ExtractError::EmptyText);
        }
        let len = text.chars().count();
        if len > self.max_note_chars {
            return Err(ExtractError::TooLong {
                len,
                max: self.max_note_chars,
            });
        }

        let text_lower = text.to_lowercase();

        let analysis = Analysis {
            symptoms: extract_symptoms(&text_lower),
            mood: extract_mood(&text_lower),
            medications: extract_medications(text),
            lifestyle: extract_lifestyle(&text_lower),
            raw_text: text.to_string(),
            analyzed_at: now,
        };

        tracing::debug!(
            symptoms = analysis.symptoms.len(),
            medications = analysis.medications.len(),
            lifestyle = analysis.lifestyle.len(),
            mood = %analysis.mood.primary,
            "analyzed note"
        );

        Ok(analysis)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

fn first_trigger<'a>(entry: &'a LexiconEntry, text_lower: &str) -> Option<&'a str> {
    entry
        .triggers
        .iter()
        .copied()
        .find(|trigger| text_lower.contains(trigger))
}

fn extract_symptoms(text_lower: &str) -> Vec<String> {
    let mut symptoms: Vec<String> = Vec::new();
    for entry in SYMPTOM_LEXICON {
        if first_trigger(entry, text_lower).is_some() {
            let label = display_label(entry.label);
            if !symptoms.contains(&label) {
                symptoms.push(label);
            }
        }
    }
    symptoms
}

fn extract_mood(text_lower: &str) -> MoodReading {
    let mut scores = BTreeMap::new();
    let mut best: Option<(&str, usize)> = None;

    // Scan in lexicon order; a later mood must score strictly higher to win.
    for entry in MOOD_LEXICON {
        let count = entry
            .triggers
            .iter()
            .filter(|trigger| text_lower.contains(*trigger))
            .count();
        if count == 0 {
            continue;
        }
        scores.insert(entry.label.to_string(), count);
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((entry.label, count));
        }
    }

    match best {
        Some((label, _)) => MoodReading {
            primary: display_label(label),
            scores,
            detected: true,
        },
        None => MoodReading::neutral(),
    }
}

fn extract_medications(text: &str) -> Vec<MedicationMention> {
    let mut medications = Vec::new();
    let mut seen = HashSet::new();

    for pattern in MEDICATION_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let name = name.as_str().trim();
            let key = name.to_lowercase();
            if MEDICATION_FALSE_POSITIVES.contains(&key.as_str()) {
                continue;
            }
            if !seen.insert(key) {
                continue;
            }
            medications.push(MedicationMention {
                name: name.to_string(),
                mentioned_in: context_snippet(text, whole.start(), whole.end()).to_string(),
            });
        }
    }

    medications
}

/// Slice of `text` from `CONTEXT_CHARS` characters before `start` to
/// `CONTEXT_CHARS` characters after `end`, clamped to the text.
fn context_snippet(text: &str, start: usize, end: usize) -> &str {
    let from = text[..start]
        .char_indices()
        .rev()
        .take(CONTEXT_CHARS)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(start);
    let to = text[end..]
        .char_indices()
        .nth(CONTEXT_CHARS)
        .map(|(i, _)| end + i)
        .unwrap_or(text.len());
    &text[from..to]
}

fn extract_lifestyle(text_lower: &str) -> BTreeMap<String, LifestyleEntry> {
    let mut lifestyle = BTreeMap::new();

    for entry in LIFESTYLE_LEXICON {
        let found: Vec<String> = entry
            .triggers
            .iter()
            .filter(|trigger| text_lower.contains(*trigger))
            .map(|trigger| trigger.to_string())
            .collect();
        if !found.is_empty() {
            lifestyle.insert(
                entry.label.to_string(),
                LifestyleEntry {
                    mentioned: true,
                    count: found.len(),
                    keywords_found: found,
                    hours: None,
                },
            );
        }
    }

    // A spoken duration creates the sleep entry even without a sleep keyword.
    // The capture is ASCII digits only, so a parse failure means overflow.
    let hours = SLEEP_HOURS_PATTERN
        .captures(text_lower)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().parse::<u32>().unwrap_or(u32::MAX));
    if let Some(hours) = hours {
        lifestyle
            .entry(SLEEP.to_string())
            .or_insert_with(|| LifestyleEntry {
                mentioned: true,
                keywords_found: Vec::new(),
                count: 0,
                hours: None,
            })
            .hours = Some(hours);
    }

    lifestyle
}
