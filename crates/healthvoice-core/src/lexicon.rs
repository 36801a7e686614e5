//! Keyword lexicons and match patterns for health transcripts

use regex::Regex;
use std::sync::LazyLock;

/// A canonical label with the phrases that trigger it.
///
/// Declaration order matters: symptoms are reported in this order and mood
/// ties resolve to the earlier entry.
pub struct LexiconEntry {
    pub label: &'static str,
    pub triggers: &'static [&'static str],
}

pub const SYMPTOM_LEXICON: &[LexiconEntry] = &[
    LexiconEntry {
        label: "pain",
        triggers: &["pain", "ache", "hurting", "sore", "tender", "discomfort"],
    },
    LexiconEntry {
        label: "headache",
        triggers: &["headache", "head pain", "migraine", "head ache"],
    },
    LexiconEntry {
        label: "fever",
        triggers: &["fever", "temperature", "hot", "chills", "sweating"],
    },
    LexiconEntry {
        label: "nausea",
        triggers: &["nausea", "nauseous", "queasy", "sick to stomach"],
    },
    LexiconEntry {
        label: "fatigue",
        triggers: &["tired", "fatigue", "exhausted", "worn out", "drained"],
    },
    LexiconEntry {
        label: "cough",
        triggers: &["cough", "coughing", "hacking"],
    },
    LexiconEntry {
        label: "sore_throat",
        triggers: &["sore throat", "throat pain", "scratchy throat"],
    },
    LexiconEntry {
        label: "dizziness",
        triggers: &["dizzy", "dizziness", "lightheaded", "woozy"],
    },
    LexiconEntry {
        label: "joint_pain",
        triggers: &["joint pain", "arthritis", "stiff joints"],
    },
    LexiconEntry {
        label: "back_pain",
        triggers: &["back pain", "backache", "lower back"],
    },
];

pub const MOOD_LEXICON: &[LexiconEntry] = &[
    LexiconEntry {
        label: "anxious",
        triggers: &["anxious", "anxiety", "worried", "nervous", "stressed"],
    },
    LexiconEntry {
        label: "depressed",
        triggers: &["depressed", "sad", "down", "blue", "hopeless"],
    },
    LexiconEntry {
        label: "happy",
        triggers: &["happy", "good", "great", "excited", "joyful"],
    },
    LexiconEntry {
        label: "calm",
        triggers: &["calm", "relaxed", "peaceful", "serene"],
    },
    LexiconEntry {
        label: "irritated",
        triggers: &["irritated", "angry", "frustrated", "annoyed"],
    },
    LexiconEntry {
        label: "energetic",
        triggers: &["energetic", "energized", "active", "peppy"],
    },
];

pub const LIFESTYLE_LEXICON: &[LexiconEntry] = &[
    LexiconEntry {
        label: "sleep",
        triggers: &[
            "sleep",
            "slept",
            "sleeping",
            "rested",
            "insomnia",
            "wake up",
        ],
    },
    LexiconEntry {
        label: "exercise",
        triggers: &[
            "exercise",
            "worked out",
            "gym",
            "running",
            "walking",
            "fitness",
        ],
    },
    LexiconEntry {
        label: "stress",
        triggers: &["stress", "stressed", "pressure", "overwhelmed"],
    },
    LexiconEntry {
        label: "food",
        triggers: &[
            "ate",
            "eating",
            "food",
            "meal",
            "breakfast",
            "lunch",
            "dinner",
            "snack",
        ],
    },
    LexiconEntry {
        label: "water",
        triggers: &["water", "hydrated", "drinking", "thirsty"],
    },
];

/// Lifestyle category keys the summarizer and aggregator look for.
pub const SLEEP: &str = "sleep";
pub const EXERCISE: &str = "exercise";
pub const STRESS: &str = "stress";

/// Cue words that must never be reported as a medication name.
pub const MEDICATION_FALSE_POSITIVES: &[&str] = &[
    "took",
    "taking",
    "taken",
    "prescribed",
    "medication",
    "medicine",
    "med",
    "pill",
    "tablet",
    "capsule",
];

/// Medication patterns, applied in order to the original-case text.
///
/// Cue and unit words match in any case; the captured name must be a run of
/// capitalized words.
pub static MEDICATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        compile(
            r"\b(?i:took|taking|taken|prescribed|medication|medicine|med|pill|tablet|capsule)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)",
        ),
        compile(r"\b([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\s+(?i:mg|mcg|ml|dose)"),
    ]
});

/// Sleep duration, applied to the lowercased text.
pub static SLEEP_HOURS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?:slept|sleep|rested)\s+(?:for\s+)?([0-9]+)\s*(?:hours?|hrs?)")
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid lexicon regex pattern")
}

/// Turn a lexicon label into its display form: `sore_throat` -> `Sore Throat`.
pub fn display_label(label: &str) -> String {
    label
        .replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Every display label the symptom lexicon can produce.
pub fn symptom_display_labels() -> Vec<String> {
    SYMPTOM_LEXICON
        .iter()
        .map(|entry| display_label(entry.label))
        .collect()
}
