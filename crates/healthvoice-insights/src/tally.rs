//! Insertion-ordered frequency counter

use std::collections::HashMap;

/// Counts labels while remembering the order each was first seen.
///
/// Ranking and mode both break ties by first-seen order, so results never
/// depend on hash iteration order.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), 1));
            }
        }
    }

    pub fn extend<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for label in labels {
            self.add(label.as_ref());
        }
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Number of distinct labels
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, label: &str) -> usize {
        self.index
            .get(label)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Distinct labels in first-seen order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    /// Labels by descending count; equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .entries
            .iter()
            .map(|(label, n)| (label.as_str(), *n))
            .collect();
        ranked.sort_by_key(|&(_, n)| std::cmp::Reverse(n));
        ranked
    }

    /// Most frequent label; the earliest seen wins a tie.
    pub fn mode(&self) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for (label, n) in &self.entries {
            if best.is_none_or(|(_, top)| *n > top) {
                best = Some((label.as_str(), *n));
            }
        }
        best.map(|(label, _)| label)
    }
}
