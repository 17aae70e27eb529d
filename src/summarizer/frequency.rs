// WHY: raw counts are kept and sentence weights are summed as integers; every
// score shares the largest count as denominator, so dividing once per sentence
// keeps mathematically equal sentences exactly equal

use std::collections::{HashMap, HashSet};

use crate::tokenizer::CommonWords;

/// Word counts for one summarization call, normalized to `(0, 1]` by the highest count
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
    /// Counted words later dropped by the neglect band
    neglected: HashSet<String>,
    max_count: u64,
}

impl FrequencyTable {
    /// Count every token not in `common_words` and record the highest count.
    /// Returns an empty table when no token survives the common-word exclusion.
    pub fn build<S: AsRef<str>>(tokenized: &[Vec<S>], common_words: &CommonWords) -> Self {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for token in tokenized.iter().flatten() {
            let token = token.as_ref();
            if common_words.contains(token) {
                continue;
            }
            match counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(token.to_string(), 1);
                }
            }
        }

        let Some(max_count) = counts.values().copied().max() else {
            return Self::default();
        };

        Self {
            counts,
            neglected: HashSet::new(),
            max_count,
        }
    }

    /// Drop every token whose score falls in the neglect band; returns how many were dropped
    pub fn retain_informative(&mut self, min_frequency: f64, max_frequency: f64) -> usize {
        let max_count = self.max_count;
        let mut dropped = Vec::new();
        self.counts.retain(|token, count| {
            let score = normalize(*count, max_count);
            let neglected = is_neglected(score, min_frequency, max_frequency);
            if neglected {
                dropped.push(token.clone());
            }
            !neglected
        });
        let removed = dropped.len();
        self.neglected.extend(dropped);
        removed
    }

    /// Raw count of `token`, or 0 when it is absent or neglected
    pub fn weight(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Normalized score of `token`, or 0 when it is absent or neglected
    pub fn score(&self, token: &str) -> f64 {
        self.normalize(self.weight(token))
    }

    /// Convert a summed weight to the normalized scale; one division per sum
    pub fn normalize(&self, weight: u64) -> f64 {
        normalize(weight, self.max_count)
    }

    /// Whether `token` was counted at all, even if the band filter later dropped it
    pub fn is_counted(&self, token: &str) -> bool {
        self.counts.contains_key(token) || self.neglected.contains(token)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

fn normalize(weight: u64, max_count: u64) -> f64 {
    if max_count == 0 {
        0.0
    } else {
        weight as f64 / max_count as f64
    }
}

/// Neglect band `(0, min] ∪ [max, 1)`: too rare, or common enough to act like a stopword.
/// The top-scoring words (exactly 1.0) are never neglected.
pub fn is_neglected(score: f64, min_frequency: f64, max_frequency: f64) -> bool {
    score <= min_frequency || (score >= max_frequency && score < 1.0)
}
