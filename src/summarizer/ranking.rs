use std::cmp::Ordering;

use super::frequency::FrequencyTable;

/// Accumulated score of one candidate sentence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankEntry {
    /// Position in the candidate pool
    pub position: usize,
    /// Stable document index of the sentence
    pub index: usize,
    /// Sum of the raw counts of the sentence's informative tokens; the ranking key
    pub weight: u64,
    /// `weight` on the normalized scale
    pub score: f64,
    /// At least one token is a counted word, even if the band filter dropped it
    pub has_content: bool,
}

/// Candidate scores keyed by document index, kept in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankingTable {
    entries: Vec<RankEntry>,
}

impl RankingTable {
    /// Sum the table weight of every token of every candidate; tokens absent from the
    /// table contribute 0. `indices[i]` is the document index of `tokenized[i]`.
    pub fn rank<S: AsRef<str>>(
        indices: &[usize],
        tokenized: &[Vec<S>],
        table: &FrequencyTable,
    ) -> Self {
        let entries = indices
            .iter()
            .zip(tokenized)
            .enumerate()
            .map(|(position, (&index, tokens))| {
                let weight: u64 = tokens.iter().map(|token| table.weight(token.as_ref())).sum();
                RankEntry {
                    position,
                    index,
                    weight,
                    score: table.normalize(weight),
                    has_content: tokens.iter().any(|token| table.is_counted(token.as_ref())),
                }
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `k` best entries: weight descending, then sentences with content words
    /// ahead of stopword-only ones, then document order
    pub fn top(&self, k: usize) -> Vec<RankEntry> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(by_rank);
        ranked.truncate(k);
        ranked
    }
}

fn by_rank(a: &RankEntry, b: &RankEntry) -> Ordering {
    b.weight
        .cmp(&a.weight)
        .then_with(|| b.has_content.cmp(&a.has_content))
        .then_with(|| a.index.cmp(&b.index))
}
