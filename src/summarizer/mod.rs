// WHY: extractive summary by word frequency. Each call owns its sentence list,
// frequency table and ranking table; the summarizer itself is read-only after
// construction and can be shared between callers.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub mod frequency;
pub mod ranking;

pub use frequency::{is_neglected, FrequencyTable};
pub use ranking::{RankEntry, RankingTable};

use crate::error::SummarizeError;
use crate::tokenizer::{char_length, CommonWords, EnglishTokenizer, LanguageTokenizer};

pub const DEFAULT_MIN_FREQUENCY: f64 = 0.1;
pub const DEFAULT_MAX_FREQUENCY: f64 = 0.9;
pub const DEFAULT_MAX_SENTENCE_LENGTH: usize = 140;

/// Tunable thresholds, validated once when the summarizer is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummarizerConfig {
    /// Normalized scores at or below this are dropped as too rare
    pub min_frequency: f64,
    /// Normalized scores at or above this (but below 1.0) are dropped as too common
    pub max_frequency: f64,
    /// Sentences with this many characters or more never become candidates
    pub max_sentence_length: usize,
    /// Fail with `DegenerateFrequencyTable` instead of falling back to document order
    /// when no candidate contains a scorable word
    pub reject_degenerate: bool,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            min_frequency: DEFAULT_MIN_FREQUENCY,
            max_frequency: DEFAULT_MAX_FREQUENCY,
            max_sentence_length: DEFAULT_MAX_SENTENCE_LENGTH,
            reject_degenerate: false,
        }
    }
}

impl SummarizerConfig {
    /// Require `0 <= min < max <= 1` and a positive sentence length
    pub fn validate(&self) -> Result<(), SummarizeError> {
        if !(0.0..1.0).contains(&self.min_frequency) {
            return Err(SummarizeError::InvalidConfiguration(format!(
                "min_frequency must be in [0, 1), got {}",
                self.min_frequency
            )));
        }
        if !(self.max_frequency > 0.0 && self.max_frequency <= 1.0) {
            return Err(SummarizeError::InvalidConfiguration(format!(
                "max_frequency must be in (0, 1], got {}",
                self.max_frequency
            )));
        }
        if self.min_frequency >= self.max_frequency {
            return Err(SummarizeError::InvalidConfiguration(format!(
                "min_frequency ({}) must be below max_frequency ({})",
                self.min_frequency, self.max_frequency
            )));
        }
        if self.max_sentence_length == 0 {
            return Err(SummarizeError::InvalidConfiguration(
                "max_sentence_length must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// A sentence of the input document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub text: String,
    /// 0-based position in the document, assigned before any filtering
    pub index: usize,
    pub length_chars: usize,
}

impl Sentence {
    pub fn new(index: usize, text: String) -> Self {
        let length_chars = char_length(&text);
        Self {
            text,
            index,
            length_chars,
        }
    }
}

/// A selected sentence with its aggregate score
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSentence {
    pub sentence: Sentence,
    pub score: f64,
}

/// Selected sentences, highest score first, ties in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryResult {
    pub sentences: Vec<RankedSentence>,
    /// Size of the candidate pool the selection was made from
    pub candidate_count: usize,
}

impl SummaryResult {
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.sentences
            .iter()
            .map(|ranked| ranked.sentence.text.as_str())
            .collect()
    }

    pub fn into_texts(self) -> Vec<String> {
        self.sentences
            .into_iter()
            .map(|ranked| ranked.sentence.text)
            .collect()
    }
}

/// Ranks sentences by the summed frequency of their informative words
pub struct FrequencySummarizer<T = EnglishTokenizer> {
    config: SummarizerConfig,
    tokenizer: T,
    common_words: CommonWords,
}

impl FrequencySummarizer<EnglishTokenizer> {
    /// Summarizer over the built-in English tokenizer
    pub fn english(config: SummarizerConfig) -> anyhow::Result<Self> {
        let tokenizer = EnglishTokenizer::new()?;
        Ok(Self::new(config, tokenizer)?)
    }
}

impl<T: LanguageTokenizer> FrequencySummarizer<T> {
    /// Validate `config` and freeze the tokenizer's common-word set
    pub fn new(config: SummarizerConfig, tokenizer: T) -> Result<Self, SummarizeError> {
        config.validate()?;
        let common_words = tokenizer.common_words();
        info!(
            min_frequency = config.min_frequency,
            max_frequency = config.max_frequency,
            max_sentence_length = config.max_sentence_length,
            common_words = common_words.len(),
            "Created frequency summarizer"
        );
        Ok(Self {
            config,
            tokenizer,
            common_words,
        })
    }

    /// Sentences short enough to be ranked, with their document indices
    pub fn candidates(&self, text: &str) -> Vec<Sentence> {
        let sentences: Vec<Sentence> = self
            .tokenizer
            .split_sentences(text)
            .into_iter()
            .enumerate()
            .map(|(index, sentence)| Sentence::new(index, sentence))
            .collect();
        let total = sentences.len();

        let candidates: Vec<Sentence> = sentences
            .into_iter()
            .filter(|sentence| sentence.length_chars < self.config.max_sentence_length)
            .collect();

        debug!(
            sentences = total,
            candidates = candidates.len(),
            "Applied sentence length cutoff"
        );
        candidates
    }

    /// Text of the `summary_length` best sentences, highest score first.
    ///
    /// Fails with `InvalidSummaryLength` when fewer candidates exist than requested.
    pub fn summarize(
        &self,
        text: &str,
        summary_length: usize,
    ) -> Result<Vec<String>, SummarizeError> {
        self.summarize_ranked(text, summary_length)
            .map(SummaryResult::into_texts)
    }

    /// Like [`summarize`](Self::summarize), keeping scores and document indices
    pub fn summarize_ranked(
        &self,
        text: &str,
        summary_length: usize,
    ) -> Result<SummaryResult, SummarizeError> {
        let candidates = self.candidates(text);
        if summary_length > candidates.len() {
            return Err(SummarizeError::InvalidSummaryLength {
                requested: summary_length,
                available: candidates.len(),
            });
        }
        self.select(candidates, summary_length)
    }

    /// Select at most `summary_length` sentences, fewer when the candidate pool is smaller
    pub fn summarize_up_to(
        &self,
        text: &str,
        summary_length: usize,
    ) -> Result<SummaryResult, SummarizeError> {
        let candidates = self.candidates(text);
        let summary_length = summary_length.min(candidates.len());
        self.select(candidates, summary_length)
    }

    fn select(
        &self,
        candidates: Vec<Sentence>,
        summary_length: usize,
    ) -> Result<SummaryResult, SummarizeError> {
        let candidate_count = candidates.len();
        if summary_length == 0 {
            return Ok(SummaryResult {
                sentences: Vec::new(),
                candidate_count,
            });
        }

        let tokenized: Vec<Vec<String>> = candidates
            .iter()
            .map(|sentence| self.tokenizer.split_words(&sentence.text.to_lowercase()))
            .collect();

        let mut table = FrequencyTable::build(&tokenized, &self.common_words);
        if table.is_empty() {
            if self.config.reject_degenerate {
                return Err(SummarizeError::DegenerateFrequencyTable {
                    candidates: candidate_count,
                });
            }
            warn!(
                candidates = candidate_count,
                "No scorable words in candidate sentences, selecting in document order"
            );
        } else {
            let neglected =
                table.retain_informative(self.config.min_frequency, self.config.max_frequency);
            debug!(words = table.len(), neglected, "Built frequency table");
        }

        let indices: Vec<usize> = candidates.iter().map(|sentence| sentence.index).collect();
        let ranking = RankingTable::rank(&indices, &tokenized, &table);

        let mut pool: Vec<Option<Sentence>> = candidates.into_iter().map(Some).collect();
        let sentences: Vec<RankedSentence> = ranking
            .top(summary_length)
            .into_iter()
            .filter_map(|entry| {
                pool[entry.position].take().map(|sentence| RankedSentence {
                    sentence,
                    score: entry.score,
                })
            })
            .collect();

        info!(
            selected = sentences.len(),
            candidates = candidate_count,
            "Summarized document"
        );
        Ok(SummaryResult {
            sentences,
            candidate_count,
        })
    }
}
