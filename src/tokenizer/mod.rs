// WHY: the summarizer only sees this trait, so the language rules (boundaries,
// word shapes, stopwords) can be swapped without touching the ranking code

use anyhow::Result;

pub mod abbreviations;
pub mod normalization;
pub mod sentences;
pub mod stopwords;
pub mod words;

pub use abbreviations::AbbreviationChecker;
pub use normalization::{char_length, normalize_whitespace};
pub use sentences::{SentenceBoundaryRules, SentenceSplitter};
pub use stopwords::CommonWords;
pub use words::WordSplitter;

/// Language adapter used by the summarizer
pub trait LanguageTokenizer {
    /// Sentences in document order, whitespace-normalized and non-empty
    fn split_sentences(&self, text: &str) -> Vec<String>;

    /// Word and punctuation tokens of one sentence, case preserved
    fn split_words(&self, sentence: &str) -> Vec<String>;

    /// Stopwords and punctuation symbols excluded from frequency counting
    fn common_words(&self) -> CommonWords;
}

/// English tokenizer backed by the rule-driven sentence splitter
pub struct EnglishTokenizer {
    sentences: SentenceSplitter,
    words: WordSplitter,
}

impl EnglishTokenizer {
    pub fn new() -> Result<Self> {
        Self::with_rules(SentenceBoundaryRules::default())
    }

    pub fn with_rules(rules: SentenceBoundaryRules) -> Result<Self> {
        Ok(Self {
            sentences: SentenceSplitter::new(rules),
            words: WordSplitter::new()?,
        })
    }
}

impl LanguageTokenizer for EnglishTokenizer {
    fn split_sentences(&self, text: &str) -> Vec<String> {
        self.sentences.split(text)
    }

    fn split_words(&self, sentence: &str) -> Vec<String> {
        self.words.split(sentence)
    }

    fn common_words(&self) -> CommonWords {
        CommonWords::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_tokenizer_pipeline() {
        let tokenizer = EnglishTokenizer::new().unwrap();
        let sentences = tokenizer.split_sentences("Stocks rallied today. Bonds slipped.");
        assert_eq!(sentences, vec!["Stocks rallied today.", "Bonds slipped."]);

        let words = tokenizer.split_words(&sentences[0]);
        assert_eq!(words, vec!["Stocks", "rallied", "today", "."]);

        let common = tokenizer.common_words();
        assert!(common.contains("."));
        assert!(!common.contains("stocks"));
    }
}
