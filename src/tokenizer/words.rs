use anyhow::Result;
use regex_automata::meta::Regex;

/// A word is a run of letters or digits, optionally joined by internal apostrophes
/// or hyphens ("don't", "well-known"); any other visible char is a token on its own
const WORD_PATTERN: &str = r"[\p{L}\p{N}]+(?:['\u{2019}\-][\p{L}\p{N}]+)*|\S";

/// Splits a sentence into word and punctuation tokens
pub struct WordSplitter {
    pattern: Regex,
}

impl WordSplitter {
    /// Compile the word pattern once at construction
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(WORD_PATTERN)?;
        Ok(Self { pattern })
    }

    /// Tokens in sentence order; case is preserved
    pub fn split(&self, sentence: &str) -> Vec<String> {
        self.split_borrowed(sentence)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn split_borrowed<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        self.pattern
            .find_iter(sentence)
            .map(|m| &sentence[m.range()])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_and_punctuation() {
        let splitter = WordSplitter::new().unwrap();
        assert_eq!(
            splitter.split("The cat sat on the mat."),
            vec!["The", "cat", "sat", "on", "the", "mat", "."]
        );
    }

    #[test]
    fn test_internal_apostrophes_and_hyphens() {
        let splitter = WordSplitter::new().unwrap();
        assert_eq!(
            splitter.split("don't stop well-known 'quotes'"),
            vec!["don't", "stop", "well-known", "'", "quotes", "'"]
        );
    }

    #[test]
    fn test_numbers_and_symbols() {
        let splitter = WordSplitter::new().unwrap();
        assert_eq!(
            splitter.split("Shares fell 12% to $40, analysts said."),
            vec!["Shares", "fell", "12", "%", "to", "$", "40", ",", "analysts", "said", "."]
        );
    }

    #[test]
    fn test_unicode_letters() {
        let splitter = WordSplitter::new().unwrap();
        assert_eq!(
            splitter.split("Café au lait — très bon"),
            vec!["Café", "au", "lait", "—", "très", "bon"]
        );
    }

    #[test]
    fn test_empty_sentence() {
        let splitter = WordSplitter::new().unwrap();
        assert!(splitter.split("").is_empty());
        assert!(splitter.split("   ").is_empty());
    }
}
