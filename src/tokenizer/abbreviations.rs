// WHY: news copy is full of titles and initials ("Sen. Warren", "J. K. Rowling")
// whose trailing period is followed by a capital and would otherwise end a sentence

use std::collections::HashSet;

/// Title abbreviations that precede a proper noun and never close a sentence
pub const TITLE_ABBREVIATIONS: &[&str] = &[
    "Dr.", "Mr.", "Mrs.", "Ms.", "Prof.", "Sr.", "Jr.", "St.",
    "Gov.", "Sen.", "Rep.", "Gen.", "Lt.", "Col.", "Capt.", "Sgt.",
    "Rev.", "Hon.", "Pres.", "Supt.", "Mt.", "No.",
];

/// Hash-backed lookup for abbreviations that suppress a sentence boundary
pub struct AbbreviationChecker {
    title_abbreviations: HashSet<&'static str>,
}

impl AbbreviationChecker {
    pub fn new() -> Self {
        Self {
            title_abbreviations: TITLE_ABBREVIATIONS.iter().copied().collect(),
        }
    }

    pub fn is_title_abbreviation(&self, word: &str) -> bool {
        self.title_abbreviations.contains(word)
    }

    /// Check if text ends with a title abbreviation such as "Dr."
    pub fn ends_with_title_abbreviation(&self, text: &str) -> bool {
        last_word(text).is_some_and(|word| self.is_title_abbreviation(word))
    }

    /// Check if text ends with a single capital initial such as "J."
    pub fn ends_with_initial(&self, text: &str) -> bool {
        let Some(word) = last_word(text) else {
            return false;
        };
        let mut chars = word.chars();
        matches!(
            (chars.next(), chars.next(), chars.next()),
            (Some(letter), Some('.'), None) if letter.is_uppercase()
        )
    }

    /// Whether a period closing `text` belongs to an abbreviation
    pub fn suppresses_boundary(&self, text: &str) -> bool {
        self.ends_with_title_abbreviation(text) || self.ends_with_initial(text)
    }
}

impl Default for AbbreviationChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Last whitespace-separated word with surrounding quotes and brackets removed
fn last_word(text: &str) -> Option<&str> {
    text.split_whitespace().last().map(|word| {
        word.trim_start_matches(|c: char| {
            matches!(c, '"' | '\'' | '\u{201C}' | '\u{2018}' | '(' | '[')
        })
    })
}
