// WHY: rule-driven boundary detection over a single char pass; article bodies arrive
// as paragraphs separated by blank lines, so a paragraph break always closes a sentence

use tracing::debug;

use super::abbreviations::AbbreviationChecker;
use super::normalization::normalize_whitespace;

/// Configuration for sentence boundary detection rules
#[derive(Debug, Clone)]
pub struct SentenceBoundaryRules {
    /// End punctuation characters that can terminate a sentence
    pub end_punctuation: Vec<char>,
    /// Characters that may trail end punctuation and still belong to the sentence
    pub closing_punctuation: Vec<char>,
    /// Characters considered opening quotes
    pub opening_quotes: Vec<char>,
    /// Characters considered opening parentheticals
    pub opening_parentheticals: Vec<char>,
}

impl Default for SentenceBoundaryRules {
    fn default() -> Self {
        Self {
            end_punctuation: vec!['.', '?', '!'],
            closing_punctuation: vec!['"', '\'', '\u{201D}', '\u{2019}', ')', ']'],
            opening_quotes: vec!['"', '\'', '\u{201C}', '\u{2018}'],
            opening_parentheticals: vec!['(', '['],
        }
    }
}

/// Splits text into sentences in document order
pub struct SentenceSplitter {
    rules: SentenceBoundaryRules,
    abbreviations: AbbreviationChecker,
}

impl SentenceSplitter {
    pub fn new(rules: SentenceBoundaryRules) -> Self {
        Self {
            rules,
            abbreviations: AbbreviationChecker::new(),
        }
    }

    pub fn with_default_rules() -> Self {
        Self::new(SentenceBoundaryRules::default())
    }

    /// Split into whitespace-normalized sentences, dropping empty ones
    pub fn split(&self, text: &str) -> Vec<String> {
        self.split_borrowed(text)
            .into_iter()
            .map(normalize_whitespace)
            .filter(|sentence| !sentence.is_empty())
            .collect()
    }

    /// Split into raw slices of `text` without normalization
    pub fn split_borrowed<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let char_indices: Vec<(usize, char)> = text.char_indices().collect();
        let chars: Vec<char> = char_indices.iter().map(|(_, ch)| *ch).collect();
        let byte_at = |pos: usize| char_indices.get(pos).map_or(text.len(), |(byte, _)| *byte);

        let mut sentences = Vec::new();
        let mut start_byte = 0;
        let mut i = 0;

        while i < chars.len() {
            let end = if chars[i] == '\n' && is_paragraph_break(&chars, i) {
                Some(i)
            } else {
                self.boundary_end(&chars, i)
                    .filter(|&last| {
                        chars[i] != '.'
                            || !self
                                .abbreviations
                                .suppresses_boundary(&text[start_byte..byte_at(last + 1)])
                    })
                    .map(|last| last + 1)
            };

            let Some(end) = end else {
                i += 1;
                continue;
            };

            let sentence = &text[start_byte..byte_at(end)];
            if !sentence.trim().is_empty() {
                sentences.push(sentence);
            }

            let resume = skip_whitespace(&chars, end);
            start_byte = byte_at(resume);
            i = resume.max(i + 1);
        }

        if start_byte < text.len() {
            let sentence = &text[start_byte..];
            if !sentence.trim().is_empty() {
                sentences.push(sentence);
            }
        }

        debug!("Split {} characters into {} sentences", text.len(), sentences.len());
        sentences
    }

    /// When `pos` holds end punctuation that closes a sentence, return the position of
    /// the sentence's last char (after any closing quotes or brackets)
    fn boundary_end(&self, chars: &[char], pos: usize) -> Option<usize> {
        if pos == 0 || !self.rules.end_punctuation.contains(&chars[pos]) {
            return None;
        }

        let mut next = pos + 1;
        while next < chars.len() && self.rules.closing_punctuation.contains(&chars[next]) {
            next += 1;
        }
        let last = next - 1;

        // Must have whitespace after the punctuation
        if next >= chars.len() || !chars[next].is_whitespace() {
            return None;
        }

        let next = skip_whitespace(chars, next);
        let following = *chars.get(next)?;

        let starts_sentence = following.is_uppercase()
            || following.is_ascii_digit()
            || self.rules.opening_quotes.contains(&following)
            || self.rules.opening_parentheticals.contains(&following);
        starts_sentence.then_some(last)
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

/// A newline followed, across whitespace only, by another newline
fn is_paragraph_break(chars: &[char], pos: usize) -> bool {
    chars[pos + 1..]
        .iter()
        .take_while(|ch| ch.is_whitespace())
        .any(|&ch| ch == '\n')
}

fn skip_whitespace(chars: &[char], mut pos: usize) -> usize {
    while pos < chars.len() && chars[pos].is_whitespace() {
        pos += 1;
    }
    pos
}
