// WHY: URL in, tweet-length sentences out. The facade applies its own length
// filter after summarizing; it is independent of the summarizer's candidacy cutoff
// and the two can be configured to disagree.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::article::{Article, ArticleSource};
use crate::error::{ExtractError, FetchError, SummarizeError};
use crate::summarizer::FrequencySummarizer;
use crate::tokenizer::{char_length, EnglishTokenizer, LanguageTokenizer};

/// Sentences requested from the summarizer per article
pub const DEFAULT_SUMMARY_LENGTH: usize = 5;

/// Sentences must be strictly shorter than this to be twittable
pub const DEFAULT_TWITTABLE_LENGTH: usize = 140;

/// Configuration for the URL-to-sentences facade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractionConfig {
    /// Upper bound on sentences requested from the summarizer; not derived from article length
    pub summary_length: usize,
    /// Summary sentences with this many characters or more are dropped
    pub max_twittable_length: usize,
    /// Total fetch attempts per URL; 0 behaves like 1
    pub fetch_attempts: u32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            summary_length: DEFAULT_SUMMARY_LENGTH,
            max_twittable_length: DEFAULT_TWITTABLE_LENGTH,
            fetch_attempts: 1,
        }
    }
}

/// Title of the fetched article with its twittable sentences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TwittableSentences {
    pub title: String,
    pub sentences: Vec<String>,
}

/// Fetch, summarize, filter
pub struct TwittableExtractor<S, T = EnglishTokenizer> {
    source: S,
    summarizer: FrequencySummarizer<T>,
    config: ExtractionConfig,
}

impl<S: ArticleSource, T: LanguageTokenizer> TwittableExtractor<S, T> {
    pub fn new(source: S, summarizer: FrequencySummarizer<T>, config: ExtractionConfig) -> Self {
        Self {
            source,
            summarizer,
            config,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Twittable sentences of the article at `url`, best first
    pub async fn get_twittable_sentences(&self, url: &str) -> Result<Vec<String>, ExtractError> {
        Ok(self.extract(url).await?.sentences)
    }

    /// Like [`get_twittable_sentences`](Self::get_twittable_sentences), keeping the article title
    pub async fn extract(&self, url: &str) -> Result<TwittableSentences, ExtractError> {
        let article = self.fetch_with_retries(url).await?;
        let sentences = self.twittable_from_text(&article.text)?;

        info!(
            url,
            title = %article.title,
            sentences = sentences.len(),
            "Extracted twittable sentences"
        );
        Ok(TwittableSentences {
            title: article.title,
            sentences,
        })
    }

    /// Summarize already-fetched text and keep the sentences short enough to post.
    /// An article with no short sentences yields an empty list, not an error.
    pub fn twittable_from_text(&self, text: &str) -> Result<Vec<String>, SummarizeError> {
        let summary = self
            .summarizer
            .summarize_up_to(text, self.config.summary_length)?;
        let summarized = summary.len();

        let sentences = filter_twittable(summary.into_texts(), self.config.max_twittable_length);
        debug!(
            summarized,
            twittable = sentences.len(),
            "Applied twittable length filter"
        );
        Ok(sentences)
    }

    async fn fetch_with_retries(&self, url: &str) -> Result<Article, FetchError> {
        let attempts = self.config.fetch_attempts.max(1);
        let mut attempt = 1;
        loop {
            match self.source.fetch(url).await {
                Ok(article) => return Ok(article),
                Err(e) if attempt < attempts => {
                    warn!(url, attempt, attempts, error = %e, "Article fetch failed, retrying");
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Keep sentences strictly shorter than `max_length` characters, preserving order
pub fn filter_twittable(sentences: Vec<String>, max_length: usize) -> Vec<String> {
    sentences
        .into_iter()
        .filter(|sentence| char_length(sentence) < max_length)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extraction_config() {
        let config = ExtractionConfig::default();
        assert_eq!(config.summary_length, 5);
        assert_eq!(config.max_twittable_length, 140);
        assert_eq!(config.fetch_attempts, 1);
    }

    #[test]
    fn test_filter_twittable_is_strict() {
        let exact = "x".repeat(140);
        let short = "y".repeat(139);
        let kept = filter_twittable(vec![exact, short.clone(), "z".repeat(200)], 140);
        assert_eq!(kept, vec![short]);
    }

    #[test]
    fn test_filter_twittable_counts_characters() {
        let accented = "é".repeat(100);
        assert_eq!(accented.len(), 200);
        assert_eq!(filter_twittable(vec![accented.clone()], 140), vec![accented]);
    }

    #[test]
    fn test_filter_twittable_empty() {
        assert!(filter_twittable(Vec::new(), 140).is_empty());
    }
}
