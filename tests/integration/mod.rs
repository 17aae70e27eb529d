// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests
#![allow(dead_code)]

pub mod fixtures;

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use twittable::{
    Article, ArticleSource, FetchError, FrequencySummarizer, SummarizerConfig,
};

/// In-memory article source keyed by URL; unknown URLs answer 404
#[derive(Default)]
pub struct StaticArticleSource {
    pages: HashMap<String, Article>,
}

impl StaticArticleSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, title: &str, text: &str) -> Self {
        self.pages.insert(
            url.to_string(),
            Article {
                title: title.to_string(),
                text: text.to_string(),
            },
        );
        self
    }
}

impl ArticleSource for StaticArticleSource {
    async fn fetch(&self, url: &str) -> Result<Article, FetchError> {
        self.pages.get(url).cloned().ok_or_else(|| FetchError::Status {
            url: url.to_string(),
            status: 404,
        })
    }
}

/// Fails with HTTP 503 a fixed number of times before serving its article
pub struct FlakyArticleSource {
    failures_left: AtomicU32,
    calls: AtomicU32,
    article: Article,
}

impl FlakyArticleSource {
    pub fn new(failures: u32, text: &str) -> Self {
        Self {
            failures_left: AtomicU32::new(failures),
            calls: AtomicU32::new(0),
            article: Article {
                title: "Flaky".to_string(),
                text: text.to_string(),
            },
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ArticleSource for FlakyArticleSource {
    async fn fetch(&self, url: &str) -> Result<Article, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let remaining = self.failures_left.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures_left.store(remaining - 1, Ordering::SeqCst);
            return Err(FetchError::Status {
                url: url.to_string(),
                status: 503,
            });
        }
        Ok(self.article.clone())
    }
}

/// English summarizer with default thresholds
pub fn default_summarizer() -> FrequencySummarizer {
    FrequencySummarizer::english(SummarizerConfig::default()).expect("Failed to build summarizer")
}

/// English summarizer with a custom candidacy cutoff
pub fn summarizer_with_max_length(max_sentence_length: usize) -> FrequencySummarizer {
    let config = SummarizerConfig {
        max_sentence_length,
        ..Default::default()
    };
    FrequencySummarizer::english(config).expect("Failed to build summarizer")
}
