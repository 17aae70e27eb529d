pub mod article;
pub mod config;
pub mod error;
pub mod extraction;
pub mod summarizer;
pub mod tokenizer;

// Re-export main types for convenient access
pub use article::{Article, ArticleSource, FetchConfig, HttpArticleSource};
pub use config::AppConfig;
pub use error::{ConfigError, ExtractError, FetchError, SummarizeError};
pub use extraction::{
    filter_twittable, ExtractionConfig, TwittableExtractor, TwittableSentences,
    DEFAULT_SUMMARY_LENGTH, DEFAULT_TWITTABLE_LENGTH,
};
pub use summarizer::{
    FrequencySummarizer, FrequencyTable, RankedSentence, RankingTable, Sentence,
    SummarizerConfig, SummaryResult,
};
pub use tokenizer::{CommonWords, EnglishTokenizer, LanguageTokenizer};
