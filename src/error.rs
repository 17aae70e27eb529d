use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by the frequency summarizer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummarizeError {
    #[error("invalid summarizer configuration: {0}")]
    InvalidConfiguration(String),

    #[error(
        "requested {requested} summary sentences but only {available} candidate sentences are available"
    )]
    InvalidSummaryLength { requested: usize, available: usize },

    #[error("no scorable words in {candidates} candidate sentences")]
    DegenerateFrequencyTable { candidates: usize },
}

/// Failures reported by an article source
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("{url} answered with HTTP status {status}")]
    Status { url: String, status: u16 },

    #[error("Parsing failed: {0}")]
    Parse(String),

    #[error("Response from {url} exceeds {limit} bytes")]
    BodyTooLarge { url: String, limit: u64 },

    #[error("No article text found at {url}")]
    EmptyArticle { url: String },
}

/// Failures of the URL-to-sentences facade
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Summarize(#[from] SummarizeError),
}

/// Failures loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] SummarizeError),
}
