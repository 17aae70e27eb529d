use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::article::FetchConfig;
use crate::error::ConfigError;
use crate::extraction::ExtractionConfig;
use crate::summarizer::SummarizerConfig;

/// File-backed configuration; every section and field is optional
///
/// ```toml
/// [summarizer]
/// min_frequency = 0.05
/// max_frequency = 0.95
/// max_sentence_length = 140
///
/// [extraction]
/// summary_length = 5
/// max_twittable_length = 140
/// fetch_attempts = 3
///
/// [fetch]
/// timeout_secs = 10
/// max_body_bytes = 2097152
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub summarizer: SummarizerConfig,
    pub extraction: ExtractionConfig,
    pub fetch: FetchConfig,
}

impl AppConfig {
    /// Read and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.summarizer.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SummarizeError;

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = AppConfig::from_toml_str(
            "[summarizer]\nmin_frequency = 0.05\n\n[extraction]\nfetch_attempts = 3\n",
        )
        .unwrap();
        assert_eq!(config.summarizer.min_frequency, 0.05);
        assert_eq!(config.summarizer.max_frequency, 0.9);
        assert_eq!(config.extraction.fetch_attempts, 3);
        assert_eq!(config.extraction.summary_length, 5);
        assert_eq!(config.fetch, FetchConfig::default());
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        let result = AppConfig::from_toml_str("[summarizer]\nmin_frequency = 0.95\n");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid(SummarizeError::InvalidConfiguration(_)))
        ));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = AppConfig::from_toml_str("[summarizer]\nmin_freq = 0.2\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }
}
