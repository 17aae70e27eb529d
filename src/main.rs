use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};

use twittable::{
    AppConfig, FrequencySummarizer, HttpArticleSource, TwittableExtractor, TwittableSentences,
};

#[derive(Parser, Debug)]
#[command(name = "twittable")]
#[command(about = "Extract tweet-length summary sentences from a news article")]
#[command(version)]
struct Args {
    /// Article URL; a missing scheme defaults to http://
    #[arg(required_unless_present = "text_file")]
    url: Option<String>,

    /// Summarize a local text file instead of fetching a URL
    #[arg(long, conflicts_with = "url")]
    text_file: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sentences requested from the summarizer
    #[arg(long)]
    summary_length: Option<usize>,

    /// Words scoring at or below this normalized frequency are ignored
    #[arg(long)]
    min_frequency: Option<f64>,

    /// Words scoring at or above this normalized frequency are ignored
    #[arg(long)]
    max_frequency: Option<f64>,

    /// Sentences this long (in characters) or longer are never ranked
    #[arg(long)]
    max_sentence_length: Option<usize>,

    /// Total attempts when fetching the article
    #[arg(long)]
    fetch_attempts: Option<u32>,

    /// Print a JSON document instead of one sentence per line
    #[arg(long)]
    json: bool,

    /// Log at debug level
    #[arg(long)]
    verbose: bool,
}

impl Args {
    /// Config file values with command-line overrides applied
    fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(summary_length) = self.summary_length {
            config.extraction.summary_length = summary_length;
        }
        if let Some(min_frequency) = self.min_frequency {
            config.summarizer.min_frequency = min_frequency;
        }
        if let Some(max_frequency) = self.max_frequency {
            config.summarizer.max_frequency = max_frequency;
        }
        if let Some(max_sentence_length) = self.max_sentence_length {
            config.summarizer.max_sentence_length = max_sentence_length;
        }
        if let Some(fetch_attempts) = self.fetch_attempts {
            config.extraction.fetch_attempts = fetch_attempts;
        }

        config.summarizer.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // WHY: stdout carries the sentences, so structured logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    let config = args.resolve_config()?;
    let summarizer = FrequencySummarizer::english(config.summarizer.clone())?;
    let source = HttpArticleSource::new(&config.fetch)?;
    let extractor = TwittableExtractor::new(source, summarizer, config.extraction.clone());

    let result = match (&args.text_file, &args.url) {
        (Some(path), _) => {
            let text = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read text file {}", path.display()))?;
            TwittableSentences {
                title: String::new(),
                sentences: extractor.twittable_from_text(&text)?,
            }
        }
        (None, Some(url)) => extractor.extract(url).await?,
        (None, None) => anyhow::bail!("Either a URL or --text-file is required"),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for sentence in &result.sentences {
            println!("{sentence}");
        }
    }

    info!(sentences = result.sentences.len(), "Done");
    Ok(())
}
