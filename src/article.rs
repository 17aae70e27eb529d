// WHY: the only I/O in the crate; everything downstream of `fetch` is pure text
// processing, so the source sits behind a trait the facade is generic over

use std::future::Future;
use std::time::Duration;

use reqwest::Url;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::FetchError;
use crate::tokenizer::normalize_whitespace;

/// Downloaded article
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    /// Body paragraphs separated by blank lines
    pub text: String,
}

/// Anything that can turn a URL into an article
pub trait ArticleSource {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Article, FetchError>> + Send;
}

/// Largest page body the HTTP source will buffer
pub const DEFAULT_MAX_BODY_BYTES: u64 = 5 * 1024 * 1024;

/// Configuration for the HTTP article source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FetchConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Responses larger than this are rejected before parsing
    pub max_body_bytes: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: format!("twittable/{}", env!("CARGO_PKG_VERSION")),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Fetches a page over HTTP and extracts its title and body paragraphs
pub struct HttpArticleSource {
    client: reqwest::Client,
    max_body_bytes: u64,
}

impl HttpArticleSource {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            max_body_bytes: config.max_body_bytes,
        })
    }
}

impl ArticleSource for HttpArticleSource {
    async fn fetch(&self, url: &str) -> Result<Article, FetchError> {
        let parsed = parse_article_url(url)?;
        debug!("Fetching article: {}", parsed);

        let response = self.client.get(parsed.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: parsed.to_string(),
                status: status.as_u16(),
            });
        }

        let html = read_body(response, &parsed, self.max_body_bytes).await?;
        let article = extract_article(&html)?;
        if article.text.trim().is_empty() {
            return Err(FetchError::EmptyArticle {
                url: parsed.to_string(),
            });
        }

        info!(
            url = %parsed,
            title = %article.title,
            bytes = html.len(),
            "Fetched article"
        );
        Ok(article)
    }
}

/// Buffer the response body, failing as soon as it is known to exceed `limit`
async fn read_body(
    mut response: reqwest::Response,
    url: &Url,
    limit: u64,
) -> Result<String, FetchError> {
    let too_large = || FetchError::BodyTooLarge {
        url: url.to_string(),
        limit,
    };

    if response.content_length().is_some_and(|declared| declared > limit) {
        return Err(too_large());
    }

    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if (body.len() + chunk.len()) as u64 > limit {
            return Err(too_large());
        }
        body.extend_from_slice(&chunk);
    }
    Ok(String::from_utf8_lossy(&body).into_owned())
}

/// Parse `url`, assuming `http://` when no scheme is given ("www.example.com/a1")
pub fn parse_article_url(url: &str) -> Result<Url, FetchError> {
    let trimmed = url.trim();
    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };

    let parsed = Url::parse(&with_scheme).map_err(|e| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(FetchError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme {scheme}"),
        }),
    }
}

/// Pull the title and body paragraphs out of an HTML page.
///
/// Title: `og:title`, then `<title>`, then the first `<h1>`. Body: the `<p>`
/// elements inside `<article>`, or every `<p>` when the page has no article element.
pub fn extract_article(html: &str) -> Result<Article, FetchError> {
    let document = Html::parse_document(html);

    let og_title = selector(r#"meta[property="og:title"]"#)?;
    let title_tag = selector("title")?;
    let heading = selector("h1")?;
    let article_paragraphs = selector("article p")?;
    let paragraphs = selector("p")?;

    let title = document
        .select(&og_title)
        .filter_map(|meta| meta.value().attr("content"))
        .map(normalize_whitespace)
        .find(|title| !title.is_empty())
        .or_else(|| first_text(&document, &title_tag))
        .or_else(|| first_text(&document, &heading))
        .unwrap_or_default();

    let mut body = collect_paragraphs(document.select(&article_paragraphs));
    if body.is_empty() {
        body = collect_paragraphs(document.select(&paragraphs));
    }

    debug!(paragraphs = body.len(), "Extracted article body");
    Ok(Article {
        title,
        text: body.join("\n\n"),
    })
}

fn selector(css: &str) -> Result<Selector, FetchError> {
    Selector::parse(css).map_err(|e| FetchError::Parse(format!("selector {css}: {e}")))
}

fn element_text(element: ElementRef<'_>) -> String {
    normalize_whitespace(&element.text().collect::<String>())
}

fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .map(element_text)
        .find(|text| !text.is_empty())
}

fn collect_paragraphs<'a>(elements: impl Iterator<Item = ElementRef<'a>>) -> Vec<String> {
    elements
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEWS_PAGE: &str = r#"<html>
<head>
  <title>Council votes | Daily Bugle</title>
  <meta property="og:title" content="Council approves new park">
</head>
<body>
  <nav><p>Home</p></nav>
  <article>
    <h1>Council approves new park</h1>
    <p>The city council voted on
       Tuesday to build a park.</p>
    <p>  </p>
    <p>Residents <b>cheered</b> the decision.</p>
  </article>
  <footer><p>Copyright</p></footer>
</body>
</html>"#;

    #[test]
    fn test_extract_article_prefers_og_title_and_article_body() {
        let article = extract_article(NEWS_PAGE).unwrap();
        assert_eq!(article.title, "Council approves new park");
        assert_eq!(
            article.text,
            "The city council voted on Tuesday to build a park.\n\nResidents cheered the decision."
        );
    }

    #[test]
    fn test_extract_article_falls_back_to_all_paragraphs_and_title_tag() {
        let html = "<html><head><title> Plain page </title></head>\
                    <body><p>First paragraph.</p><div><p>Second paragraph.</p></div></body></html>";
        let article = extract_article(html).unwrap();
        assert_eq!(article.title, "Plain page");
        assert_eq!(article.text, "First paragraph.\n\nSecond paragraph.");
    }

    #[test]
    fn test_extract_article_heading_title_and_empty_body() {
        let article =
            extract_article("<html><body><h1>Only a heading</h1></body></html>").unwrap();
        assert_eq!(article.title, "Only a heading");
        assert!(article.text.is_empty());
    }

    #[test]
    fn test_parse_article_url() {
        assert_eq!(
            parse_article_url("www.example.com/article1").unwrap().as_str(),
            "http://www.example.com/article1"
        );
        assert_eq!(
            parse_article_url("https://example.com/news").unwrap().as_str(),
            "https://example.com/news"
        );
        assert!(matches!(
            parse_article_url("ftp://example.com/file"),
            Err(FetchError::InvalidUrl { .. })
        ));
        assert!(matches!(
            parse_article_url("http://"),
            Err(FetchError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_http_source_builds_from_default_config() {
        assert!(HttpArticleSource::new(&FetchConfig::default()).is_ok());
    }
}
