//! Turns raw user input into analyzable plain text.
//!
//! Input prefixed with `http` is treated as a URL: one GET, no retries,
//! paragraph text extracted from the response body. Anything else passes
//! through unchanged as literal text.

use scraper::{Html, Selector};
use thiserror::Error;

/// A failed URL fetch, kept distinct from resolved content so the caller
/// can decide whether to classify anything at all.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered, but not with 200.
    #[error("Error: Unable to fetch text from the provided URL.")]
    Status(reqwest::StatusCode),
    /// The request never completed: DNS, timeout, refused connection,
    /// malformed URL.
    #[error("Error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Resolve raw input into plain text. Literal text is returned unchanged;
/// URLs are fetched and reduced to their paragraph content.
pub async fn resolve(client: &reqwest::Client, raw_input: &str) -> Result<String, FetchError> {
    if !raw_input.starts_with("http") {
        return Ok(raw_input.to_string());
    }
    fetch_text_from_url(client, raw_input).await
}

/// Single-attempt GET; the shared client carries the request timeout.
async fn fetch_text_from_url(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if status != reqwest::StatusCode::OK {
        tracing::warn!(%url, %status, "URL fetch returned non-200 status");
        return Err(FetchError::Status(status));
    }

    let body = response.text().await?;
    Ok(extract_paragraph_text(&body))
}

/// Concatenate the text of every `<p>` element in document order, joined
/// by a single space. Headers, lists, and scripts are excluded.
pub fn extract_paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let selector = Selector::parse("p").unwrap();

    document
        .select(&selector)
        .map(|el| el.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
