//! HTTP fetch utilities for tagcheck.
//!
//! Provides a single-shot async HTTP GET used by the document source.
//! There is no timeout or retry layer: one request is issued and
//! its outcome is final.

use reqwest::StatusCode;

/// User-Agent header sent with all requests.
const USER_AGENT: &str = concat!("tagcheck/", env!("CARGO_PKG_VERSION"));

/// A fetched response body together with its HTTP status.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Status line of the response. Non-success statuses still carry a body.
    pub status: StatusCode,
    /// Response body, decoded using the charset the server declared.
    pub body: String,
}

impl FetchedPage {
    /// Whether the server answered with a 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Fetch a URL and return its status and body as text.
///
/// Redirects follow the transport's default policy.
///
/// # Errors
///
/// Returns the transport error if the HTTP client cannot be created, the URL
/// cannot be parsed, the request fails, or the body cannot be decoded.
pub async fn fetch_text(url: &str) -> Result<FetchedPage, reqwest::Error> {
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

    let response = client.get(url).send().await?;
    let status = response.status();
    let body = response.text().await?;

    Ok(FetchedPage { status, body })
}
