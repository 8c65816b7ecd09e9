//! Document loading from a local file or a URL.

use std::fmt;
use std::path::{Path, PathBuf};

use tagcheck_common::net::fetch_text;
use tagcheck_common::warning::warn_once;

use crate::error::{CheckError, Result};

/// Raw HTML text as loaded, before parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawHtml(String);

impl RawHtml {
    /// Wrap already-loaded HTML text.
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// The HTML text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode bytes read from disk. Invalid UTF-8 is replaced, not rejected.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(String::from_utf8_lossy(bytes).into_owned())
    }
}

impl From<String> for RawHtml {
    fn from(html: String) -> Self {
        Self(html)
    }
}

impl From<&str> for RawHtml {
    fn from(html: &str) -> Self {
        Self(html.to_string())
    }
}

/// Where the document under test comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// A local HTML file.
    File(PathBuf),
    /// A remote document fetched with a single HTTP GET.
    Url(String),
}

impl DocumentSource {
    /// Pick the source from the two CLI inputs.
    ///
    /// A non-empty `url` wins over `file`.
    #[must_use]
    pub fn select(file: impl Into<PathBuf>, url: &str) -> Self {
        if url.is_empty() {
            Self::File(file.into())
        } else {
            Self::Url(url.to_string())
        }
    }

    /// Whether this source is fetched over the network.
    #[must_use]
    pub const fn is_url(&self) -> bool {
        matches!(self, Self::Url(_))
    }

    /// Load the document. Performs exactly one disk read or one HTTP request.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::NotFound`] or [`CheckError::Io`] if the file
    /// cannot be read, and [`CheckError::Network`] if the request fails at the
    /// transport level. An HTTP error status is not a failure: its body is
    /// returned and a warning is printed.
    pub async fn fetch(&self) -> Result<RawHtml> {
        match self {
            Self::File(path) => read_file(path).await,
            Self::Url(url) => fetch_url(url).await,
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

async fn read_file(path: &Path) -> Result<RawHtml> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| CheckError::io(path, e))?;
    Ok(RawHtml::from_bytes(&bytes))
}

async fn fetch_url(url: &str) -> Result<RawHtml> {
    let page = fetch_text(url).await.map_err(|source| CheckError::Network {
        url: url.to_string(),
        source,
    })?;

    if !page.is_success() {
        warn_once(
            "fetch",
            &format!("{url} answered {}, checking the returned body anyway", page.status),
        );
    }

    Ok(RawHtml(page.body))
}
