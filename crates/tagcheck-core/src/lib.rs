//! Selector checks against HTML documents.
//!
//! # Scope
//!
//! This crate provides:
//! - **Checks Loading** - read a JSON array of selectors and sort it
//! - **Document Loading** - read a local file or fetch a URL
//! - **Evaluation** - parse the document and test every selector for presence
//! - **Reporting** - print the selector → presence map as indented JSON
//!
//! The whole pipeline is also available as [`check`], [`check_html_file`] and
//! [`check_html_url`].

pub mod checks;
pub mod error;
pub mod evaluate;
pub mod report;
pub mod source;

pub use checks::ChecksList;
pub use error::{CheckError, Result};
pub use evaluate::{Document, ResultMap, evaluate};
pub use report::{present, to_pretty_json};
pub use source::{DocumentSource, RawHtml};

use std::path::Path;

/// Checks file used when none is given.
pub const DEFAULT_CHECKS_FILE: &str = "checks.json";

/// HTML file used when none is given.
pub const DEFAULT_HTML_FILE: &str = "index.html";

/// URL used when none is given. Empty means file mode.
pub const DEFAULT_URL: &str = "";

/// Load a document, load the checks, and evaluate every selector.
///
/// The document is fetched first and the checks file is read only once the
/// payload has arrived.
///
/// # Errors
///
/// Returns the first failure of the pipeline: a document that cannot be read
/// or fetched, a checks file that cannot be read or parsed, or an invalid
/// selector.
pub async fn check(source: &DocumentSource, checks_path: &Path) -> Result<ResultMap> {
    let raw = source.fetch().await?;
    let checks = ChecksList::load(checks_path)?;
    evaluate(&raw, &checks)
}

/// Check a local HTML file against a checks file.
///
/// # Errors
///
/// See [`check`].
pub async fn check_html_file(
    html_path: impl AsRef<Path>,
    checks_path: impl AsRef<Path>,
) -> Result<ResultMap> {
    let source = DocumentSource::File(html_path.as_ref().to_path_buf());
    check(&source, checks_path.as_ref()).await
}

/// Check the document served at `url` against a checks file.
///
/// # Errors
///
/// See [`check`].
pub async fn check_html_url(url: &str, checks_path: impl AsRef<Path>) -> Result<ResultMap> {
    let source = DocumentSource::Url(url.to_string());
    check(&source, checks_path.as_ref()).await
}
