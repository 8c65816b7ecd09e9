//! Selector evaluation against a parsed document.
//!
//! Parsing is lenient in the same way a browser is: unclosed tags, stray end
//! tags and missing `<html>`/`<body>` wrappers are repaired by the HTML5 tree
//! builder before any selector runs.

use std::collections::BTreeMap;

use scraper::{Html, Selector};
use serde::Serialize;

use crate::checks::ChecksList;
use crate::error::{CheckError, Result};
use crate::source::RawHtml;

/// A parsed, queryable HTML document.
#[derive(Debug)]
pub struct Document {
    tree: Html,
}

impl Document {
    /// Parse raw HTML into a document tree.
    #[must_use]
    pub fn parse(raw: &RawHtml) -> Self {
        Self {
            tree: Html::parse_document(raw.as_str()),
        }
    }

    /// Whether at least one element in the document matches `selector`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Selector`] if `selector` is not valid CSS.
    pub fn matches(&self, selector: &str) -> Result<bool> {
        let compiled = Selector::parse(selector).map_err(|err| CheckError::Selector {
            selector: selector.to_string(),
            message: err.to_string(),
        })?;
        Ok(self.tree.select(&compiled).next().is_some())
    }

    /// Evaluate every selector of `checks` in order.
    ///
    /// # Errors
    ///
    /// Stops at the first invalid selector and returns [`CheckError::Selector`].
    pub fn evaluate(&self, checks: &ChecksList) -> Result<ResultMap> {
        let mut results = ResultMap::default();
        for selector in checks {
            let present = self.matches(selector)?;
            results.record(selector, present);
        }
        Ok(results)
    }
}

/// Selector → presence, ordered by selector.
///
/// Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultMap {
    entries: BTreeMap<String, bool>,
}

impl ResultMap {
    /// Presence recorded for `selector`, if it was checked.
    #[must_use]
    pub fn get(&self, selector: &str) -> Option<bool> {
        self.entries.get(selector).copied()
    }

    /// All results in selector order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(selector, present)| (selector.as_str(), *present))
    }

    /// Number of distinct selectors checked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no selector was checked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every checked selector was found.
    #[must_use]
    pub fn all_present(&self) -> bool {
        self.entries.values().all(|present| *present)
    }

    // Duplicate selectors overwrite with the same value.
    fn record(&mut self, selector: &str, present: bool) {
        let _ = self.entries.insert(selector.to_string(), present);
    }
}

/// Parse `raw` and evaluate every selector of `checks` against it.
///
/// # Errors
///
/// Returns [`CheckError::Selector`] for the first invalid selector.
pub fn evaluate(raw: &RawHtml, checks: &ChecksList) -> Result<ResultMap> {
    Document::parse(raw).evaluate(checks)
}
