//! Checks file loading.
//!
//! A checks file is a JSON array of selector strings:
//!
//! ```json
//! ["h1", "#header a", ".nav"]
//! ```
//!
//! Selectors are sorted on load so that results always come out in the same
//! order no matter how the file was written.

use std::fs;
use std::iter::Map;
use std::path::Path;
use std::slice;

use tagcheck_common::warning::warn_once;

use crate::error::{CheckError, Result};

/// An ordered list of selectors, sorted ascending by plain string order.
///
/// Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecksList {
    selectors: Vec<String>,
}

impl ChecksList {
    /// Build a sorted list from any sequence of selectors.
    #[must_use]
    pub fn new<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selectors: Vec<String> = selectors.into_iter().map(Into::into).collect();
        selectors.sort();
        Self { selectors }
    }

    /// Parse checks from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not a JSON array of strings.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let selectors: Vec<String> = serde_json::from_str(text)?;
        Ok(Self::new(selectors))
    }

    /// Read and parse the checks file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::NotFound`] if the file is gone,
    /// [`CheckError::Io`] if it cannot be read, and [`CheckError::Parse`] if
    /// its content is not a JSON array of strings.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| CheckError::io(path, e))?;
        let checks = Self::from_json(&text).map_err(|source| CheckError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        checks.warn_suspicious(path);
        Ok(checks)
    }

    /// Selectors in sorted order.
    #[must_use]
    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    /// Iterate over the selectors in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.into_iter()
    }

    /// Number of selectors, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    /// Whether the list holds no selectors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    fn warn_suspicious(&self, path: &Path) {
        if self.is_empty() {
            warn_once("checks", &format!("{} lists no selectors", path.display()));
        }

        // Sorted, so duplicates are adjacent.
        for pair in self.selectors.windows(2) {
            if pair[0] == pair[1] {
                warn_once(
                    "checks",
                    &format!("selector '{}' is listed more than once", pair[0]),
                );
            }
        }
    }
}

impl<'a> IntoIterator for &'a ChecksList {
    type Item = &'a str;
    type IntoIter = Map<slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.selectors.iter().map(String::as_str as fn(&'a String) -> &'a str)
    }
}
