//! The extracted outline: the sole externally persisted artifact.

use serde::{Deserialize, Serialize};

/// A single heading in the extracted outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Heading level, formatted as "H1", "H2", ...
    pub level: String,
    /// Heading text
    pub text: String,
    /// 1-based page number
    pub page: u32,
}

impl OutlineEntry {
    /// Create an entry from a 1-based level ordinal.
    pub fn new(level: usize, text: impl Into<String>, page: u32) -> Self {
        Self {
            level: format!("H{level}"),
            text: text.into(),
            page,
        }
    }
}

/// The extracted document outline.
///
/// Entries are ordered non-decreasingly by page; same-page entries keep
/// their original document order. Serializes as
/// `{"title": ..., "outline": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Outline {
    /// Derived document title
    pub title: String,
    /// Ordered heading entries
    #[serde(rename = "outline")]
    pub entries: Vec<OutlineEntry>,
}

impl Outline {
    /// Create an outline with a title and no entries.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Whether any headings were found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of heading entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
