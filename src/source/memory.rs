//! In-memory fragment source, including JSON fragment-dump loading.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{BoundingBox, TextFragment};

use super::TextFragmentSource;

/// A [`TextFragmentSource`] over fragments already held in memory.
///
/// Used directly in tests, and by the CLI after deserializing a fragment
/// dump produced by an external extraction tool.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pages: Vec<Vec<TextFragment>>,
    title: Option<String>,
}

/// Serialized shape of a fragment dump: an optional document title plus
/// per-page fragment lists. The page index of each fragment is implied by
/// its position in `pages`.
#[derive(Debug, Serialize, Deserialize)]
struct FragmentDump {
    #[serde(default)]
    title: Option<String>,
    pages: Vec<Vec<DumpFragment>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct DumpFragment {
    text: String,
    bbox: BoundingBox,
    font_size: f32,
    #[serde(default)]
    is_bold: bool,
}

impl MemorySource {
    /// Create a source from per-page fragment lists.
    pub fn new(pages: Vec<Vec<TextFragment>>) -> Self {
        Self { pages, title: None }
    }

    /// Attach document title metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Load a fragment dump from JSON bytes.
    pub fn from_json_slice(data: &[u8]) -> Result<Self> {
        let dump: FragmentDump = serde_json::from_slice(data)?;
        Ok(Self::from_dump(dump))
    }

    /// Load a fragment dump from a reader.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let dump: FragmentDump = serde_json::from_reader(reader)?;
        Ok(Self::from_dump(dump))
    }

    fn from_dump(dump: FragmentDump) -> Self {
        let pages = dump
            .pages
            .into_iter()
            .enumerate()
            .map(|(page_index, frags)| {
                frags
                    .into_iter()
                    .filter(|f| !f.text.trim().is_empty())
                    .map(|f| TextFragment::new(f.text, f.bbox, page_index, f.font_size, f.is_bold))
                    .collect()
            })
            .collect();
        Self {
            pages,
            title: dump.title.filter(|t| !t.is_empty()),
        }
    }
}

impl TextFragmentSource for MemorySource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn title(&self) -> Option<String> {
        self.title.clone()
    }

    fn page_fragments(&mut self, page_index: usize) -> Result<Vec<TextFragment>> {
        Ok(self.pages.get(page_index).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_slice() {
        let json = br#"{
            "title": "Sample",
            "pages": [
                [
                    {"text": "Heading", "bbox": {"x0": 10.0, "y0": 50.0, "x1": 200.0, "y1": 74.0}, "font_size": 24.0, "is_bold": true},
                    {"text": "Body text", "bbox": {"x0": 10.0, "y0": 90.0, "x1": 300.0, "y1": 102.0}, "font_size": 12.0}
                ],
                []
            ]
        }"#;

        let mut source = MemorySource::from_json_slice(json).unwrap();
        assert_eq!(source.page_count(), 2);
        assert_eq!(source.title(), Some("Sample".to_string()));

        let frags = source.page_fragments(0).unwrap();
        assert_eq!(frags.len(), 2);
        assert_eq!(frags[0].text, "Heading");
        assert!(frags[0].is_bold);
        assert_eq!(frags[1].page_index, 0);
        assert!(!frags[1].is_bold);

        assert!(source.page_fragments(1).unwrap().is_empty());
    }

    #[test]
    fn test_blank_fragments_dropped() {
        let json = br#"{
            "pages": [[
                {"text": "   ", "bbox": {"x0": 0.0, "y0": 0.0, "x1": 1.0, "y1": 1.0}, "font_size": 12.0}
            ]]
        }"#;
        let mut source = MemorySource::from_json_slice(json).unwrap();
        assert!(source.title().is_none());
        assert!(source.page_fragments(0).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(MemorySource::from_json_slice(b"not json").is_err());
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let mut source = MemorySource::new(vec![vec![]]);
        assert!(source.page_fragments(5).unwrap().is_empty());
    }
}
