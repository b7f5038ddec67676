//! Fragment source abstraction.
//!
//! Obtaining raw per-line text fragments from a document is delegated to
//! providers behind the [`TextFragmentSource`] trait, isolating the
//! extraction library (native parser, OCR engine) from the classification
//! logic. Two compositions are provided: [`MemorySource`] for in-memory
//! or deserialized fragments, and [`FallbackSource`] which routes sparse
//! pages to a raster OCR provider.

mod fallback;
mod memory;
mod ocr;

pub use fallback::FallbackSource;
pub use memory::MemorySource;
pub use ocr::{ocr_lines_to_fragments, OcrLine, RasterOcrProvider};

use crate::error::Result;
use crate::model::TextFragment;

/// Abstract interface for per-page fragment extraction.
///
/// Implementations yield, for each page, the fragments in document layout
/// order, or a declared failure for that page. A page failure is local:
/// the pipeline treats the page as contributing zero fragments and
/// continues with the rest of the document.
pub trait TextFragmentSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Document-level title metadata, if the source carries any.
    fn title(&self) -> Option<String> {
        None
    }

    /// Extract the fragments of one page, in layout order.
    fn page_fragments(&mut self, page_index: usize) -> Result<Vec<TextFragment>>;
}

/// Heuristic boldness check for providers that report font names rather
/// than a bold flag (e.g. "Helvetica-Bold", "ArialBlack", "HelvCondB").
pub fn font_name_is_bold(font_name: &str) -> bool {
    let name = font_name.to_lowercase();
    ["bold", "black", "heavy", "condb"]
        .iter()
        .any(|marker| name.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_name_is_bold() {
        assert!(font_name_is_bold("Helvetica-Bold"));
        assert!(font_name_is_bold("Arial Black"));
        assert!(font_name_is_bold("SomeFont-Heavy"));
        assert!(font_name_is_bold("HelvCondB"));
        assert!(!font_name_is_bold("Helvetica"));
        assert!(!font_name_is_bold("Times-Italic"));
    }
}
