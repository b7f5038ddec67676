//! Raster OCR provider interface.
//!
//! For pages with too little extractable text, a rasterizing OCR engine
//! can supply recognized lines instead. The engine itself lives outside
//! this crate; implementations adapt it to [`RasterOcrProvider`] and the
//! OCR state is constructed explicitly and passed in, never held in a
//! module-level singleton.

use crate::error::Result;
use crate::model::{BoundingBox, TextFragment};

/// A recognized text line as returned by an OCR engine.
#[derive(Debug, Clone)]
pub struct OcrLine {
    /// Recognized text
    pub text: String,
    /// Position in page coordinates (already scaled from raster space)
    pub bbox: BoundingBox,
    /// Recognition confidence in [0, 1]
    pub confidence: f32,
}

impl OcrLine {
    /// Create a new OCR line.
    pub fn new(text: impl Into<String>, bbox: BoundingBox, confidence: f32) -> Self {
        Self {
            text: text.into(),
            bbox,
            confidence,
        }
    }
}

/// Abstract interface for rasterize-and-recognize providers.
pub trait RasterOcrProvider {
    /// Rasterize one page and return the recognized lines.
    fn recognize_page(&mut self, page_index: usize) -> Result<Vec<OcrLine>>;
}

/// Adapt OCR lines into pipeline fragments.
///
/// Lines below the confidence floor are discarded, and the line's bounding
/// box height stands in for the font size (OCR engines report no
/// typography). Boldness is unknowable from a raster, so it is left false.
pub fn ocr_lines_to_fragments(
    lines: Vec<OcrLine>,
    page_index: usize,
    min_confidence: f32,
) -> Vec<TextFragment> {
    lines
        .into_iter()
        .filter(|line| line.confidence >= min_confidence && !line.text.trim().is_empty())
        .map(|line| {
            let font_size = line.bbox.height();
            TextFragment::new(line.text, line.bbox, page_index, font_size, false)
        })
        .collect()
}
