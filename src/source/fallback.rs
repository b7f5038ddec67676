//! Native extraction with raster OCR fallback for sparse pages.

use crate::error::Result;
use crate::model::TextFragment;

use super::ocr::{ocr_lines_to_fragments, RasterOcrProvider};
use super::TextFragmentSource;

/// Routes each page to native extraction first, falling back to OCR when
/// the page yields fewer extractable characters than the threshold.
///
/// The OCR provider is owned by this source and injected at construction,
/// so pipelines without an OCR dependency simply use the inner source
/// directly. One OCR attempt is made per sparse page; if it fails, the
/// sparse native fragments are kept and the failure is logged.
pub struct FallbackSource<S, O> {
    inner: S,
    ocr: O,
    char_threshold: usize,
    min_confidence: f32,
}

impl<S, O> FallbackSource<S, O>
where
    S: TextFragmentSource,
    O: RasterOcrProvider,
{
    /// Compose a native source with an OCR provider.
    ///
    /// `char_threshold` is the minimum number of extractable characters on
    /// a page before OCR is attempted; `min_confidence` is the floor below
    /// which recognized lines are discarded.
    pub fn new(inner: S, ocr: O, char_threshold: usize, min_confidence: f32) -> Self {
        Self {
            inner,
            ocr,
            char_threshold,
            min_confidence,
        }
    }
}

impl<S, O> TextFragmentSource for FallbackSource<S, O>
where
    S: TextFragmentSource,
    O: RasterOcrProvider,
{
    fn page_count(&self) -> usize {
        self.inner.page_count()
    }

    fn title(&self) -> Option<String> {
        self.inner.title()
    }

    fn page_fragments(&mut self, page_index: usize) -> Result<Vec<TextFragment>> {
        let native = self.inner.page_fragments(page_index)?;

        let char_count: usize = native.iter().map(|f| f.text.chars().count()).sum();
        if char_count >= self.char_threshold {
            return Ok(native);
        }

        log::debug!(
            "page {}: {} chars below threshold {}, attempting OCR",
            page_index + 1,
            char_count,
            self.char_threshold
        );

        match self.ocr.recognize_page(page_index) {
            Ok(lines) => Ok(ocr_lines_to_fragments(
                lines,
                page_index,
                self.min_confidence,
            )),
            Err(e) => {
                log::warn!(
                    "OCR failed for page {}, keeping {} native fragments: {}",
                    page_index + 1,
                    native.len(),
                    e
                );
                Ok(native)
            }
        }
    }
}
