//! Raw positioned text fragments, as reported by an extraction provider.

use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in page coordinates.
///
/// `y` grows downward: `y0` is the top edge, `y1` the bottom edge, so the
/// vertical gap between a line and the one below it is `next.y0 - prev.y1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub y1: f32,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// The smallest box containing both `self` and `other`.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Box height. OCR providers use this as the font-size approximation.
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }
}

/// One line of text as detected by an extraction provider.
///
/// Both provider variants (native page-content parsing and raster OCR)
/// emit this same shape. Fragments are immutable once created and are
/// consumed exactly once by the block consolidator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextFragment {
    /// The text content (non-empty after trimming)
    pub text: String,
    /// Position on the page
    pub bbox: BoundingBox,
    /// Zero-based page index
    pub page_index: usize,
    /// Font size in whatever unit the provider reports (typically points)
    pub font_size: f32,
    /// Whether the fragment's font appears to be bold
    pub is_bold: bool,
}

impl TextFragment {
    /// Create a new fragment. The text is trimmed on construction.
    pub fn new(
        text: impl Into<String>,
        bbox: BoundingBox,
        page_index: usize,
        font_size: f32,
        is_bold: bool,
    ) -> Self {
        Self {
            text: text.into().trim().to_string(),
            bbox,
            page_index,
            font_size,
            is_bold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_union() {
        let a = BoundingBox::new(10.0, 20.0, 100.0, 32.0);
        let b = BoundingBox::new(5.0, 34.0, 80.0, 46.0);
        let u = a.union(&b);
        assert_eq!(u, BoundingBox::new(5.0, 20.0, 100.0, 46.0));
    }

    #[test]
    fn test_bbox_height() {
        let b = BoundingBox::new(0.0, 100.0, 50.0, 118.0);
        assert!((b.height() - 18.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_fragment_trims_text() {
        let frag = TextFragment::new(
            "  Chapter One \n",
            BoundingBox::new(0.0, 0.0, 10.0, 10.0),
            0,
            12.0,
            false,
        );
        assert_eq!(frag.text, "Chapter One");
    }
}
