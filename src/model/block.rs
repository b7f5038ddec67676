//! Semantic blocks and heading candidates.

use super::{BoundingBox, TextFragment};

/// A text fragment, or a merge of consecutive same-style fragments that
/// are visually one unit (a heading or a paragraph line).
///
/// All constituents of a merged block share the same page; the merged text
/// is space-joined in reading order, the bounding box is the union, and
/// font size / boldness come from the first constituent.
#[derive(Debug, Clone)]
pub struct SemanticBlock {
    /// Space-joined text of all constituents
    pub text: String,
    /// Union bounding box
    pub bbox: BoundingBox,
    /// Zero-based page index
    pub page_index: usize,
    /// Font size of the first constituent
    pub font_size: f32,
    /// Boldness of the first constituent
    pub is_bold: bool,
}

impl SemanticBlock {
    /// Build a block from a single fragment.
    pub fn from_fragment(frag: TextFragment) -> Self {
        Self {
            text: frag.text,
            bbox: frag.bbox,
            page_index: frag.page_index,
            font_size: frag.font_size,
            is_bold: frag.is_bold,
        }
    }

    /// Merge another fragment into this block.
    pub fn absorb(&mut self, frag: &TextFragment) {
        if !self.text.is_empty() && !frag.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(&frag.text);
        self.bbox = self.bbox.union(&frag.bbox);
    }

    /// Number of whitespace-separated tokens.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Character count of the text.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// A semantic block accepted as a structural heading, with its assigned
/// level ordinal (1-based; 1 is the highest-ranking level).
#[derive(Debug, Clone)]
pub struct HeadingCandidate {
    /// The underlying block
    pub block: SemanticBlock,
    /// 1-based level ordinal ("H1" = 1)
    pub level: usize,
}
