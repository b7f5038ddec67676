//! Extraction options and heuristic tunables.

/// Tunables for the outline extraction pipeline.
///
/// Every threshold the heuristics depend on is carried here with its
/// documented default, so boundary behavior can be probed precisely in
/// tests instead of being baked into the algorithm.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Minimum number of extractable characters on a page before the OCR
    /// fallback is triggered (default 100).
    pub char_threshold: usize,

    /// Fraction of a block's font size required as vertical whitespace
    /// below it to confirm a heading (default 0.3).
    pub gap_threshold: f32,

    /// Fraction of the previous fragment's font size allowed as the
    /// vertical gap when merging consecutive lines into one semantic
    /// block (default 0.5).
    pub line_merge_threshold: f32,

    /// Maximum font-size difference (in provider units, typically points)
    /// between fragments merged into one block (default 1.0).
    pub size_merge_tolerance: f32,

    /// Multiplier over the average body size above which a block is
    /// exceptionally large and accepted regardless of length or trailing
    /// gap (default 1.8).
    pub large_size_ratio: f32,

    /// Multiplier over the average body size above which a short block
    /// qualifies as a heading candidate (default 1.15).
    pub moderate_size_ratio: f32,

    /// Maximum distance between a heading font size and a cluster's
    /// running average for the size to join that level (default 1.5).
    pub level_tolerance: f32,

    /// OCR lines with confidence below this floor are discarded before
    /// reaching the pipeline (default 0.8).
    pub min_ocr_confidence: f32,
}

impl ExtractOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the OCR fallback character threshold.
    pub fn with_char_threshold(mut self, chars: usize) -> Self {
        self.char_threshold = chars;
        self
    }

    /// Set the trailing-gap confirmation fraction.
    pub fn with_gap_threshold(mut self, fraction: f32) -> Self {
        self.gap_threshold = fraction;
        self
    }

    /// Set the line-merge gap fraction.
    pub fn with_line_merge_threshold(mut self, fraction: f32) -> Self {
        self.line_merge_threshold = fraction;
        self
    }

    /// Set the font-size tolerance for merging lines into a block.
    pub fn with_size_merge_tolerance(mut self, points: f32) -> Self {
        self.size_merge_tolerance = points;
        self
    }

    /// Set the exceptional-size multiplier.
    pub fn with_large_size_ratio(mut self, ratio: f32) -> Self {
        self.large_size_ratio = ratio;
        self
    }

    /// Set the moderate-size multiplier.
    pub fn with_moderate_size_ratio(mut self, ratio: f32) -> Self {
        self.moderate_size_ratio = ratio;
        self
    }

    /// Set the level-clustering tolerance.
    pub fn with_level_tolerance(mut self, points: f32) -> Self {
        self.level_tolerance = points;
        self
    }

    /// Set the OCR confidence floor.
    pub fn with_min_ocr_confidence(mut self, confidence: f32) -> Self {
        self.min_ocr_confidence = confidence;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            char_threshold: 100,
            gap_threshold: 0.3,
            line_merge_threshold: 0.5,
            size_merge_tolerance: 1.0,
            large_size_ratio: 1.8,
            moderate_size_ratio: 1.15,
            level_tolerance: 1.5,
            min_ocr_confidence: 0.8,
        }
    }
}
