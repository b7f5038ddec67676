//! Heading candidate classification.

use regex::Regex;

use crate::model::SemanticBlock;
use crate::options::ExtractOptions;

use super::filter::NoiseFilter;

/// Blocks with more than this many words count toward the body-size mean.
const MIN_BODY_WORDS: usize = 3;
/// Blocks at or below this font size are ignored by the body-size mean.
const MIN_BODY_SIZE: f32 = 6.0;
/// Body size assumed when no plausible body text exists.
const DEFAULT_BODY_SIZE: f32 = 12.0;
/// A block is "short" below both of these limits.
const SHORT_MAX_WORDS: usize = 20;
const SHORT_MAX_CHARS: usize = 200;

/// Classifies semantic blocks as heading candidates from relative
/// typography and surrounding whitespace.
pub struct HeadingClassifier {
    numbering_prefix: Regex,
}

impl HeadingClassifier {
    /// Create a classifier.
    pub fn new() -> Self {
        Self {
            // Decimal outline numbering followed by whitespace: "2.1 Scope"
            numbering_prefix: Regex::new(r"^\d+(\.\d+)*\s+").expect("invalid numbering pattern"),
        }
    }

    /// Select the blocks that qualify as heading candidates, in traversal
    /// order. Filtered (noise) blocks still occupy their index so that
    /// next-block gap lookups stay valid, and they still contribute to
    /// the body-size statistic.
    pub fn classify(
        &self,
        blocks: &[SemanticBlock],
        filter: &NoiseFilter,
        options: &ExtractOptions,
    ) -> Vec<SemanticBlock> {
        if blocks.is_empty() {
            return Vec::new();
        }

        let avg_body_size = average_body_size(blocks);
        log::debug!("average body font size: {avg_body_size:.2}pt");

        let mut candidates = Vec::new();
        for (i, block) in blocks.iter().enumerate() {
            if filter.is_noise(&block.text) {
                continue;
            }
            if self.is_heading(block, blocks.get(i + 1), avg_body_size, options) {
                candidates.push(block.clone());
            }
        }
        candidates
    }

    /// The acceptance rule plus gap confirmation for one block.
    fn is_heading(
        &self,
        block: &SemanticBlock,
        next: Option<&SemanticBlock>,
        avg_body_size: f32,
        options: &ExtractOptions,
    ) -> bool {
        let is_exceptionally_large = block.font_size > avg_body_size * options.large_size_ratio;
        let is_moderately_large = block.font_size > avg_body_size * options.moderate_size_ratio;
        let is_short =
            block.word_count() < SHORT_MAX_WORDS && block.char_count() < SHORT_MAX_CHARS;
        let starts_with_number = self.numbering_prefix.is_match(&block.text);

        if !(is_exceptionally_large
            || (is_moderately_large && is_short)
            || (block.is_bold && is_short)
            || starts_with_number)
        {
            return false;
        }

        // Gap confirmation: a heading must be followed by enough vertical
        // whitespace to stand apart from the text below it. Exceptionally
        // large blocks skip the check, as do blocks that end a page (the
        // gap to the next page is not meaningful).
        if !is_exceptionally_large {
            if let Some(next) = next.filter(|n| n.page_index == block.page_index) {
                let vertical_gap = next.bbox.y0 - block.bbox.y1;
                if vertical_gap < block.font_size * options.gap_threshold {
                    return false;
                }
            }
        }

        true
    }
}

impl Default for HeadingClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Mean font size over plausible body text: blocks with more than three
/// words and a font size above 6pt. Falls back to 12.0 when no such
/// block exists.
///
/// Noise blocks are deliberately included in the statistic; see the
/// regression tests.
pub fn average_body_size(blocks: &[SemanticBlock]) -> f32 {
    let sizes: Vec<f32> = blocks
        .iter()
        .filter(|b| b.word_count() > MIN_BODY_WORDS && b.font_size > MIN_BODY_SIZE)
        .map(|b| b.font_size)
        .collect();

    if sizes.is_empty() {
        DEFAULT_BODY_SIZE
    } else {
        sizes.iter().sum::<f32>() / sizes.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BoundingBox;

    fn block(text: &str, page: usize, y0: f32, y1: f32, size: f32, bold: bool) -> SemanticBlock {
        SemanticBlock {
            text: text.to_string(),
            bbox: BoundingBox::new(0.0, y0, 100.0, y1),
            page_index: page,
            font_size: size,
            is_bold: bold,
        }
    }

    fn body(text: &str, page: usize, y0: f32) -> SemanticBlock {
        block(text, page, y0, y0 + 12.0, 12.0, false)
    }

    #[test]
    fn test_average_body_size_defaults() {
        assert!((average_body_size(&[]) - 12.0).abs() < f32::EPSILON);

        // Only short blocks: no plausible body text
        let blocks = vec![block("Title", 0, 0.0, 24.0, 24.0, false)];
        assert!((average_body_size(&blocks) - 12.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_average_body_size_ignores_tiny_fonts() {
        let blocks = vec![
            body("a long enough body sentence", 0, 100.0),
            block("tiny footnote text down here", 0, 700.0, 704.0, 4.0, false),
        ];
        assert!((average_body_size(&blocks) - 12.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_large_short_block_is_heading() {
        let classifier = HeadingClassifier::new();
        let blocks = vec![
            block("Introduction", 0, 10.0, 26.0, 16.0, false),
            body("some body text follows the heading here", 0, 40.0),
            body("and more body text to anchor the average", 0, 54.0),
        ];
        let found = classifier.classify(&blocks, &NoiseFilter::new(), &ExtractOptions::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "Introduction");
    }

    #[test]
    fn test_gap_confirmation_rejects_tight_blocks() {
        let classifier = HeadingClassifier::new();
        // 16pt block needs 16 * 0.3 = 4.8pt of trailing gap; it gets 2.
        let blocks = vec![
            block("Looks like a heading", 0, 10.0, 26.0, 16.0, false),
            body("immediately following body text with no gap", 0, 28.0),
            body("and more body text to anchor the average", 0, 42.0),
        ];
        let found = classifier.classify(&blocks, &NoiseFilter::new(), &ExtractOptions::default());
        assert!(found.is_empty());
    }

    #[test]
    fn test_exceptionally_large_skips_gap_and_length() {
        let classifier = HeadingClassifier::new();
        let long_title = "An Exceptionally Large Title That Rambles On And On Far Past Any \
                          Reasonable Word Count Limit For Headings In Ordinary Documents And \
                          Then Keeps Going";
        // The long title itself counts toward the body average, so enough
        // real body text is needed to keep the mean near 12pt. With nine
        // 12pt blocks the average is 13.2, and 24 > 13.2 * 1.8.
        let mut blocks = vec![block(long_title, 0, 10.0, 34.0, 24.0, false)];
        for i in 0..9 {
            blocks.push(body("body text immediately below the title", 0, 34.0 + i as f32 * 14.0));
        }
        let found = classifier.classify(&blocks, &NoiseFilter::new(), &ExtractOptions::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].font_size, 24.0);
    }

    #[test]
    fn test_page_final_block_skips_gap_check() {
        let classifier = HeadingClassifier::new();
        let blocks = vec![
            body("body text to anchor the average size", 0, 40.0),
            body("more body text on the same page here", 0, 54.0),
            // Short bold 14pt block, last on page 0
            block("Continued Overleaf", 0, 700.0, 714.0, 14.0, true),
            body("next page body text starts right here", 1, 10.0),
        ];
        let found = classifier.classify(&blocks, &NoiseFilter::new(), &ExtractOptions::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "Continued Overleaf");
    }

    #[test]
    fn test_numbered_block_is_candidate() {
        let classifier = HeadingClassifier::new();
        let blocks = vec![
            block("2.1 Evaluation Method", 0, 10.0, 22.0, 12.0, false),
            body("body text with a generous gap below it", 0, 40.0),
            body("and more body text to anchor the average", 0, 54.0),
        ];
        let found = classifier.classify(&blocks, &NoiseFilter::new(), &ExtractOptions::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "2.1 Evaluation Method");
    }

    #[test]
    fn test_noise_blocks_never_headings() {
        let classifier = HeadingClassifier::new();
        // Huge font, but a date line
        let blocks = vec![
            block("March 2024", 0, 10.0, 40.0, 30.0, true),
            body("body text with plenty of room below it", 0, 80.0),
            body("and more body text to anchor the average", 0, 94.0),
        ];
        let found = classifier.classify(&blocks, &NoiseFilter::new(), &ExtractOptions::default());
        assert!(found.is_empty());
    }

    #[test]
    fn test_noise_blocks_still_count_toward_average() {
        // Ten 20pt date lines drag the average up; with them included the
        // 16pt block is no longer moderately large.
        let mut blocks = vec![block("Candidate", 0, 0.0, 16.0, 16.0, false)];
        for i in 0..10 {
            let y = 100.0 + i as f32 * 30.0;
            blocks.push(block("Issued on March 3 2024", 0, y, y + 20.0, 20.0, false));
        }
        let avg = average_body_size(&blocks);
        assert!(avg > 16.0 / 1.15);

        let classifier = HeadingClassifier::new();
        let found = classifier.classify(&blocks, &NoiseFilter::new(), &ExtractOptions::default());
        assert!(found.is_empty());
    }
}
