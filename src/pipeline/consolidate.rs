//! Block consolidation: merging raw fragments into semantic blocks.

use std::cmp::Ordering;

use crate::model::{SemanticBlock, TextFragment};
use crate::options::ExtractOptions;

/// Consolidate raw fragments into semantic blocks.
///
/// Fragments are first sorted by (page, top edge) — the single
/// authoritative reading order used by the whole pipeline — then scanned
/// once, extending a run while each fragment, against the immediately
/// preceding fragment in the run, is on the same page, within
/// `size_merge_tolerance` of its font size, and separated by a vertical
/// gap in `[0, prev.font_size * line_merge_threshold)`.
///
/// A run of one fragment passes through unchanged; longer runs merge into
/// one block (text space-joined, bounding box unioned, font size and
/// boldness from the first fragment). Output order follows input reading
/// order, and the block count never exceeds the fragment count.
pub fn consolidate(mut fragments: Vec<TextFragment>, options: &ExtractOptions) -> Vec<SemanticBlock> {
    fragments.sort_by(|a, b| {
        a.page_index.cmp(&b.page_index).then(
            a.bbox
                .y0
                .partial_cmp(&b.bbox.y0)
                .unwrap_or(Ordering::Equal),
        )
    });

    let mut blocks: Vec<SemanticBlock> = Vec::with_capacity(fragments.len());
    let mut run: Option<(SemanticBlock, TextFragment)> = None;

    for frag in fragments {
        run = Some(match run.take() {
            Some((mut block, prev)) if continues_run(&prev, &frag, options) => {
                block.absorb(&frag);
                (block, frag)
            }
            Some((block, _)) => {
                blocks.push(block);
                (SemanticBlock::from_fragment(frag.clone()), frag)
            }
            None => (SemanticBlock::from_fragment(frag.clone()), frag),
        });
    }

    if let Some((block, _)) = run {
        blocks.push(block);
    }

    blocks
}

/// Whether `frag` extends the run whose last fragment is `prev`.
fn continues_run(prev: &TextFragment, frag: &TextFragment, options: &ExtractOptions) -> bool {
    if prev.page_index != frag.page_index {
        return false;
    }
    if (prev.font_size - frag.font_size).abs() >= options.size_merge_tolerance {
        return false;
    }
    let gap = frag.bbox.y0 - prev.bbox.y1;
    gap >= 0.0 && gap < prev.font_size * options.line_merge_threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BoundingBox;

    fn frag(text: &str, page: usize, y0: f32, y1: f32, size: f32) -> TextFragment {
        TextFragment::new(text, BoundingBox::new(0.0, y0, 100.0, y1), page, size, false)
    }

    #[test]
    fn test_empty_input() {
        assert!(consolidate(vec![], &ExtractOptions::default()).is_empty());
    }

    #[test]
    fn test_adjacent_same_style_lines_merge() {
        // Zero vertical gap, same size, same page
        let frags = vec![
            frag("Chapter", 0, 10.0, 22.0, 12.0),
            frag("One", 0, 22.0, 34.0, 12.0),
        ];
        let blocks = consolidate(frags, &ExtractOptions::default());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text, "Chapter One");
        assert_eq!(blocks[0].bbox, BoundingBox::new(0.0, 10.0, 100.0, 34.0));
    }

    #[test]
    fn test_merged_style_comes_from_first_fragment() {
        let mut first = frag("Bold lead", 0, 10.0, 22.0, 12.0);
        first.is_bold = true;
        let frags = vec![first, frag("plain tail", 0, 22.0, 34.0, 12.4)];

        let blocks = consolidate(frags, &ExtractOptions::default());
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].is_bold);
        assert!((blocks[0].font_size - 12.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_size_drift_compares_adjacent_fragments() {
        // 12.0 -> 12.9 -> 13.8: each step is under the tolerance even
        // though the endpoints are not
        let frags = vec![
            frag("a", 0, 10.0, 22.0, 12.0),
            frag("b", 0, 22.0, 34.0, 12.9),
            frag("c", 0, 34.0, 46.0, 13.8),
        ];
        let blocks = consolidate(frags, &ExtractOptions::default());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text, "a b c");
    }

    #[test]
    fn test_page_break_splits_run() {
        let frags = vec![
            frag("end of page", 0, 700.0, 712.0, 12.0),
            frag("start of next", 1, 10.0, 22.0, 12.0),
        ];
        let blocks = consolidate(frags, &ExtractOptions::default());
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_size_change_splits_run() {
        let frags = vec![
            frag("Heading", 0, 10.0, 28.0, 18.0),
            frag("body right below", 0, 28.0, 40.0, 12.0),
        ];
        let blocks = consolidate(frags, &ExtractOptions::default());
        assert_eq!(blocks.len(), 2);
        assert!((blocks[0].font_size - 18.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_wide_gap_splits_run() {
        // Gap of 10pt at 12pt font exceeds 12 * 0.5 = 6
        let frags = vec![
            frag("para one", 0, 10.0, 22.0, 12.0),
            frag("para two", 0, 32.0, 44.0, 12.0),
        ];
        let blocks = consolidate(frags, &ExtractOptions::default());
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_negative_gap_splits_run() {
        // Overlapping boxes (negative gap) never merge
        let frags = vec![
            frag("one", 0, 10.0, 22.0, 12.0),
            frag("two", 0, 18.0, 30.0, 12.0),
        ];
        let blocks = consolidate(frags, &ExtractOptions::default());
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_unsorted_input_reads_in_page_then_y_order() {
        let frags = vec![
            frag("second", 1, 10.0, 22.0, 12.0),
            frag("first", 0, 500.0, 512.0, 12.0),
        ];
        let blocks = consolidate(frags, &ExtractOptions::default());
        assert_eq!(blocks[0].text, "first");
        assert_eq!(blocks[1].text, "second");
    }

    #[test]
    fn test_consolidation_is_idempotent() {
        let options = ExtractOptions::default();
        let frags = vec![
            frag("Chapter", 0, 10.0, 22.0, 12.0),
            frag("One", 0, 22.0, 34.0, 12.0),
            frag("Body paragraph text", 0, 60.0, 72.0, 12.0),
        ];
        let blocks = consolidate(frags, &options);
        assert_eq!(blocks.len(), 2);

        // Re-feed the merged blocks as atomic fragments
        let refeed: Vec<TextFragment> = blocks
            .iter()
            .map(|b| TextFragment::new(b.text.clone(), b.bbox, b.page_index, b.font_size, b.is_bold))
            .collect();
        let again = consolidate(refeed, &options);

        assert_eq!(again.len(), blocks.len());
        for (a, b) in again.iter().zip(blocks.iter()) {
            assert_eq!(a.text, b.text);
        }
    }
}
