//! The heading classification pipeline.
//!
//! A strictly single-pass flow per document: fragments are consolidated
//! into semantic blocks, noise-filtered and classified in one traversal,
//! clustered into levels, and assembled into the final outline. Each
//! stage fully consumes its predecessor's output; nothing is shared
//! across stages afterwards.

mod assemble;
mod classify;
mod consolidate;
mod filter;
mod levels;

pub use assemble::title_from_name;
pub use classify::average_body_size;
pub use consolidate::consolidate;
pub use filter::NoiseFilter;
pub use levels::assign_levels;

use classify::HeadingClassifier;

use crate::model::{Outline, TextFragment};
use crate::options::ExtractOptions;
use crate::source::TextFragmentSource;

/// Runs the classification pipeline over a document's fragments.
///
/// One extractor can process any number of documents; it holds only the
/// options and the compiled noise patterns, never per-document state, so
/// separate documents may run on separate threads with one shared
/// extractor or one extractor each.
pub struct OutlineExtractor {
    options: ExtractOptions,
    filter: NoiseFilter,
    classifier: HeadingClassifier,
}

impl OutlineExtractor {
    /// Create an extractor with default options.
    pub fn new() -> Self {
        Self::with_options(ExtractOptions::default())
    }

    /// Create an extractor with custom options.
    pub fn with_options(options: ExtractOptions) -> Self {
        Self {
            options,
            filter: NoiseFilter::new(),
            classifier: HeadingClassifier::new(),
        }
    }

    /// The options this extractor runs with.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract the outline of one document from a fragment source.
    ///
    /// Pages are pulled in order; a page whose extraction fails is logged
    /// and contributes zero fragments, never aborting the document.
    /// `doc_name` seeds the fallback title (typically a file name like
    /// `annual_report.pdf`).
    pub fn extract(&self, source: &mut dyn TextFragmentSource, doc_name: &str) -> Outline {
        let mut fragments = Vec::new();
        for page_index in 0..source.page_count() {
            match source.page_fragments(page_index) {
                Ok(page_fragments) => fragments.extend(page_fragments),
                Err(e) => {
                    log::warn!("skipping page {} of {doc_name}: {e}", page_index + 1);
                }
            }
        }

        let title = source.title();
        self.extract_from_fragments(fragments, title.as_deref(), doc_name)
    }

    /// Run the pure classification core over an already collected
    /// fragment sequence. Always terminates with a (possibly empty)
    /// outline; an empty input yields the name-derived title and no
    /// entries.
    pub fn extract_from_fragments(
        &self,
        fragments: Vec<TextFragment>,
        metadata_title: Option<&str>,
        doc_name: &str,
    ) -> Outline {
        let blocks = consolidate(fragments, &self.options);
        log::debug!("{doc_name}: {} semantic blocks", blocks.len());

        let headings = self.classifier.classify(&blocks, &self.filter, &self.options);
        let candidates = assign_levels(headings, self.options.level_tolerance);
        log::debug!("{doc_name}: {} headings", candidates.len());

        assemble::assemble(candidates, metadata_title, doc_name)
    }
}

impl Default for OutlineExtractor {
    fn default() -> Self {
        Self::new()
    }
}
