//! # outpdf
//!
//! Heuristic PDF outline extraction for Rust.
//!
//! Given a flat stream of positioned text fragments — bounding box, font
//! size, boldness, page number, as reported by a page-content parser or a
//! raster OCR engine — this library classifies the structural headings of
//! a document and produces a hierarchical outline: a title plus ordered
//! heading entries with level and page. It works on geometry and
//! typography alone, with no access to bookmarks or semantic markup.
//!
//! ## Quick start
//!
//! ```no_run
//! use outpdf::{extract_outline, MemorySource};
//!
//! fn main() -> outpdf::Result<()> {
//!     let dump = std::fs::read("document.fragments.json")?;
//!     let mut source = MemorySource::from_json_slice(&dump)?;
//!
//!     let outline = extract_outline(&mut source, "document.pdf");
//!     println!("{}", serde_json::to_string_pretty(&outline)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Pure classification core**: consolidation, noise filtering,
//!   candidate classification, level clustering, outline assembly
//! - **Pluggable fragment sources**: native extraction and OCR providers
//!   behind one trait, with a character-threshold fallback composition
//! - **Tunable heuristics**: every threshold exposed with documented
//!   defaults via [`ExtractOptions`]
//! - **Batch processing**: independent documents in parallel via Rayon

pub mod error;
pub mod model;
pub mod options;
pub mod pipeline;
pub mod source;

pub use error::{Error, Result};
pub use model::{BoundingBox, HeadingCandidate, Outline, OutlineEntry, SemanticBlock, TextFragment};
pub use options::ExtractOptions;
pub use pipeline::OutlineExtractor;
pub use source::{
    font_name_is_bold, FallbackSource, MemorySource, OcrLine, RasterOcrProvider,
    TextFragmentSource,
};

use rayon::prelude::*;

/// Extract the outline of one document with default options.
///
/// `doc_name` is the document's file name, used for the fallback title
/// when neither metadata nor a leading H1 provides one.
pub fn extract_outline(source: &mut dyn TextFragmentSource, doc_name: &str) -> Outline {
    OutlineExtractor::new().extract(source, doc_name)
}

/// Extract the outline of one document with custom options.
pub fn extract_outline_with_options(
    source: &mut dyn TextFragmentSource,
    doc_name: &str,
    options: ExtractOptions,
) -> Outline {
    OutlineExtractor::with_options(options).extract(source, doc_name)
}

/// Extract outlines for several documents in parallel.
///
/// Each document gets an independent pipeline run with no shared mutable
/// state; results come back in input order.
pub fn extract_outline_batch<S>(documents: Vec<(String, S)>, options: ExtractOptions) -> Vec<Outline>
where
    S: TextFragmentSource + Send,
{
    let extractor = OutlineExtractor::with_options(options);
    documents
        .into_par_iter()
        .map(|(name, mut source)| extractor.extract(&mut source, &name))
        .collect()
}
