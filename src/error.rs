//! Error types for the outpdf library.

use std::io;
use thiserror::Error;

/// Result type alias for outpdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while supplying fragments to the pipeline.
///
/// The classification core itself is infallible: given any finite fragment
/// sequence it terminates with a (possibly empty) [`Outline`](crate::Outline).
/// These variants cover the fragment sources and the I/O around them.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading a fragment dump or writing results.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A fragment dump could not be deserialized.
    #[error("Invalid fragment dump: {0}")]
    InvalidDump(#[from] serde_json::Error),

    /// The document-level source failed entirely (e.g. the file could not
    /// be opened). Distinct from per-page failures, which are recovered.
    #[error("Fragment source error: {0}")]
    Source(String),

    /// A single page's fragments are unavailable. The pipeline recovers
    /// from this by treating the page as empty.
    #[error("Extraction failed for page {page}: {message}")]
    PageExtraction {
        /// Zero-based page index.
        page: usize,
        /// Provider-supplied failure detail.
        message: String,
    },

    /// An OCR provider failed or is unavailable for a page.
    #[error("OCR error: {0}")]
    Ocr(String),
}
