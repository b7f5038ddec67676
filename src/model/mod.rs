//! Data model for the outline extraction pipeline.

mod block;
mod fragment;
mod outline;

pub use block::{HeadingCandidate, SemanticBlock};
pub use fragment::{BoundingBox, TextFragment};
pub use outline::{Outline, OutlineEntry};
