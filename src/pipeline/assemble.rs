//! Outline assembly: ordering, title derivation, final result.

use std::path::Path;

use crate::model::{HeadingCandidate, Outline, OutlineEntry};

/// Assemble the final outline from leveled heading candidates.
///
/// Entries are stable-sorted by 1-based page number; candidates arrive in
/// traversal order, so same-page entries keep their vertical order. The
/// title comes from, in priority order: non-empty source metadata, the
/// first entry if it is an H1, or the document name.
pub fn assemble(
    candidates: Vec<HeadingCandidate>,
    metadata_title: Option<&str>,
    doc_name: &str,
) -> Outline {
    let mut entries: Vec<OutlineEntry> = candidates
        .into_iter()
        .map(|c| OutlineEntry::new(c.level, c.block.text, c.block.page_index as u32 + 1))
        .collect();
    entries.sort_by_key(|e| e.page);

    let title = match metadata_title.filter(|t| !t.trim().is_empty()) {
        Some(t) => t.to_string(),
        None => match entries.first().filter(|e| e.level == "H1") {
            Some(first) => first.text.clone(),
            None => title_from_name(doc_name),
        },
    };

    Outline { title, entries }
}

/// Derive a fallback title from a document file name: the extension is
/// dropped, underscores and hyphens become spaces, and each word is
/// title-cased.
pub fn title_from_name(doc_name: &str) -> String {
    let stem = Path::new(doc_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(doc_name);

    stem.replace(['_', '-'], " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
