//! Noise filtering: blocks that are never structural headings.

use regex::Regex;

/// Calendar month names used by the date-line rule.
const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Recognizes boilerplate blocks (page numbers, contact lines, captions,
/// dates, ...) that should be treated as body text regardless of how they
/// are typeset.
///
/// Rejected blocks still count toward the document's body-size statistics;
/// they are only excluded from heading consideration.
pub struct NoiseFilter {
    skip_patterns: Vec<Regex>,
}

impl NoiseFilter {
    /// Compile the boilerplate pattern set.
    pub fn new() -> Self {
        let patterns = [
            r"^\s*RSVP[:\-]?",                           // RSVP labels
            r"^\s*www\.[\w\.-]+\.[a-z]{2,}$",            // Bare websites
            r"^\s*https?://[\w\.-]+",                    // Full URLs
            r"^\s*email[:\-]?\s*[\w\.-]+@[\w\.-]+$",     // Email addresses
            r"^\s*phone[:\-]?\s*\+?\d[\d\-\s]+$",        // Labeled phone numbers
            r"^\s*\(?\d{3}\)?[\s\-]?\d{3}[\s\-]?\d{4}$", // Raw (xxx) xxx-xxxx numbers
            r"^\s*(tel|fax)[:\-]?\s*\+?\d[\d\-\s]+$",    // Tel/Fax numbers
            r"^\s*(address|location)[:\-]?\s*.*$",       // Address labels
            r"^\s*\d{1,3}(\.\d+)*\s*$",                  // Pure section numbers (1, 1.1, ...)
            r"^\s*page\s*\d+\s*$",                       // "Page 1", "Page 2"
            r"^\s*(copyright|©)\s*.*$",                  // Copyright notices
            r"^\s*(confidential|disclaimer).*$",         // Disclaimers
            r"^\s*(figure|table)\s*\d+\s*[:\-]?.*$",     // Figure/Table captions
            r"^\s*(date|time)[:\-]?\s*.*$",              // Date/Time labels
            r"^\s*contact\s*(us)?[:\-]?\s*.*$",          // Contact lines
        ];

        let skip_patterns = patterns
            .iter()
            .map(|p| {
                Regex::new(&format!("(?i){p}")).expect("invalid built-in noise pattern")
            })
            .collect();

        Self { skip_patterns }
    }

    /// Whether the block text is noise, i.e. should never become a heading.
    pub fn is_noise(&self, text: &str) -> bool {
        let trimmed = text.trim();

        if is_bare_number(trimmed) {
            return true;
        }
        if self.skip_patterns.iter().any(|p| p.is_match(trimmed)) {
            return true;
        }
        looks_like_date(trimmed)
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// A stray page/section number: purely numeric (allowing one trailing
/// period) with fewer than two whitespace-separated tokens.
fn is_bare_number(text: &str) -> bool {
    if text.split_whitespace().count() >= 2 {
        return false;
    }
    let digits = text.strip_suffix('.').unwrap_or(text);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// A date line: contains both a calendar month name (tolerating one
/// trailing `.` or `,`) and a 4-digit token, anywhere in the text.
fn looks_like_date(text: &str) -> bool {
    let lowered = text.to_lowercase();
    let mut has_month = false;
    let mut has_year = false;

    for word in lowered.split_whitespace() {
        let word = word
            .strip_suffix('.')
            .or_else(|| word.strip_suffix(','))
            .unwrap_or(word);
        if MONTHS.contains(&word) {
            has_month = true;
        }
        if word.len() == 4 && word.chars().all(|c| c.is_ascii_digit()) {
            has_year = true;
        }
    }

    has_month && has_year
}
