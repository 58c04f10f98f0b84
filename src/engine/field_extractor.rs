//! Tolerant extraction of typed fields from debug panel text.
//!
//! The upstream model cannot be trusted to format the panel exactly, so
//! every lookup degrades to "field unset" instead of failing: labels match
//! case-insensitively anywhere in the text, integers are the first digit
//! run after the colon, and malformed values are skipped while extraction
//! continues for the remaining fields.

use crate::model::field_set::FieldSet;

// Labels as emitted by the response protocol. Only these three are
// machine-extracted; the other panel lines are display-only.
pub const LABEL_INTEGRITY: &str = "Ṛta Integrity Score";
pub const LABEL_LEVEL: &str = "Active Level";
pub const LABEL_CONTRADICTIONS: &str = "Active Contradictions";

/// Sentinel meaning "no new contradictions this turn".
const NO_CONTRADICTIONS: &str = "none";

pub fn extract_fields(debug: &str) -> FieldSet {
    FieldSet {
        integrity_score: labeled_int(debug, LABEL_INTEGRITY),
        level: labeled_int(debug, LABEL_LEVEL),
        contradictions: labeled_list(debug, LABEL_CONTRADICTIONS),
    }
}

/// First run of decimal digits after `label:`. `None` when the label is
/// missing or no digits follow (e.g. `Active Level: unknown`).
fn labeled_int(text: &str, label: &str) -> Option<i32> {
    let rest = after_label(text, label)?;
    let digits: String = rest
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Remainder of the label's line, comma-split and trimmed, with empty
/// elements dropped. The literal sentinel `None` resolves to an empty
/// list, which is distinct from the label being absent.
fn labeled_list(text: &str, label: &str) -> Option<Vec<String>> {
    let rest = after_label(text, label)?;
    let line = rest.lines().next().unwrap_or("").trim();

    if line.eq_ignore_ascii_case(NO_CONTRADICTIONS) {
        return Some(Vec::new());
    }

    Some(
        line.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

/// Tail of `text` just past the first case-insensitive occurrence of
/// `label` followed by a colon. Occurrences without a colon are skipped.
fn after_label<'a>(text: &'a str, label: &str) -> Option<&'a str> {
    for (idx, _) in text.char_indices() {
        if let Some(rest) = strip_label(&text[idx..], label) {
            if let Some(rest) = rest.trim_start_matches([' ', '\t']).strip_prefix(':') {
                return Some(rest);
            }
        }
    }
    None
}

/// Case-insensitive prefix strip, returning the tail after `label`.
fn strip_label<'a>(s: &'a str, label: &str) -> Option<&'a str> {
    let mut rest = s;
    for expected in label.chars() {
        let got = rest.chars().next()?;
        if !got.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        rest = &rest[got.len_utf8()..];
    }
    Some(rest)
}
