//! Splits a raw model response into dialogue and debug panel text.
//!
//! The model is asked for a strict format but only loosely honors it, so
//! every input string is valid here: missing structure degrades to "all
//! dialogue, no debug".

pub const DEBUG_MARKER: &str = "--- DEBUG PANEL ---";

/// Trailing separator line the model appends under the panel.
const DASH_SEPARATOR: &str = "-------------------";

/// A raw response split into its display parts. `debug` is empty when the
/// model omitted the panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResponse {
    pub speaker: Option<String>,
    pub dialogue: String,
    pub debug: String,
}

pub fn parse_response(raw: &str) -> ParsedResponse {
    let (content, debug) = segment(raw);
    let (speaker, dialogue) = extract_speaker(&content);
    ParsedResponse {
        speaker,
        dialogue,
        debug,
    }
}

/// Splits on the first debug marker. Without a marker the whole trimmed
/// text is dialogue and the debug part is empty.
pub fn segment(raw: &str) -> (String, String) {
    match raw.find(DEBUG_MARKER) {
        Some(idx) => {
            let content = raw[..idx].trim().to_string();
            let debug = raw[idx + DEBUG_MARKER.len()..]
                .replace(DASH_SEPARATOR, "")
                .trim()
                .to_string();
            (content, debug)
        }
        None => (raw.trim().to_string(), String::new()),
    }
}

/// Peels an optional `[SPEAKER]` line off the front of the dialogue.
///
/// A literal `[]` yields `Some("")`: the label was present, just blank.
/// The UI treats that differently from no label at all.
pub fn extract_speaker(content: &str) -> (Option<String>, String) {
    let mut lines = content.lines();
    let Some(first) = lines.next() else {
        return (None, content.to_string());
    };

    if first.starts_with('[') && first.ends_with(']') && first.len() >= 2 {
        let speaker = first[1..first.len() - 1].to_string();
        let dialogue = lines.collect::<Vec<_>>().join("\n").trim().to_string();
        (Some(speaker), dialogue)
    } else {
        (None, content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_without_marker_returns_trimmed_input() {
        let (content, debug) = segment("  The court is silent.  \n");
        assert_eq!(content, "The court is silent.");
        assert_eq!(debug, "");
    }

    #[test]
    fn segment_splits_on_marker_and_strips_separator() {
        let raw = "Hello\n--- DEBUG PANEL ---\nActive Level: 3\n-------------------";
        let (content, debug) = segment(raw);
        assert_eq!(content, "Hello");
        assert_eq!(debug, "Active Level: 3");
    }

    #[test]
    fn segment_uses_first_marker_only() {
        let raw = "a\n--- DEBUG PANEL ---\nb\n--- DEBUG PANEL ---\nc";
        let (content, debug) = segment(raw);
        assert_eq!(content, "a");
        assert_eq!(debug, "b\n--- DEBUG PANEL ---\nc");
    }

    #[test]
    fn extract_speaker_with_bracketed_first_line() {
        let (speaker, dialogue) = extract_speaker("[BUDDHI]\nYou lie.");
        assert_eq!(speaker.as_deref(), Some("BUDDHI"));
        assert_eq!(dialogue, "You lie.");
    }

    #[test]
    fn extract_speaker_without_brackets() {
        let (speaker, dialogue) = extract_speaker("No brackets here");
        assert_eq!(speaker, None);
        assert_eq!(dialogue, "No brackets here");
    }

    #[test]
    fn empty_brackets_yield_present_but_empty_speaker() {
        let (speaker, dialogue) = extract_speaker("[]\nThe Devas murmur.");
        assert_eq!(speaker.as_deref(), Some(""));
        assert_eq!(dialogue, "The Devas murmur.");
    }

    #[test]
    fn unterminated_bracket_is_plain_dialogue() {
        let (speaker, dialogue) = extract_speaker("[MANAS\nI sense unease.");
        assert_eq!(speaker, None);
        assert_eq!(dialogue, "[MANAS\nI sense unease.");
    }

    #[test]
    fn empty_content_has_no_speaker() {
        let (speaker, dialogue) = extract_speaker("");
        assert_eq!(speaker, None);
        assert_eq!(dialogue, "");
    }

    #[test]
    fn parse_response_full_shape() {
        let raw = "[SMṚTI]\nYou said otherwise before.\n\n--- DEBUG PANEL ---\n\
Active Level: 2\nṚta Integrity Score: 45 / 100\nActive Contradictions: None\n-------------------";
        let parsed = parse_response(raw);
        assert_eq!(parsed.speaker.as_deref(), Some("SMṚTI"));
        assert_eq!(parsed.dialogue, "You said otherwise before.");
        assert!(parsed.debug.contains("Active Level: 2"));
        assert!(!parsed.debug.contains('-'));
    }
}
