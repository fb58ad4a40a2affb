use crate::model::{FieldEntry, FieldMapping};
use tracing::debug;

/// Parse extracted document text into an ordered FieldMapping.
///
/// The text is split on `\n` only, so a trailing newline leaves a trailing
/// empty line behind. That line counts when deciding whether a deferred
/// value exists (see [`parse_field_lines`]).
pub fn parse_fields(text: &str) -> FieldMapping {
    let lines: Vec<&str> = text.split('\n').collect();
    parse_field_lines(&lines)
}

/// Parse a sequence of lines into an ordered FieldMapping.
///
/// Handles lines like:
/// - "Name: Jane Doe" -> ("Name", "Jane Doe")
/// - "Ratio: 1:2" -> ("Ratio", "1:2") (split at the first colon only)
/// - "Long label:", "", "value" -> ("Long label", "value")
///
/// Lines without a colon are skipped. A repeated key keeps the position of
/// its first occurrence and takes the value of its last one.
pub fn parse_field_lines(lines: &[&str]) -> FieldMapping {
    let mut entries: Vec<FieldEntry> = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        if let Some((raw_key, raw_value)) = line.split_once(':') {
            let mut value = raw_value.trim();

            if value.is_empty() && i + 2 < lines.len() && lines[i + 1].trim().is_empty() {
                value = lines[i + 2].trim();
                debug!(line = i, key = raw_key.trim(), "value deferred two lines below label");
                i += 2;
            }

            entries.push(FieldEntry {
                key: raw_key.trim().to_string(),
                value: value.to_string(),
            });
        }
        i += 1;
    }

    // Duplicates collapse onto the first occurrence.
    FieldMapping::from(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(m: &FieldMapping) -> Vec<&str> {
        m.keys().collect()
    }

    #[test]
    fn test_simple_fields_in_order() {
        let m = parse_fields("Name: Jane Doe\nDate: 2024-01-05\nCity: Malmö");
        assert_eq!(keys(&m), vec!["Name", "Date", "City"]);
        assert_eq!(m.get("Name"), Some("Jane Doe"));
        assert_eq!(m.get("City"), Some("Malmö"));
    }

    #[test]
    fn test_deferred_value() {
        let m = parse_field_lines(&["Label:", "", "DeferredValue", "Next: x"]);
        assert_eq!(keys(&m), vec!["Label", "Next"]);
        assert_eq!(m.get("Label"), Some("DeferredValue"));
        assert_eq!(m.get("Next"), Some("x"));
    }

    #[test]
    fn test_deferred_line_is_consumed_even_with_colon() {
        let m = parse_field_lines(&["Label:", "   ", "Other: y", "Next: x"]);
        assert_eq!(keys(&m), vec!["Label", "Next"]);
        assert_eq!(m.get("Label"), Some("Other: y"));
    }

    #[test]
    fn test_empty_value_without_blank_line_stays_empty() {
        let m = parse_field_lines(&["Label:", "Next: x"]);
        assert_eq!(m.get("Label"), Some(""));
        assert_eq!(m.get("Next"), Some("x"));
    }

    #[test]
    fn test_empty_value_at_end_of_text() {
        let m = parse_field_lines(&["Label:", ""]);
        assert_eq!(m.get("Label"), Some(""));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_trailing_newline_counts_as_line() {
        // "Label:", "", "" -> the deferred line exists and is empty
        let m = parse_fields("Label:\n\n");
        assert_eq!(m.get("Label"), Some(""));
    }

    #[test]
    fn test_duplicate_key_keeps_first_position_last_value() {
        let m = parse_field_lines(&["A: 1", "B: 2", "A: 3"]);
        assert_eq!(keys(&m), vec!["A", "B"]);
        assert_eq!(m.get("A"), Some("3"));
    }

    #[test]
    fn test_lines_without_colon_skipped() {
        let m = parse_field_lines(&["INVOICE", "Number: 17", "thank you"]);
        assert_eq!(keys(&m), vec!["Number"]);
    }

    #[test]
    fn test_split_on_first_colon() {
        let m = parse_field_lines(&["Time: 12:30"]);
        assert_eq!(m.get("Time"), Some("12:30"));
    }

    #[test]
    fn test_form_feed_page_break_trimmed() {
        let m = parse_fields("A: 1\n\x0cB: 2");
        assert_eq!(keys(&m), vec!["A", "B"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(parse_fields("").is_empty());
    }
}
