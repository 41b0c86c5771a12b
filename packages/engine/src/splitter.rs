//! Greedy word-wrap splitter for oversized table rows.
//!
//! A logical table row whose free-text column is too wide for one line
//! is rendered as several physical `<tr>` fragments instead, so the PDF
//! paginator never has to break a single oversized row. The first two
//! columns are label columns: they appear once, in the first physical
//! row, and are replaced with placeholders afterwards.

use serde_json::Value;

use crate::config::{DEFAULT_MAX_CHARS, FORCED_BREAK_MARKER, LABEL_PLACEHOLDER};
use crate::error::{ReportError, Result};

/// Position of a physical row within its logical row group.
///
/// Determines which of the four mutually exclusive `splitRow*` CSS
/// classes the row carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowPosition {
    Single,
    First,
    Middle,
    Last,
}

impl RowPosition {
    fn of(index: usize, total: usize) -> Self {
        if total == 1 {
            RowPosition::Single
        } else if index == 0 {
            RowPosition::First
        } else if index + 1 == total {
            RowPosition::Last
        } else {
            RowPosition::Middle
        }
    }

    fn css_class(self) -> &'static str {
        match self {
            RowPosition::Single => "splitRowSingle",
            RowPosition::First => "splitRowFirst",
            RowPosition::Middle => "splitRow",
            RowPosition::Last => "splitRowLast",
        }
    }
}

/// Chunk free text into runs of at most `max_chars` characters.
///
/// Tokens are whitespace-delimited words, joined back with single
/// spaces. Words are never split: a word longer than `max_chars` gets a
/// chunk of its own. The literal `<br>` token forces a boundary (even
/// onto an empty buffer) and is consumed. Always returns at least one,
/// possibly empty, chunk.
///
/// `max_chars` of 0 degrades to one word per chunk; that is accepted
/// degenerate behavior, not validated away.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut buffer = String::new();
    // Width is measured in characters, not bytes.
    let mut buffer_chars = 0usize;

    for token in text.split_whitespace() {
        let token_chars = token.chars().count();
        if token == FORCED_BREAK_MARKER {
            chunks.push(std::mem::take(&mut buffer));
            buffer_chars = 0;
        } else if buffer.is_empty() {
            buffer.push_str(token);
            buffer_chars = token_chars;
        } else if buffer_chars + token_chars + 1 <= max_chars {
            buffer.push(' ');
            buffer.push_str(token);
            buffer_chars += token_chars + 1;
        } else {
            chunks.push(std::mem::take(&mut buffer));
            buffer.push_str(token);
            buffer_chars = token_chars;
        }
    }

    if !buffer.is_empty() {
        chunks.push(buffer);
    }
    if chunks.is_empty() {
        chunks.push(String::new());
    }
    chunks
}

/// Text form of a label cell. Null and absent cells render empty.
fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Text form of the wrapped column. Null is treated as a single space,
/// which produces one empty chunk.
fn target_text(value: &Value) -> String {
    match value {
        Value::Null => " ".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render one logical row as newline-joined `<tr>` fragments.
///
/// `row[target_column]` holds the free text to wrap at `max_chars`.
/// Each emitted row has exactly three cells: the two label columns
/// (values in the first row, `&nbsp;` placeholders afterwards) and one
/// text chunk. Word order is preserved across chunks; no word is
/// duplicated or dropped.
pub fn split_row(row: &[Value], target_column: usize, max_chars: usize) -> Result<String> {
    if target_column >= row.len() {
        return Err(ReportError::ColumnOutOfRange {
            index: target_column,
            len: row.len(),
        });
    }

    let text = target_text(&row[target_column]);
    let chunks = chunk_text(&text, max_chars);
    let total = chunks.len();

    let fragments: Vec<String> = chunks
        .iter()
        .enumerate()
        .map(|(index, chunk)| {
            let class = RowPosition::of(index, total).css_class();
            let (left, middle) = if index == 0 {
                (cell_text(row.first()), cell_text(row.get(1)))
            } else {
                (LABEL_PLACEHOLDER.to_string(), LABEL_PLACEHOLDER.to_string())
            };
            format!("<tr class=\"{class}\"><td>{left}</td><td>{middle}</td><td>{chunk}</td></tr>")
        })
        .collect();

    Ok(fragments.join("\n"))
}

/// [`split_row`] with the default maximum width.
pub fn split_row_default(row: &[Value], target_column: usize) -> Result<String> {
    split_row(row, target_column, DEFAULT_MAX_CHARS)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn row(values: serde_json::Value) -> Vec<Value> {
        values.as_array().expect("array literal").clone()
    }

    #[test]
    fn test_short_text_is_a_single_chunk() {
        let chunks = chunk_text("alpha beta gamma", 60);
        assert_eq!(chunks, vec!["alpha beta gamma".to_string()]);
    }

    #[test]
    fn test_words_rejoined_with_single_spaces() {
        let chunks = chunk_text("alpha   beta\t gamma", 60);
        assert_eq!(chunks, vec!["alpha beta gamma".to_string()]);
    }

    #[test]
    fn test_forced_break_marker_splits_and_is_consumed() {
        let chunks = chunk_text("alpha beta <br> gamma", 60);
        assert_eq!(chunks, vec!["alpha beta".to_string(), "gamma".to_string()]);
    }

    #[test]
    fn test_leading_break_marker_flushes_empty_chunk() {
        let chunks = chunk_text("<br> alpha", 60);
        assert_eq!(chunks, vec![String::new(), "alpha".to_string()]);
    }

    #[test]
    fn test_trailing_break_marker_adds_no_chunk() {
        let chunks = chunk_text("alpha <br>", 60);
        assert_eq!(chunks, vec!["alpha".to_string()]);
    }

    #[test]
    fn test_empty_text_yields_one_empty_chunk() {
        assert_eq!(chunk_text("", 60), vec![String::new()]);
        assert_eq!(chunk_text("   ", 60), vec![String::new()]);
    }

    #[test]
    fn test_chunks_respect_max_chars() {
        let text = "one two three four five six seven eight nine ten";
        for chunk in chunk_text(text, 12) {
            assert!(chunk.len() <= 12, "chunk too wide: {chunk:?}");
        }
    }

    #[test]
    fn test_no_word_lost_or_reordered() {
        let text = "aa bb <br> cc dd ee ff gg hh ii jj kk ll mm nn";
        let chunks = chunk_text(text, 8);
        let rejoined: Vec<&str> = chunks
            .iter()
            .flat_map(|c| c.split_whitespace())
            .collect();
        let expected: Vec<&str> = text
            .split_whitespace()
            .filter(|w| *w != FORCED_BREAK_MARKER)
            .collect();
        assert_eq!(rejoined, expected);
    }

    #[test]
    fn test_oversized_word_gets_its_own_chunk_unsplit() {
        let chunks = chunk_text("short incomprehensibilities end", 10);
        assert!(chunks.contains(&"incomprehensibilities".to_string()));
    }

    #[test]
    fn test_zero_width_degrades_to_word_per_chunk() {
        let chunks = chunk_text("one two three", 0);
        assert_eq!(
            chunks,
            vec!["one".to_string(), "two".to_string(), "three".to_string()]
        );
    }

    #[test]
    fn test_width_counts_characters_not_bytes() {
        // "één" is 3 characters (5 bytes); "één períod" fits in 10 chars.
        assert_eq!(chunk_text("één períod", 10), vec!["één períod".to_string()]);
    }

    #[test]
    fn test_boundary_fill_is_exact() {
        // "aa bb" is exactly 5 chars: fits at width 5, splits at 4.
        assert_eq!(chunk_text("aa bb", 5), vec!["aa bb".to_string()]);
        assert_eq!(
            chunk_text("aa bb", 4),
            vec!["aa".to_string(), "bb".to_string()]
        );
    }

    #[test]
    fn test_single_row_class() {
        let html = split_row_default(&row(json!(["Name", "Age", "short text"])), 2)
            .expect("split");
        assert_eq!(
            html,
            "<tr class=\"splitRowSingle\"><td>Name</td><td>Age</td><td>short text</td></tr>"
        );
    }

    #[test]
    fn test_null_target_renders_empty_single_row() {
        let html = split_row_default(&row(json!(["Name", "Age", null])), 2).expect("split");
        assert_eq!(
            html,
            "<tr class=\"splitRowSingle\"><td>Name</td><td>Age</td><td></td></tr>"
        );
    }

    #[test]
    fn test_two_chunks_use_first_and_last_classes() {
        let html = split_row(&row(json!(["A", "B", "alpha beta <br> gamma"])), 2, 60)
            .expect("split");
        let lines: Vec<&str> = html.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("<tr class=\"splitRowFirst\">"));
        assert!(lines[1].starts_with("<tr class=\"splitRowLast\">"));
        assert!(lines[0].contains("<td>alpha beta</td>"));
        assert!(lines[1].contains("<td>gamma</td>"));
    }

    #[test]
    fn test_middle_rows_use_plain_split_class() {
        let html = split_row(
            &row(json!(["A", "B", "one <br> two <br> three"])),
            2,
            60,
        )
        .expect("split");
        let lines: Vec<&str> = html.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("<tr class=\"splitRow\">"));
    }

    #[test]
    fn test_labels_only_in_first_row_then_placeholders() {
        let text = "a very long sentence that exceeds sixty characters in total length easily";
        let html = split_row(&row(json!(["Name", "Age", text])), 2, 20).expect("split");
        let lines: Vec<&str> = html.lines().collect();
        assert!(lines.len() > 1);
        assert!(lines[0].contains("<td>Name</td><td>Age</td>"));
        for line in &lines[1..] {
            assert!(line.contains("<td>&nbsp;</td><td>&nbsp;</td>"));
        }
    }

    #[test]
    fn test_out_of_range_column_is_an_error() {
        let err = split_row_default(&row(json!(["a", "b", "c"])), 3)
            .expect_err("index 3 into a 3-column row");
        assert!(matches!(
            err,
            ReportError::ColumnOutOfRange { index: 3, len: 3 }
        ));
    }

    #[test]
    fn test_numeric_cells_render_via_json_form() {
        let html = split_row_default(&row(json!(["Total", 42, "ok"])), 2).expect("split");
        assert!(html.contains("<td>42</td>"));
    }
}
