//! Trigger detection: is the cursor inside a `columns:` list of a fenced block?

use regex::Regex;

use crate::buffer::{Position, TextBuffer};

/// The partial token under the cursor and the span it occupies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryContext {
    /// Raw text typed since the last delimiter (whitespace preserved)
    pub query: String,
    pub start: Position,
    pub end: Position,
}

/// Decides whether autocomplete is active for a cursor position
#[derive(Debug, Clone)]
pub struct TriggerDetector {
    /// `^\s*<keyword>\s*:`
    key_pattern: Regex,
    /// `^\s*```\s*<block>`
    fence_pattern: Regex,
}

impl TriggerDetector {
    pub fn new(keyword: &str, fence_block: &str) -> Self {
        let key_pattern = Regex::new(&format!(r"^\s*{}\s*:", regex::escape(keyword)))
            .expect("escaped keyword pattern is valid");
        let fence_pattern = Regex::new(&format!(r"^\s*```\s*{}", regex::escape(fence_block)))
            .expect("escaped fence pattern is valid");
        Self {
            key_pattern,
            fence_pattern,
        }
    }

    /// Returns the query context when the cursor sits after the key introducer
    /// of a line below an opening fence.
    pub fn detect<B>(&self, cursor: Position, buffer: &B) -> Option<QueryContext>
    where
        B: TextBuffer + ?Sized,
    {
        let line = buffer.line(cursor.line)?;
        if !self.key_pattern.is_match(&line) {
            tracing::trace!(line = cursor.line, "no key introducer on line");
            return None;
        }

        let before_cursor: String = line.chars().take(cursor.column).collect();
        if !self.key_pattern.is_match(&before_cursor) {
            tracing::trace!(
                line = cursor.line,
                column = cursor.column,
                "cursor is before the key introducer"
            );
            return None;
        }

        if self.find_fence_start(buffer, cursor.line).is_none() {
            tracing::trace!(line = cursor.line, "no opening fence above cursor");
            return None;
        }

        let query = last_list_segment(&before_cursor).to_string();
        let start_column = cursor.column.saturating_sub(query.chars().count());
        tracing::debug!(query = %query, line = cursor.line, start_column, "trigger active");

        Some(QueryContext {
            query,
            start: Position::new(cursor.line, start_column),
            end: cursor,
        })
    }

    /// Line index of the nearest opening fence above `cursor_line`.
    ///
    /// Scans upward to the top of the document. A closing fence in between is
    /// not detected, so a line below an already closed block still matches.
    pub fn find_fence_start<B>(&self, buffer: &B, cursor_line: usize) -> Option<usize>
    where
        B: TextBuffer + ?Sized,
    {
        (0..cursor_line)
            .rev()
            .find(|&i| buffer.line(i).is_some_and(|l| self.fence_pattern.is_match(&l)))
    }
}

/// Everything after the first colon, then the last comma-separated piece
fn last_list_segment(text: &str) -> &str {
    let after_key = text.split_once(':').map(|(_, rest)| rest).unwrap_or("");
    after_key.rsplit(',').next().unwrap_or(after_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> TriggerDetector {
        TriggerDetector::new("columns", "jira-search")
    }

    fn detect(lines: &[&str], line: usize, column: usize) -> Option<QueryContext> {
        detector().detect(Position::new(line, column), lines)
    }

    #[test]
    fn test_last_list_segment() {
        assert_eq!(last_list_segment("columns: ST"), " ST");
        assert_eq!(last_list_segment("columns: KEY, ST"), " ST");
        assert_eq!(last_list_segment("columns: KEY,"), "");
        assert_eq!(last_list_segment("columns: a:b"), " a:b");
        assert_eq!(last_list_segment("no colon"), "");
    }

    #[test]
    fn test_detect_simple_query() {
        let ctx = detect(&["```jira-search", "columns: ST"], 1, 11).unwrap();
        assert_eq!(ctx.query, " ST");
        assert_eq!(ctx.start, Position::new(1, 8));
        assert_eq!(ctx.end, Position::new(1, 11));
    }

    #[test]
    fn test_detect_keeps_whitespace_in_query() {
        let ctx = detect(&["```jira-search", "  columns :KEY,  -$Sto"], 1, 22).unwrap();
        assert_eq!(ctx.query, "  -$Sto");
        assert_eq!(ctx.start.column, 15);
    }

    #[test]
    fn test_detect_mid_line_cursor() {
        let ctx = detect(&["```jira-search", "columns: KEY, SUM, STATUS"], 1, 17).unwrap();
        assert_eq!(ctx.query, " SUM");
        assert_eq!(ctx.start.column, 13);
        assert_eq!(ctx.end.column, 17);
    }

    #[test]
    fn test_line_without_key_introducer() {
        assert!(detect(&["```jira-search", "query: status = Done"], 1, 10).is_none());
        assert!(detect(&["```jira-search", "# columns: KEY"], 1, 14).is_none());
        assert!(detect(&["```jira-search", "columns KEY"], 1, 11).is_none());
    }

    #[test]
    fn test_cursor_before_colon() {
        assert!(detect(&["```jira-search", "columns: KEY"], 1, 7).is_none());
        assert!(detect(&["```jira-search", "columns: KEY"], 1, 0).is_none());
    }

    #[test]
    fn test_requires_fence_above() {
        assert!(detect(&["columns: KEY"], 0, 12).is_none());
        assert!(detect(&["```jira-issue", "columns: KEY"], 1, 12).is_none());
        assert!(detect(&["text", "columns: KEY", "```jira-search"], 1, 12).is_none());
    }

    #[test]
    fn test_fence_found_through_other_lines() {
        let lines = ["intro", "  ```  jira-search", "query: project = X", "", "columns: K"];
        let ctx = detect(&lines, 4, 10).unwrap();
        assert_eq!(ctx.query, " K");
        assert_eq!(detector().find_fence_start(&lines[..], 4), Some(1));
    }

    #[test]
    fn test_closed_fence_still_matches() {
        let lines = ["```jira-search", "query: x", "```", "", "columns: K"];
        assert!(detect(&lines, 4, 10).is_some());
    }

    #[test]
    fn test_cursor_line_out_of_range() {
        assert!(detect(&["```jira-search"], 3, 0).is_none());
    }

    #[test]
    fn test_cursor_past_line_end() {
        let ctx = detect(&["```jira-search", "columns: KE"], 1, 40).unwrap();
        assert_eq!(ctx.query, " KE");
        assert_eq!(ctx.start.column, 37);
        assert_eq!(ctx.end.column, 40);
    }

    #[test]
    fn test_custom_keyword_and_block() {
        let detector = TriggerDetector::new("fields.list", "my+block");
        let lines = ["```my+block", "fields.list: a"];
        assert!(detector.detect(Position::new(1, 14), &lines[..]).is_some());
        let lines = ["```my+block", "fieldsXlist: a"];
        assert!(detector.detect(Position::new(1, 14), &lines[..]).is_none());
    }
}
