//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use column_suggest::{ColumnSuggest, CustomFields, Document, SuggestConfig};

/// Wrap `lines` in an open jira-search fence and return the document plus
/// the line index of the first wrapped line.
pub fn fenced_document(lines: &[&str]) -> (Document, usize) {
    let mut text = String::from("# Sprint notes\n\n```jira-search\nquery: project = ABC\n");
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text.push_str("```\n");
    (Document::with_text(&text), 4)
}

/// Custom fields used across tests
pub fn test_custom_fields() -> CustomFields {
    CustomFields::from_pairs([
        ("10016", "Story Points"),
        ("10020", "Sprint"),
        ("10100", "Team"),
        ("100", "Start date"),
    ])
}

/// Engine with the test custom fields and `%` as compact sigil
pub fn test_engine() -> ColumnSuggest {
    ColumnSuggest::new(SuggestConfig {
        compact_symbol: '%',
        custom_fields: test_custom_fields(),
        ..SuggestConfig::default()
    })
}
