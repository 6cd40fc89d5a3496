//! Structured rows for hosts that draw the suggestion list

use serde::Serialize;

use super::candidate::{Candidate, CUSTOM_FIELD_SIGIL};

pub const SPAN_CLASS: &str = "jira-issue-suggestion";
pub const COMPACT_CLASS: &str = "is-compact";
pub const CUSTOM_FIELD_CLASS: &str = "is-custom-field";

/// One styled piece of a suggestion row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionSpan {
    pub text: String,
    pub classes: Vec<&'static str>,
}

impl SuggestionSpan {
    fn new(text: impl Into<String>, classes: &[&'static str]) -> Self {
        Self {
            text: text.into(),
            classes: classes.to_vec(),
        }
    }
}

/// Spans for a candidate: compact sigil, custom-field sigil, then the name
pub fn render_spans(candidate: &Candidate, compact_symbol: char) -> Vec<SuggestionSpan> {
    let mut spans = Vec::with_capacity(3);
    if candidate.is_compact {
        spans.push(SuggestionSpan::new(compact_symbol, &[SPAN_CLASS, COMPACT_CLASS]));
    }
    if candidate.is_custom_field {
        spans.push(SuggestionSpan::new(
            CUSTOM_FIELD_SIGIL,
            &[SPAN_CLASS, CUSTOM_FIELD_CLASS],
        ));
    }
    spans.push(SuggestionSpan::new(candidate.name.as_str(), &[SPAN_CLASS]));
    spans
}

/// The row flattened to plain text
pub fn render_plain(candidate: &Candidate, compact_symbol: char) -> String {
    render_spans(candidate, compact_symbol)
        .into_iter()
        .map(|span| span.text)
        .collect()
}
