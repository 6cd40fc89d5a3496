//! In-document autocomplete for `columns:` lists
//!
//! # Architecture
//!
//! ```text
//! cursor + buffer → TriggerDetector → QueryContext
//!                 → CandidateGenerator → Vec<Candidate> → host renders rows
//!                 → SelectionApplier → replace_range("jira-issue")
//! ```
//!
//! Everything runs synchronously inside one host callback; no caching.

mod candidate;
mod engine;
mod render;
mod select;
mod trigger;

pub use candidate::{Candidate, CandidateGenerator, CUSTOM_FIELD_SIGIL};
pub use engine::ColumnSuggest;
pub use render::{
    render_plain, render_spans, SuggestionSpan, COMPACT_CLASS, CUSTOM_FIELD_CLASS, SPAN_CLASS,
};
pub use select::{encode_token, Replacement, SelectionApplier, ORIGIN_TAG};
pub use trigger::{QueryContext, TriggerDetector};
