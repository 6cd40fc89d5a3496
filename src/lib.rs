//! Column autocomplete for `jira-search` blocks
//!
//! This crate provides the trigger detection, candidate generation and
//! selection logic behind completing the `columns:` list of a fenced
//! `jira-search` block. The host editor supplies the text buffer and the
//! custom field tables; everything here is synchronous and stateless apart
//! from the active query context.

pub mod buffer;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod suggest;
pub mod tracing;
pub mod vocabulary;

// Re-export commonly used types
pub use buffer::{Document, Position, TextBuffer, TextBufferMut};
pub use config::SuggestConfig;
pub use suggest::{Candidate, ColumnSuggest, QueryContext};
pub use vocabulary::{CustomFields, FixedVocabulary, SearchColumn};
