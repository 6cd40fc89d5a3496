//! Applying a chosen candidate back into the document

use crate::buffer::{Position, TextBufferMut};

use super::candidate::{Candidate, CUSTOM_FIELD_SIGIL};
use super::trigger::QueryContext;

/// Origin tag attached to every edit made by autocomplete
pub const ORIGIN_TAG: &str = "jira-issue";

/// Text to splice in and the span it replaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub text: String,
    pub start: Position,
    pub end: Position,
}

impl Replacement {
    pub fn apply<B>(&self, buffer: &mut B)
    where
        B: TextBufferMut + ?Sized,
    {
        buffer.replace_range(&self.text, self.start, self.end, ORIGIN_TAG);
    }
}

/// Sigil-prefixed token for a candidate, e.g. `-$Story Points`
pub fn encode_token(candidate: &Candidate, compact_symbol: char) -> String {
    let mut token = String::with_capacity(candidate.name.len() + 2);
    if candidate.is_compact {
        token.push(compact_symbol);
    }
    if candidate.is_custom_field {
        token.push(CUSTOM_FIELD_SIGIL);
    }
    token.push_str(&candidate.name);
    token
}

#[derive(Debug, Clone, Copy)]
pub struct SelectionApplier {
    compact_symbol: char,
}

impl SelectionApplier {
    pub fn new(compact_symbol: char) -> Self {
        Self { compact_symbol }
    }

    /// Replacement for the query span: the encoded token padded with a
    /// leading space and a trailing `", "` for the next entry.
    pub fn replacement(&self, candidate: &Candidate, context: &QueryContext) -> Replacement {
        Replacement {
            text: format!(" {}, ", encode_token(candidate, self.compact_symbol)),
            start: context.start,
            end: context.end,
        }
    }

    /// Write the candidate into `buffer`. Without a context nothing happens
    /// and `false` is returned.
    pub fn select<B>(
        &self,
        candidate: &Candidate,
        context: Option<&QueryContext>,
        buffer: &mut B,
    ) -> bool
    where
        B: TextBufferMut + ?Sized,
    {
        let Some(context) = context else {
            tracing::debug!(name = %candidate.name, "selection without active context ignored");
            return false;
        };
        self.replacement(candidate, context).apply(buffer);
        true
    }
}
