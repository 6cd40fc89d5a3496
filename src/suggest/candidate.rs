//! Candidate generation: prefix matching over the fixed and custom vocabularies

use serde::{Deserialize, Serialize};

use crate::vocabulary::{CustomFields, FixedVocabulary, KeyLookup};

/// Sigil marking a name from the custom-field vocabulary
pub const CUSTOM_FIELD_SIGIL: char = '$';

/// A single completion offered to the user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    /// The typed token carried the compact sigil
    pub is_compact: bool,
    /// `name` comes from the custom-field vocabulary
    pub is_custom_field: bool,
}

/// Produces ordered, size-bounded candidate lists for a query.
///
/// Borrows both vocabularies read-only for the duration of one generation.
#[derive(Debug, Clone, Copy)]
pub struct CandidateGenerator<'a> {
    vocabulary: &'a FixedVocabulary,
    custom_fields: &'a CustomFields,
    compact_symbol: char,
}

impl<'a> CandidateGenerator<'a> {
    pub fn new(
        vocabulary: &'a FixedVocabulary,
        custom_fields: &'a CustomFields,
        compact_symbol: char,
    ) -> Self {
        Self {
            vocabulary,
            custom_fields,
            compact_symbol,
        }
    }

    /// Candidates whose name starts with `query` (case-insensitive), fixed
    /// vocabulary first, at most `limit` in total.
    pub fn suggestions(&self, query: &str, limit: usize) -> Vec<Candidate> {
        let mut suggestions = Vec::new();

        let normalized = query.trim().to_uppercase();
        let is_compact = normalized.starts_with(self.compact_symbol);
        let mut query = normalized
            .strip_prefix(self.compact_symbol)
            .unwrap_or(normalized.as_str());

        if !query.starts_with(CUSTOM_FIELD_SIGIL) {
            for column in self.vocabulary.entries() {
                if suggestions.len() >= limit {
                    break;
                }
                if column.to_uppercase().starts_with(query) && !self.vocabulary.is_sentinel(column)
                {
                    suggestions.push(Candidate {
                        name: column.to_string(),
                        is_compact,
                        is_custom_field: false,
                    });
                }
            }
        }

        query = query.strip_prefix(CUSTOM_FIELD_SIGIL).unwrap_or(query);
        let lookup = KeyLookup::for_query(query);
        for key in lookup.keys(self.custom_fields) {
            if suggestions.len() >= limit {
                break;
            }
            if key.to_uppercase().starts_with(query) {
                suggestions.push(Candidate {
                    name: key.to_string(),
                    is_compact,
                    is_custom_field: true,
                });
            }
        }

        tracing::debug!(
            query,
            ?lookup,
            is_compact,
            count = suggestions.len(),
            "generated suggestions"
        );
        suggestions
    }
}
