//! Fixed and user-defined field vocabularies
//!
//! The fixed vocabulary is the ordered set of search-result columns a
//! `jira-search` block understands. The dynamic vocabulary holds the custom
//! fields of the connected instance as two parallel tables (id → name and
//! name → id), owned by the configuration and only ever borrowed here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Columns known to `jira-search` blocks, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchColumn {
    Key,
    Summary,
    Description,
    Type,
    Created,
    Updated,
    Reporter,
    Assignee,
    Priority,
    Status,
    DueDate,
    Resolution,
    ResolutionDate,
    Project,
    Environment,
    Labels,
    FixVersions,
    Components,
    AggregateTimeEstimate,
    AggregateTimeOriginalEstimate,
    AggregateTimeSpent,
    AggregateProgress,
    TimeEstimate,
    TimeOriginalEstimate,
    TimeSpent,
    Progress,
    LastViewed,
    DevStatus,
    Notes,
    /// Placeholder for `$`-prefixed columns; never offered as a completion
    CustomField,
}

impl SearchColumn {
    /// All columns in enumeration order
    pub const ALL: &'static [SearchColumn] = &[
        SearchColumn::Key,
        SearchColumn::Summary,
        SearchColumn::Description,
        SearchColumn::Type,
        SearchColumn::Created,
        SearchColumn::Updated,
        SearchColumn::Reporter,
        SearchColumn::Assignee,
        SearchColumn::Priority,
        SearchColumn::Status,
        SearchColumn::DueDate,
        SearchColumn::Resolution,
        SearchColumn::ResolutionDate,
        SearchColumn::Project,
        SearchColumn::Environment,
        SearchColumn::Labels,
        SearchColumn::FixVersions,
        SearchColumn::Components,
        SearchColumn::AggregateTimeEstimate,
        SearchColumn::AggregateTimeOriginalEstimate,
        SearchColumn::AggregateTimeSpent,
        SearchColumn::AggregateProgress,
        SearchColumn::TimeEstimate,
        SearchColumn::TimeOriginalEstimate,
        SearchColumn::TimeSpent,
        SearchColumn::Progress,
        SearchColumn::LastViewed,
        SearchColumn::DevStatus,
        SearchColumn::Notes,
        SearchColumn::CustomField,
    ];

    /// Name as written in a `columns:` list
    pub fn as_str(self) -> &'static str {
        match self {
            SearchColumn::Key => "KEY",
            SearchColumn::Summary => "SUMMARY",
            SearchColumn::Description => "DESCRIPTION",
            SearchColumn::Type => "TYPE",
            SearchColumn::Created => "CREATED",
            SearchColumn::Updated => "UPDATED",
            SearchColumn::Reporter => "REPORTER",
            SearchColumn::Assignee => "ASSIGNEE",
            SearchColumn::Priority => "PRIORITY",
            SearchColumn::Status => "STATUS",
            SearchColumn::DueDate => "DUE_DATE",
            SearchColumn::Resolution => "RESOLUTION",
            SearchColumn::ResolutionDate => "RESOLUTION_DATE",
            SearchColumn::Project => "PROJECT",
            SearchColumn::Environment => "ENVIRONMENT",
            SearchColumn::Labels => "LABELS",
            SearchColumn::FixVersions => "FIX_VERSIONS",
            SearchColumn::Components => "COMPONENTS",
            SearchColumn::AggregateTimeEstimate => "AGGREGATE_TIME_ESTIMATE",
            SearchColumn::AggregateTimeOriginalEstimate => "AGGREGATE_TIME_ORIGINAL_ESTIMATE",
            SearchColumn::AggregateTimeSpent => "AGGREGATE_TIME_SPENT",
            SearchColumn::AggregateProgress => "AGGREGATE_PROGRESS",
            SearchColumn::TimeEstimate => "TIME_ESTIMATE",
            SearchColumn::TimeOriginalEstimate => "TIME_ORIGINAL_ESTIMATE",
            SearchColumn::TimeSpent => "TIME_SPENT",
            SearchColumn::Progress => "PROGRESS",
            SearchColumn::LastViewed => "LAST_VIEWED",
            SearchColumn::DevStatus => "DEV_STATUS",
            SearchColumn::Notes => "NOTES",
            SearchColumn::CustomField => "CUSTOM_FIELD",
        }
    }
}

/// Ordered fixed vocabulary with an optional sentinel excluded from matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedVocabulary {
    entries: Vec<String>,
    sentinel: Option<String>,
}

impl FixedVocabulary {
    pub fn new<I, S>(entries: I, sentinel: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
            sentinel: sentinel.map(str::to_string),
        }
    }

    /// The `jira-search` column set, with `CUSTOM_FIELD` as sentinel
    pub fn search_columns() -> Self {
        Self::new(
            SearchColumn::ALL.iter().map(|c| c.as_str()),
            Some(SearchColumn::CustomField.as_str()),
        )
    }

    /// Entries in enumeration order, sentinel included
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn is_sentinel(&self, entry: &str) -> bool {
        self.sentinel.as_deref() == Some(entry)
    }
}

impl Default for FixedVocabulary {
    fn default() -> Self {
        Self::search_columns()
    }
}

/// User-defined fields, as two parallel lookup tables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFields {
    #[serde(default, alias = "customFieldsIdToName")]
    pub id_to_name: BTreeMap<String, String>,
    #[serde(default, alias = "customFieldsNameToId")]
    pub name_to_id: BTreeMap<String, String>,
}

impl CustomFields {
    /// Build both tables from `(id, name)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields = Self::default();
        for (id, name) in pairs {
            fields.insert(id, name);
        }
        fields
    }

    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        let (id, name) = (id.into(), name.into());
        self.name_to_id.insert(name.clone(), id.clone());
        self.id_to_name.insert(id, name);
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_name.is_empty() && self.name_to_id.is_empty()
    }

    pub fn name_for_id(&self, id: &str) -> Option<&str> {
        self.id_to_name.get(id).map(String::as_str)
    }

    pub fn id_for_name(&self, name: &str) -> Option<&str> {
        self.name_to_id.get(name).map(String::as_str)
    }
}

/// Which custom-field table a query is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyLookup {
    /// Query is a non-zero number: match field ids
    ById,
    /// Anything else: match field names
    ByName,
}

impl KeyLookup {
    /// Resolve the lookup for an already normalized query
    ///
    /// `"0"`, the empty query and non-numeric text all resolve to `ByName`.
    pub fn for_query(query: &str) -> Self {
        if is_nonzero_number(query) {
            KeyLookup::ById
        } else {
            KeyLookup::ByName
        }
    }

    /// Keys of the selected table, in table order
    pub fn keys(self, fields: &CustomFields) -> impl Iterator<Item = &str> {
        let table = match self {
            KeyLookup::ById => &fields.id_to_name,
            KeyLookup::ByName => &fields.name_to_id,
        };
        table.keys().map(String::as_str)
    }
}

/// True when `s` reads as a number other than zero.
///
/// Accepts surrounding whitespace, an optional sign, decimals with exponents,
/// `Infinity`, and unsigned `0x`/`0o`/`0b` literals.
fn is_nonzero_number(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }

    let lower = s.to_ascii_lowercase();
    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(digits) = lower.strip_prefix(prefix) {
            return !digits.is_empty()
                && digits.chars().all(|c| c.is_digit(radix))
                && digits.chars().any(|c| c != '0');
        }
    }

    let unsigned = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    if unsigned == "Infinity" {
        return true;
    }
    if !unsigned
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return false;
    }

    match s.parse::<f64>() {
        Ok(value) => value != 0.0 && !value.is_nan(),
        Err(_) => false,
    }
}
