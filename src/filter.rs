//! Column-scoped filter predicates over joined rows.
//!
//! A [`FilterSet`] is an AND-composition of [`ColumnFilter`]s. Filters that
//! target an unrecognized column, or that carry an empty/placeholder value,
//! are no-ops: one bad filter can narrow the view to nothing only by actually
//! matching nothing, never by faulting.

use crate::record::GameRow;
use serde::{Deserialize, Serialize};

/// Sentinel emitted by the language selection UI before any language is
/// picked. A language filter carrying it behaves like no filter at all, so
/// the literal string can never be matched against language data. Other
/// columns are unaffected.
pub const LANGUAGE_PLACEHOLDER: &str = "no language selected";

/// A single column-scoped filter.
///
/// Recognized columns:
///
/// - `"language"` — row passes iff its language map contains the value as an
///   exact, case-sensitive key. Rows without language data are excluded.
/// - `"event"` — row passes iff its resolved event name equals the value
///   exactly. Rows with an unresolved event are excluded.
///
/// Any other column makes the filter inert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnFilter {
    pub column: String,
    pub value: String,
}

impl ColumnFilter {
    pub fn new(column: impl Into<String>, value: impl Into<String>) -> Self {
        ColumnFilter {
            column: column.into(),
            value: value.into(),
        }
    }

    /// True if this filter cannot narrow anything: empty value on any
    /// column, or the unselected-placeholder sentinel on the language
    /// column. The sentinel stays meaningful as a literal on other columns.
    pub fn is_inert(&self) -> bool {
        self.value.is_empty()
            || (self.column == "language" && self.value == LANGUAGE_PLACEHOLDER)
    }

    /// Evaluate this filter against a row. Inert filters and unrecognized
    /// columns always pass.
    pub fn matches(&self, row: &GameRow<'_>) -> bool {
        if self.is_inert() {
            return true;
        }
        match self.column.as_str() {
            "language" => row.uses_language(&self.value),
            "event" => row.event_name == Some(self.value.as_str()),
            // Unknown column: treat as a no-op rather than blanking the view.
            _ => true,
        }
    }
}

/// An AND-composed set of active filters. The empty set passes every row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    filters: Vec<ColumnFilter>,
}

impl FilterSet {
    pub fn new() -> Self {
        FilterSet::default()
    }

    /// Add a filter to the conjunction.
    pub fn push(&mut self, filter: ColumnFilter) {
        self.filters.push(filter);
    }

    /// Convenience builder.
    pub fn with(mut self, filter: ColumnFilter) -> Self {
        self.push(filter);
        self
    }

    pub fn filters(&self) -> &[ColumnFilter] {
        &self.filters
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// True iff every active filter passes. Evaluated fresh per call; the
    /// set holds no cached results.
    pub fn matches(&self, row: &GameRow<'_>) -> bool {
        self.filters.iter().all(|filter| filter.matches(row))
    }
}

impl From<Vec<ColumnFilter>> for FilterSet {
    fn from(filters: Vec<ColumnFilter>) -> Self {
        FilterSet { filters }
    }
}
