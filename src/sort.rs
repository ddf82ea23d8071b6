//! Stable ordering of filtered rows by a chosen column.
//!
//! Absent derived values (an unresolved event name) compare less than any
//! present value and stay anchored at the front of the sequence in both
//! directions; only the relative order of present values reverses under
//! `Descending`. The sort is stable, so rows with equal keys keep their
//! filter-stage order.

use crate::record::GameRow;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort direction. "No sort" is expressed by passing no [`SortKey`] at all,
/// which leaves rows in filter-stage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// A column and direction to order the filtered rows by.
///
/// Recognized columns: `"name"`, `"event"`, `"id"`. An unrecognized column
/// leaves the sequence in filter-stage order rather than failing the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortKey {
    pub column: String,
    pub order: SortOrder,
}

impl SortKey {
    pub fn ascending(column: impl Into<String>) -> Self {
        SortKey {
            column: column.into(),
            order: SortOrder::Ascending,
        }
    }

    pub fn descending(column: impl Into<String>) -> Self {
        SortKey {
            column: column.into(),
            order: SortOrder::Descending,
        }
    }
}

/// The comparable value a row exposes for one column.
enum SortValue<'a> {
    Absent,
    Int(i64),
    Str(&'a str),
}

fn sort_value<'a>(row: &GameRow<'a>, column: &str) -> Option<SortValue<'a>> {
    match column {
        "name" => Some(SortValue::Str(row.game.name.as_str())),
        "event" => Some(match row.event_name {
            Some(name) => SortValue::Str(name),
            None => SortValue::Absent,
        }),
        "id" => Some(SortValue::Int(row.game.id)),
        _ => None,
    }
}

fn compare(a: &SortValue<'_>, b: &SortValue<'_>, order: SortOrder) -> Ordering {
    // Absent stays anchored at the front regardless of direction; only
    // present-vs-present comparisons reverse under Descending.
    match (a, b) {
        (SortValue::Absent, SortValue::Absent) => Ordering::Equal,
        (SortValue::Absent, _) => Ordering::Less,
        (_, SortValue::Absent) => Ordering::Greater,
        (a, b) => {
            let base = match (a, b) {
                (SortValue::Int(x), SortValue::Int(y)) => x.cmp(y),
                (SortValue::Str(x), SortValue::Str(y)) => x.cmp(y),
                // Columns are homogeneous, so mixed comparisons only arise
                // from a programming error; keep them deterministic.
                (SortValue::Int(_), SortValue::Str(_)) => Ordering::Less,
                (SortValue::Str(_), SortValue::Int(_)) => Ordering::Greater,
                _ => Ordering::Equal,
            };
            match order {
                SortOrder::Ascending => base,
                SortOrder::Descending => base.reverse(),
            }
        }
    }
}

/// Sort rows in place by `key`. Stable; an unrecognized column leaves the
/// sequence untouched.
pub fn sort_rows(rows: &mut [GameRow<'_>], key: &SortKey) {
    if !matches!(key.column.as_str(), "name" | "event" | "id") {
        return;
    }
    rows.sort_by(|a, b| {
        match (sort_value(a, &key.column), sort_value(b, &key.column)) {
            (Some(va), Some(vb)) => compare(&va, &vb, key.order),
            _ => Ordering::Equal,
        }
    });
}
