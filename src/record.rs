//! Snapshot record types for the game-jam catalog.
//!
//! The three collections are deserialized from the scraper's JSON snapshot,
//! whose field casing (`Id`, `Name`, `Path`, ...) is preserved via serde
//! renames. Records are immutable after load; the only derived shape is
//! [`GameRow`], which borrows from the store and is recomputed per query.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single jam submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    /// Relative URL slug on the jam site.
    #[serde(rename = "Path")]
    pub path: String,
    /// Free text; may contain a link list scraped from the entry page.
    #[serde(rename = "Body", default)]
    pub body: String,
    /// Foreign key into the event collection. The scraper emits this field
    /// as `parent`; the referenced event may be missing entirely.
    #[serde(rename = "parent")]
    pub parent_event_id: i64,
    /// Arbitrary label -> URL pairs (source repo, itch page, ...).
    #[serde(rename = "Meta", default)]
    pub meta: HashMap<String, String>,
}

/// A jam event (e.g. one compo weekend).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Path")]
    pub path: String,
}

/// Language breakdown for one game, keyed by the game's id.
///
/// `languages` is a sequence of name -> weight maps. In every observed
/// snapshot it carries exactly one entry; only the first element is
/// consulted, and an empty sequence means "no language data".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageUsage {
    #[serde(rename = "Id")]
    pub game_id: i64,
    #[serde(rename = "Languages", default)]
    pub languages: Vec<HashMap<String, u64>>,
}

impl LanguageUsage {
    /// The first (and in practice only) language map, or `None` if the
    /// sequence is empty.
    pub fn first_map(&self) -> Option<&HashMap<String, u64>> {
        self.languages.first()
    }
}

/// A game enriched with its resolved event name and language map.
///
/// Both joined fields are left-join results: an orphan foreign key yields
/// `None`, never an error. Rows borrow from the store and are rebuilt on
/// every query, so they can never outlive or go stale across a reload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRow<'a> {
    pub game: &'a Game,
    pub event_name: Option<&'a str>,
    pub languages: Option<&'a HashMap<String, u64>>,
}

impl<'a> GameRow<'a> {
    /// Returns true if the row's language map contains `name` as an exact,
    /// case-sensitive key. Rows without language data never match.
    pub fn uses_language(&self, name: &str) -> bool {
        self.languages.map(|m| m.contains_key(name)).unwrap_or(false)
    }
}
