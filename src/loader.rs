//! Static JSON snapshot loading.
//!
//! The catalog is backed by three JSON files scraped once per snapshot:
//! `games.json`, `events.json` and `languages.json`. Loading happens exactly
//! once per session, before any query; the core never performs I/O after
//! that. A failed load is reported to the caller, who may fall back to an
//! empty snapshot.

use crate::record::{Event, Game, LanguageUsage};
use crate::store::RecordStore;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub const GAMES_FILE: &str = "games.json";
pub const EVENTS_FILE: &str = "events.json";
pub const LANGUAGES_FILE: &str = "languages.json";

/// The three raw collections as read from disk, before indexing.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub games: Vec<Game>,
    pub events: Vec<Event>,
    pub languages: Vec<LanguageUsage>,
}

impl Snapshot {
    /// Read all three collections from `dir`. Any unreadable or malformed
    /// file fails the whole load; partial snapshots are not supported.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, String> {
        let dir = dir.as_ref();
        Ok(Snapshot {
            games: load_collection(&dir.join(GAMES_FILE))?,
            events: load_collection(&dir.join(EVENTS_FILE))?,
            languages: load_collection(&dir.join(LANGUAGES_FILE))?,
        })
    }

    /// Parse all three collections from in-memory JSON. Useful for embedded
    /// snapshots and tests.
    pub fn from_json(games: &str, events: &str, languages: &str) -> Result<Self, String> {
        Ok(Snapshot {
            games: parse_collection(games, GAMES_FILE)?,
            events: parse_collection(events, EVENTS_FILE)?,
            languages: parse_collection(languages, LANGUAGES_FILE)?,
        })
    }

    /// Build the indexed store, consuming the snapshot.
    pub fn into_store(self) -> RecordStore {
        RecordStore::new(self.games, self.events, self.languages)
    }
}

fn load_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}

fn parse_collection<T: DeserializeOwned>(raw: &str, label: &str) -> Result<Vec<T>, String> {
    serde_json::from_str(raw).map_err(|e| format!("Failed to parse {}: {}", label, e))
}
