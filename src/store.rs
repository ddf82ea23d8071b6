//! Record store: the immutable snapshot plus its id indexes.
//!
//! All three collections are loaded once and held for the lifetime of the
//! view. Foreign-key lookups go through `HashMap` indexes built at load time,
//! so per-row join resolution is O(1) amortized rather than a scan. A reload
//! replaces the whole store in one call; there is no partial replacement.

use crate::filter::FilterSet;
use crate::record::{Event, Game, GameRow, LanguageUsage};
use crate::sort::{sort_rows, SortKey};
use std::collections::{BTreeSet, HashMap};

/// Owns the three record collections and their id -> position indexes.
///
/// The store never mutates its collections after construction; every derived
/// view ([`GameRow`]) borrows from it and is recomputed per query.
///
/// # Examples
///
/// ```
/// use jamtable::{Event, Game, LanguageUsage, RecordStore};
/// use std::collections::HashMap;
///
/// let games = vec![Game {
///     id: 1,
///     name: "Moon Lander".to_string(),
///     path: "/moon-lander".to_string(),
///     body: String::new(),
///     parent_event_id: 50,
///     meta: HashMap::new(),
/// }];
/// let events = vec![Event { id: 50, name: "LD50".to_string(), path: "/ld50".to_string() }];
///
/// let store = RecordStore::new(games, events, Vec::<LanguageUsage>::new());
/// assert_eq!(store.resolve_event(&store.games()[0]), Some("LD50"));
/// ```
pub struct RecordStore {
    games: Vec<Game>,
    events: Vec<Event>,
    languages: Vec<LanguageUsage>,
    /// event id -> position in `events`
    event_index: HashMap<i64, usize>,
    /// game id -> position in `languages`
    language_index: HashMap<i64, usize>,
}

impl RecordStore {
    /// Build a store from the three collections, indexing them once.
    ///
    /// Duplicate ids are not expected in the snapshot; if one appears, the
    /// last record wins in the index.
    pub fn new(games: Vec<Game>, events: Vec<Event>, languages: Vec<LanguageUsage>) -> Self {
        let event_index = events
            .iter()
            .enumerate()
            .map(|(pos, event)| (event.id, pos))
            .collect();

        let language_index = languages
            .iter()
            .enumerate()
            .map(|(pos, usage)| (usage.game_id, pos))
            .collect();

        RecordStore {
            games,
            events,
            languages,
            event_index,
            language_index,
        }
    }

    /// Create a store with no records. Every query over it is empty, never
    /// an error.
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }

    /// Replace the entire snapshot. Indexes are rebuilt from scratch; no
    /// state from the previous snapshot survives.
    pub fn reload(&mut self, games: Vec<Game>, events: Vec<Event>, languages: Vec<LanguageUsage>) {
        *self = Self::new(games, events, languages);
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn language_usage(&self) -> &[LanguageUsage] {
        &self.languages
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Resolve a game's parent event name. An unmatched foreign key is a
    /// valid state and yields `None`.
    pub fn resolve_event(&self, game: &Game) -> Option<&str> {
        self.event_index
            .get(&game.parent_event_id)
            .map(|&pos| self.events[pos].name.as_str())
    }

    /// Resolve a game's language map: the first element of its usage
    /// record's sequence, or `None` if no record exists or the sequence is
    /// empty.
    pub fn resolve_languages(&self, game: &Game) -> Option<&HashMap<String, u64>> {
        self.language_index
            .get(&game.id)
            .and_then(|&pos| self.languages[pos].first_map())
    }

    /// The joined view of every game, in snapshot insertion order.
    pub fn rows(&self) -> Vec<GameRow<'_>> {
        self.games
            .iter()
            .map(|game| GameRow {
                game,
                event_name: self.resolve_event(game),
                languages: self.resolve_languages(game),
            })
            .collect()
    }

    /// Join, filter and sort in one pass: the full read pipeline short of
    /// windowing. Predicates are re-evaluated against the current snapshot
    /// on every call; nothing is memoized across filter changes.
    pub fn query(&self, filters: &FilterSet, sort: Option<&SortKey>) -> Vec<GameRow<'_>> {
        let mut rows: Vec<GameRow<'_>> = self
            .rows()
            .into_iter()
            .filter(|row| filters.matches(row))
            .collect();

        if let Some(key) = sort {
            sort_rows(&mut rows, key);
        }

        rows
    }

    /// Every distinct language name appearing in any game's first language
    /// map. Deterministically ordered for populating selection UI.
    pub fn distinct_language_names(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        for game in &self.games {
            if let Some(map) = self.resolve_languages(game) {
                for name in map.keys() {
                    names.insert(name.clone());
                }
            }
        }
        names
    }
}
