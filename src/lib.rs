//! JamTable - Game-Jam Submission Catalog Engine
//!
//! Joins three independently-sourced record sets (games, events, languages)
//! by foreign key and serves a sortable, filterable, windowed view over the
//! joined rows. The dataset is an immutable snapshot loaded once per
//! session; every stage of the pipeline (join, filter, sort, window) is a
//! pure function over it.

pub mod filter;
pub mod loader;
pub mod record;
pub mod sort;
pub mod store;
pub mod window;

pub use filter::{ColumnFilter, FilterSet, LANGUAGE_PLACEHOLDER};
pub use loader::Snapshot;
pub use record::{Event, Game, GameRow, LanguageUsage};
pub use sort::{sort_rows, SortKey, SortOrder};
pub use store::RecordStore;
pub use window::{Viewport, Window, WindowSpec, DEFAULT_OVERSCAN};

// HTTP server module - only when server feature is enabled
#[cfg(feature = "server")]
pub mod server;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use std::collections::HashMap;

    fn game(id: i64, name: &str, parent: i64) -> Game {
        Game {
            id,
            name: name.to_string(),
            path: format!("/games/{}", id),
            body: String::new(),
            parent_event_id: parent,
            meta: HashMap::new(),
        }
    }

    fn usage(game_id: i64, entries: &[(&str, u64)]) -> LanguageUsage {
        LanguageUsage {
            game_id,
            languages: vec![entries
                .iter()
                .map(|(name, weight)| (name.to_string(), *weight))
                .collect()],
        }
    }

    /// Two games, one orphan event reference, no language data at all.
    #[test]
    fn test_orphan_references_and_empty_language_data() {
        let store = RecordStore::new(
            vec![game(1, "A", 10), game(2, "B", 99)],
            vec![Event { id: 10, name: "LD48".to_string(), path: "/ld48".to_string() }],
            Vec::new(),
        );

        assert_eq!(store.resolve_event(&store.games()[0]), Some("LD48"));
        assert_eq!(store.resolve_event(&store.games()[1]), None);
        assert!(store.distinct_language_names().is_empty());

        let filters = FilterSet::new().with(ColumnFilter::new("language", "C++"));
        assert_eq!(store.query(&filters, None).len(), 0);
    }

    #[test]
    fn test_full_pipeline_filter_sort_window() {
        let games: Vec<Game> = (1..=200)
            .map(|i| game(i, &format!("Game {:03}", 201 - i), 10 + (i % 2)))
            .collect();
        let events = vec![
            Event { id: 10, name: "LD48".to_string(), path: "/ld48".to_string() },
            Event { id: 11, name: "LD50".to_string(), path: "/ld50".to_string() },
        ];
        // Even-numbered games are written in Lua, odd in C++.
        let languages: Vec<LanguageUsage> = (1..=200)
            .map(|i| {
                if i % 2 == 0 {
                    usage(i, &[("Lua", 100)])
                } else {
                    usage(i, &[("C++", 100)])
                }
            })
            .collect();

        let store = RecordStore::new(games, events, languages);

        let filters = FilterSet::new().with(ColumnFilter::new("language", "Lua"));
        let key = SortKey::ascending("name");
        let rows = store.query(&filters, Some(&key));

        assert_eq!(rows.len(), 100);
        // Names count down as ids go up, so the first row after an
        // ascending name sort is the highest even id.
        assert_eq!(rows[0].game.id, 200);
        assert!(rows.windows(2).all(|w| w[0].game.name <= w[1].game.name));
        assert!(rows.iter().all(|r| r.uses_language("Lua")));

        // Window the middle of the filtered set.
        let spec = WindowSpec::new(40.0).with_overscan(10);
        let win = window::compute(rows.len(), &Viewport::new(1600.0, 400.0), &spec);
        assert_eq!(win.start, 30); // first visible 40, minus overscan
        assert_eq!(win.end, 60); // 40 + 10 visible + 10 overscan
        let extent = win.leading_height + win.len() as f64 * 40.0 + win.trailing_height;
        assert!((extent - 100.0 * 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_window_recomputed_after_filter_change() {
        let store = RecordStore::new(
            (1..=50).map(|i| game(i, &format!("G{}", i), 10)).collect(),
            Vec::new(),
            (1..=10).map(|i| usage(i, &[("Rust", 1)])).collect(),
        );

        let spec = WindowSpec::new(40.0).with_overscan(0);
        let viewport = Viewport::new(0.0, 400.0);

        let all = store.query(&FilterSet::new(), None);
        let wide = window::compute(all.len(), &viewport, &spec);
        assert_eq!(wide.end, 10);
        assert_eq!(wide.trailing_height, 40.0 * 40.0);

        // Narrowing the filter shrinks the row count; recomputing from the
        // new count keeps the fillers consistent.
        let filters = FilterSet::new().with(ColumnFilter::new("language", "Rust"));
        let narrow_rows = store.query(&filters, None);
        let narrow = window::compute(narrow_rows.len(), &viewport, &spec);
        assert_eq!(narrow_rows.len(), 10);
        assert_eq!(narrow.end, 10);
        assert_eq!(narrow.trailing_height, 0.0);
    }

    #[test]
    fn test_snapshot_to_query_round_trip() {
        let snapshot = Snapshot::from_json(
            r#"[{"Id": 1, "Name": "Moon", "Path": "/m", "Body": "", "parent": 50, "Meta": {}},
                {"Id": 2, "Name": "Cave", "Path": "/c", "Body": "", "parent": 50, "Meta": {}}]"#,
            r#"[{"Id": 50, "Name": "LD50", "Path": "/ld50"}]"#,
            r#"[{"Id": 1, "Languages": [{"C++": 120, "Lua": 10}]}]"#,
        )
        .unwrap();
        let store = snapshot.into_store();

        let names: Vec<String> = store.distinct_language_names().into_iter().collect();
        assert_eq!(names, vec!["C++", "Lua"]);

        let filters = FilterSet::new()
            .with(ColumnFilter::new("language", "C++"))
            .with(ColumnFilter::new("event", "LD50"));
        let rows = store.query(&filters, Some(&SortKey::ascending("name")));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].game.name, "Moon");
        assert_eq!(rows[0].event_name, Some("LD50"));
    }
}
