//! Catalog Query Example
//!
//! This example demonstrates:
//! - Building a record store from the three collections
//! - Resolving event and language joins
//! - Filtering by language and sorting by name

use jamtable::{ColumnFilter, Event, FilterSet, Game, LanguageUsage, RecordStore, SortKey};
use std::collections::HashMap;

fn main() {
    println!("=== JamTable Catalog Example ===\n");

    // 1. Build the snapshot collections
    println!("1. Building snapshot...");
    let games = vec![
        Game {
            id: 1,
            name: "Moon Lander".to_string(),
            path: "/events/ludum-dare/50/moon-lander".to_string(),
            body: String::new(),
            parent_event_id: 50,
            meta: HashMap::from([(
                "source".to_string(),
                "https://example.com/moon-lander".to_string(),
            )]),
        },
        Game {
            id: 2,
            name: "Cave Dive".to_string(),
            path: "/events/ludum-dare/50/cave-dive".to_string(),
            body: String::new(),
            parent_event_id: 50,
            meta: HashMap::new(),
        },
        Game {
            id: 3,
            name: "Orphan Quest".to_string(),
            path: "/events/unknown/orphan-quest".to_string(),
            body: String::new(),
            parent_event_id: 99, // no such event in the snapshot
            meta: HashMap::new(),
        },
    ];

    let events = vec![Event {
        id: 50,
        name: "Ludum Dare 50".to_string(),
        path: "/events/ludum-dare/50".to_string(),
    }];

    let languages = vec![
        LanguageUsage {
            game_id: 1,
            languages: vec![HashMap::from([
                ("C++".to_string(), 120u64),
                ("Lua".to_string(), 10u64),
            ])],
        },
        LanguageUsage {
            game_id: 2,
            languages: vec![HashMap::from([("Rust".to_string(), 900u64)])],
        },
    ];

    let store = RecordStore::new(games, events, languages);
    println!("   Store holds {} games\n", store.len());

    // 2. Inspect the joined rows
    println!("2. Joined rows:");
    for row in store.rows() {
        println!(
            "   {} (event: {}, languages: {})",
            row.game.name,
            row.event_name.unwrap_or("<none>"),
            row.languages
                .map(|m| m.len().to_string())
                .unwrap_or_else(|| "none".to_string())
        );
    }
    println!();

    // 3. Distinct language names for a filter dropdown
    println!("3. Distinct languages: {:?}\n", store.distinct_language_names());

    // 4. Filter by language, sorted by name
    println!("4. Games using C++:");
    let filters = FilterSet::new().with(ColumnFilter::new("language", "C++"));
    let key = SortKey::ascending("name");
    for row in store.query(&filters, Some(&key)) {
        println!("   {} ({})", row.game.name, row.event_name.unwrap_or("<none>"));
    }
}
