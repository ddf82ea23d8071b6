//! Windowed Scrolling Example
//!
//! This example demonstrates:
//! - Computing the materialized window for a scrolled viewport
//! - The filler extents that stand in for unrendered rows
//! - Recomputing the window after a filter change

use jamtable::{window, ColumnFilter, FilterSet, Game, LanguageUsage, RecordStore, Viewport, WindowSpec};
use std::collections::HashMap;

fn main() {
    println!("=== JamTable Windowing Example ===\n");

    // 1. A store with a few thousand games
    println!("1. Building store with 5000 games...");
    let games: Vec<Game> = (0..5000)
        .map(|i| Game {
            id: i,
            name: format!("Game {:04}", i),
            path: format!("/games/{}", i),
            body: String::new(),
            parent_event_id: 1,
            meta: HashMap::new(),
        })
        .collect();
    let languages: Vec<LanguageUsage> = (0..5000)
        .filter(|i| i % 7 == 0)
        .map(|i| LanguageUsage {
            game_id: i,
            languages: vec![HashMap::from([("Rust".to_string(), 100u64)])],
        })
        .collect();
    let store = RecordStore::new(games, Vec::new(), languages);
    println!("   Done\n");

    // 2. Window the unfiltered list at a mid-scroll position
    let spec = WindowSpec::new(40.0).with_overscan(100);
    let viewport = Viewport::new(60_000.0, 800.0);

    let rows = store.query(&FilterSet::new(), None);
    let win = window::compute(rows.len(), &viewport, &spec);
    println!("2. Unfiltered ({} rows):", rows.len());
    println!("   materialize rows [{}, {})", win.start, win.end);
    println!("   leading filler  {:>9.0} px", win.leading_height);
    println!("   trailing filler {:>9.0} px\n", win.trailing_height);

    // 3. Apply a filter and recompute from scratch - the window always
    //    derives from the current filtered count, never a stale one.
    let filters = FilterSet::new().with(ColumnFilter::new("language", "Rust"));
    let rows = store.query(&filters, None);
    let win = window::compute(rows.len(), &viewport, &spec);
    println!("3. Filtered to Rust ({} rows):", rows.len());
    println!("   materialize rows [{}, {})", win.start, win.end);
    println!("   leading filler  {:>9.0} px", win.leading_height);
    println!("   trailing filler {:>9.0} px", win.trailing_height);
}
