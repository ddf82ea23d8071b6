//! JamTable Catalog Server
//!
//! Standalone server exposing the joined, filterable game-jam catalog as
//! JSON for frontend clients.

use jamtable::loader::Snapshot;
use jamtable::server::run_server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get host, port and snapshot directory from environment or use defaults
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .expect("PORT must be a number");
    let snapshot_dir = std::env::var("SNAPSHOT_DIR").unwrap_or_else(|_| "data".to_string());

    // Load the snapshot once; a missing or malformed snapshot serves an
    // empty catalog rather than refusing to start.
    let snapshot = match Snapshot::load(&snapshot_dir) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            eprintln!("Snapshot load failed ({}), serving empty catalog", err);
            Snapshot::default()
        }
    };
    println!(
        "Loaded snapshot from '{}': {} games, {} events, {} language records",
        snapshot_dir,
        snapshot.games.len(),
        snapshot.events.len(),
        snapshot.languages.len()
    );

    run_server(&host, port, snapshot.into_store()).await
}
