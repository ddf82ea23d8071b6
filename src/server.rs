//! HTTP surface exposing the catalog as JSON.
//!
//! The snapshot is loaded once at startup and shared read-only across
//! workers; every request runs the full join/filter/sort/window pipeline
//! against it.

use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use serde::{Deserialize, Serialize};

use crate::filter::{ColumnFilter, FilterSet};
use crate::record::GameRow;
use crate::sort::{SortKey, SortOrder};
use crate::store::RecordStore;
use crate::window::{self, Viewport, Window, WindowSpec, DEFAULT_OVERSCAN};

/// Shared, immutable application state.
pub struct AppState {
    store: RecordStore,
}

impl AppState {
    pub fn new(store: RecordStore) -> Self {
        AppState { store }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }
}

fn default_row_height() -> f64 {
    40.0
}

fn default_overscan() -> usize {
    DEFAULT_OVERSCAN
}

/// Query parameters for `GET /games`.
#[derive(Debug, Deserialize)]
pub struct GamesQuery {
    /// Exact language name to filter on.
    pub language: Option<String>,
    /// Exact event name to filter on.
    pub event: Option<String>,
    /// Column to sort by (`name`, `event`, `id`).
    pub sort: Option<String>,
    /// `asc` (default) or `desc`.
    pub order: Option<String>,
    /// Viewport scroll offset in pixels.
    #[serde(default)]
    pub offset: f64,
    /// Viewport height in pixels.
    #[serde(default)]
    pub viewport: f64,
    #[serde(default = "default_row_height")]
    pub row_height: f64,
    #[serde(default = "default_overscan")]
    pub overscan: usize,
}

impl GamesQuery {
    fn filter_set(&self) -> FilterSet {
        let mut filters = FilterSet::new();
        if let Some(language) = &self.language {
            filters.push(ColumnFilter::new("language", language.clone()));
        }
        if let Some(event) = &self.event {
            filters.push(ColumnFilter::new("event", event.clone()));
        }
        filters
    }

    fn sort_key(&self) -> Option<SortKey> {
        let column = self.sort.as_ref()?;
        let order = match self.order.as_deref() {
            Some("desc") => SortOrder::Descending,
            _ => SortOrder::Ascending,
        };
        Some(SortKey {
            column: column.clone(),
            order,
        })
    }
}

/// Response payload for `GET /games`: the windowed slice of the filtered,
/// sorted catalog plus the geometry needed to reproduce the full scroll
/// extent.
#[derive(Debug, Serialize)]
pub struct GamesResponse<'a> {
    pub total: usize,
    pub window: Window,
    pub rows: Vec<GameRow<'a>>,
}

async fn list_games(state: web::Data<AppState>, query: web::Query<GamesQuery>) -> HttpResponse {
    let store = state.store();
    let filters = query.filter_set();
    let sort = query.sort_key();

    let rows = store.query(&filters, sort.as_ref());
    let total = rows.len();

    let viewport = Viewport::new(query.offset, query.viewport);
    let spec = WindowSpec::new(query.row_height).with_overscan(query.overscan);
    let win = window::compute(total, &viewport, &spec);

    let visible: Vec<GameRow<'_>> = rows[win.start..win.end].to_vec();

    HttpResponse::Ok().json(GamesResponse {
        total,
        window: win,
        rows: visible,
    })
}

async fn list_languages(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.store().distinct_language_names())
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "message": "JamTable catalog server is running"
    }))
}

/// Start the HTTP server over an already-loaded store.
pub async fn run_server(host: &str, port: u16, store: RecordStore) -> std::io::Result<()> {
    let state = web::Data::new(AppState::new(store));

    println!("JamTable Catalog Server");
    println!("====================================");
    println!("Games:     http://{}:{}/games", host, port);
    println!("Languages: http://{}:{}/languages", host, port);
    println!("Health:    http://{}:{}/health", host, port);
    println!("====================================");
    println!();

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            // Enable logger
            .wrap(middleware::Logger::default())
            // CORS for development
            .wrap(
                actix_cors::Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .route("/games", web::get().to(list_games))
            .route("/languages", web::get().to(list_languages))
            .route("/health", web::get().to(health_check))
    })
    .bind((host, port))?
    .run()
    .await
}
