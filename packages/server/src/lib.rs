#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the incident dashboard.
//!
//! Serves the JSON endpoints the dashboard frontend reads (filter
//! options, summary cards, distributions, trends, map points, forecast)
//! and the static frontend bundle. The record snapshot is loaded once at
//! startup and shared read-only across all requests; every request
//! re-runs the pure pipeline against it.

mod handlers;

use std::path::Path;
use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use dorset_dash_analytics::forecast::{Forecaster, SeasonalNaive};
use dorset_dash_store::RecordStore;

/// Shared application state.
pub struct AppState {
    /// The immutable incident snapshot.
    pub store: Arc<RecordStore>,
    /// The configured forecasting model behind the forecast boundary.
    pub forecaster: Arc<dyn Forecaster>,
}

/// Starts the dashboard API server.
///
/// Loads the incident extract from `DATA_PATH` (default
/// `data/incidents.csv`), then binds from `BIND_ADDR`/`PORT` (defaults
/// `127.0.0.1:8080`). A failed load is fatal: the dashboard has nothing
/// to serve without its dataset.
///
/// # Errors
///
/// Returns an error if the extract cannot be loaded or the HTTP server
/// fails to bind or run.
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let data_path = std::env::var("DATA_PATH").unwrap_or_else(|_| "data/incidents.csv".to_string());
    let store = match RecordStore::load(Path::new(&data_path)) {
        Ok(store) => store,
        Err(e) => {
            log::error!("Failed to load incident extract from {data_path}: {e}");
            return Err(std::io::Error::other(e));
        }
    };

    let state = web::Data::new(AppState {
        store: Arc::new(store),
        forecaster: Arc::new(SeasonalNaive),
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/filters", web::get().to(handlers::filters))
                    .route("/summary", web::get().to(handlers::summary))
                    .route("/distribution", web::get().to(handlers::distribution))
                    .route("/top-crimes", web::get().to(handlers::top_crimes))
                    .route("/trends", web::get().to(handlers::trends))
                    .route("/map", web::get().to(handlers::map_points))
                    .route("/forecast", web::get().to(handlers::forecast)),
            )
            // Serve frontend static files (production)
            .service(Files::new("/", "app/dist").index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
