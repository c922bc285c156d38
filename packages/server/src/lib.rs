#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the carbon receipt scanner.
//!
//! Accepts receipt images from the frontend, forwards them to the
//! external analysis service, derives the carbon rating once
//! server-side, and returns the complete receipt with totals, grade,
//! and comparison for display.

mod handlers;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use carbon_receipt_analysis::AnalysisClient;

/// Shared application state.
pub struct AppState {
    /// Client for the external receipt analysis service.
    pub analysis: AnalysisClient,
}

/// Starts the carbon receipt API server.
///
/// Reads `BIND_ADDR`/`PORT` for the listen address and `ANALYZE_URL`
/// for the analysis service endpoint. This is a regular async function;
/// the caller provides the runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind
/// or encounters a runtime error.
pub async fn run_server() -> std::io::Result<()> {
    let analysis = AnalysisClient::from_env();
    log::info!("Using analysis service at {}", analysis.url());

    let state = web::Data::new(AppState { analysis });

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
                    .route("/analyze-receipt", web::post().to(handlers::analyze_receipt)),
            )
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
