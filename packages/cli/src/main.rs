#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command line interface for the carbon receipt scanner.
//!
//! `carbon-receipt scan <image>` runs a full scan session against the
//! configured analysis service and prints the rated receipt;
//! `carbon-receipt serve` starts the HTTP API server.

mod render;

use std::path::{Path, PathBuf};

use carbon_receipt_analysis::{AnalysisClient, fallback_receipt};
use carbon_receipt_models::ImagePayload;
use carbon_receipt_scan::{ScanEvent, ScanState};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "carbon-receipt", about = "Grocery receipt carbon footprint scanner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a receipt image and print its carbon rating
    Scan {
        /// Path to the receipt image (JPEG, PNG, or WebP)
        image: PathBuf,
        /// Fail instead of substituting the fallback receipt when the
        /// analysis service is unreachable
        #[arg(long)]
        no_fallback: bool,
    },
    /// Start the HTTP API server
    Serve,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { image, no_fallback } => scan(&image, no_fallback).await,
        Commands::Serve => {
            // The server uses actix-web's runtime, so run it in a
            // blocking task to avoid nesting tokio runtimes.
            tokio::task::spawn_blocking(|| {
                actix_web::rt::System::new().block_on(carbon_receipt_server::run_server())
            })
            .await??;
            Ok(())
        }
    }
}

/// Drives one scan session: file selected, analysis settled, result
/// printed.
async fn scan(path: &Path, no_fallback: bool) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = std::fs::read(path)?;
    let payload = ImagePayload::from_bytes(mime_for(path), &bytes);

    let client = AnalysisClient::from_env();
    log::info!("Analyzing receipt via {}", client.url());

    let state = ScanState::Idle.apply(ScanEvent::FileSelected(payload))?;
    let ScanState::Analyzing { image } = &state else {
        return Err("scan session did not enter analysis".into());
    };

    let receipt = match client.analyze(image).await {
        Ok(receipt) => receipt,
        Err(e) if no_fallback => return Err(e.into()),
        Err(e) => {
            log::warn!("Analysis service unavailable, substituting fallback receipt: {e}");
            fallback_receipt()
        }
    };

    let state = state.apply(ScanEvent::AnalysisSettled(receipt))?;
    let ScanState::Result { receipt, rating } = state else {
        return Err("scan session did not settle".into());
    };

    render::print_receipt(&receipt, &rating);
    Ok(())
}

/// Guesses the MIME type from the file extension. The analysis service
/// only uses it to label the data URL, so JPEG is a safe default.
fn mime_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}
