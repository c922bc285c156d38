#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Client and validation boundary for the external receipt analysis
//! service.
//!
//! The analysis service turns a receipt image into a list of line items.
//! This crate owns the single network call to it, validates every item
//! that crosses the boundary, and provides the fixed fallback receipt
//! callers may substitute when the service is unreachable. Whether to
//! substitute is the *caller's* decision; the client never masks a
//! failure by returning fallback data itself.

mod client;
mod fallback;
mod validate;

pub use client::AnalysisClient;
pub use fallback::fallback_receipt;
pub use validate::validate_items;

/// Errors that can occur while obtaining a receipt from the analysis
/// service.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// HTTP request failed (network error, DNS, connection refused).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service responded with a non-success status code.
    #[error("analysis service returned HTTP {status}")]
    Status {
        /// The status code the service returned.
        status: reqwest::StatusCode,
    },

    /// The response body could not be parsed as the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A line item failed validation at the service boundary.
    #[error("malformed line item {name:?}: {reason}")]
    MalformedLineItem {
        /// Display name of the offending item (may be empty).
        name: String,
        /// Description of what was wrong with it.
        reason: String,
    },
}
