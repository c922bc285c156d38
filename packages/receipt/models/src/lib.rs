#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Core domain types for the carbon receipt scanner.
//!
//! This crate defines the canonical receipt and rating vocabulary shared
//! across the system: scanned line items, receipts, the letter-grade
//! taxonomy, per-item impact bands, and the image payload exchanged with
//! the external analysis service.

mod grade;
mod image;
mod receipt;

pub use grade::{Grade, ImpactBand, ImpactColor, ImpactIcon};
pub use image::{ImageDecodeError, ImagePayload};
pub use receipt::{LineItem, RatingResult, Receipt};
