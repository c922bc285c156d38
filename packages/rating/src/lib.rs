#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Pure carbon rating engine.
//!
//! Maps a sequence of scanned line items to aggregate metrics and a
//! qualitative letter grade. Every function here is synchronous,
//! stateless, and total over well-typed input including the empty list;
//! calling the engine twice on identical input yields identical output.

use carbon_receipt_models::{Grade, LineItem, RatingResult, Receipt};
use serde::{Deserialize, Serialize};

/// Emission factor for an average car, in kilograms of CO2 per kilometer
/// driven. Used to convert a receipt's total into an equivalent driving
/// distance.
pub const CAR_KG_CO2_PER_KM: f64 = 0.21;

/// Aggregate totals over a sequence of line items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Sum of `co2 × quantity` across all items, in kilograms.
    #[serde(rename = "totalCO2")]
    pub total_co2: f64,
    /// Sum of quantities across all items. Accumulated in `u64` so
    /// large per-item quantities cannot overflow the sum.
    pub total_item_count: u64,
    /// `total_co2 / total_item_count`, or `0` when the count is zero.
    #[serde(rename = "averageCO2PerItem")]
    pub average_co2_per_item: f64,
}

/// Sums CO2 mass and unit counts over a sequence of line items.
///
/// The empty sequence yields all zeros; the average is guarded against
/// division by zero. Rounding is a display concern and not applied here.
#[must_use]
pub fn compute_totals(items: &[LineItem]) -> Totals {
    let total_co2: f64 = items.iter().map(LineItem::line_co2).sum();
    let total_item_count: u64 = items.iter().map(|item| u64::from(item.quantity)).sum();
    #[allow(clippy::cast_precision_loss)]
    let average_co2_per_item = if total_item_count > 0 {
        total_co2 / total_item_count as f64
    } else {
        0.0
    };

    Totals {
        total_co2,
        total_item_count,
        average_co2_per_item,
    }
}

/// Maps an average CO2-per-item value onto a letter grade.
///
/// Comparisons are strict less-than against each band's upper bound, so
/// a value exactly at a boundary (e.g. exactly `1.0`) falls into the
/// next, worse band. This boundary policy is load-bearing for output
/// compatibility and must not change.
#[must_use]
pub fn grade_for(average_co2_per_item: f64) -> Grade {
    if average_co2_per_item < 1.0 {
        Grade::APlus
    } else if average_co2_per_item < 2.0 {
        Grade::A
    } else if average_co2_per_item < 3.0 {
        Grade::B
    } else if average_co2_per_item < 5.0 {
        Grade::C
    } else if average_co2_per_item < 8.0 {
        Grade::D
    } else {
        Grade::F
    }
}

/// Renders a total CO2 mass as an equivalent driving distance.
///
/// `km = total_co2 / 0.21`, rounded to the nearest whole kilometer.
#[must_use]
pub fn comparison_text(total_co2: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let km = (total_co2 / CAR_KG_CO2_PER_KM).round() as i64;
    format!("Equivalent to driving {km} km in a car")
}

/// Derives the complete rating for one receipt.
///
/// This is the single ownership boundary for totals: they are computed
/// here, once, and passed down to presentation as read-only data.
#[must_use]
pub fn rate_receipt(receipt: &Receipt) -> RatingResult {
    let totals = compute_totals(&receipt.items);
    RatingResult {
        total_co2: totals.total_co2,
        total_item_count: totals.total_item_count,
        average_co2_per_item: totals.average_co2_per_item,
        grade: grade_for(totals.average_co2_per_item),
        comparison: comparison_text(totals.total_co2),
    }
}
