#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the carbon receipt server.
//!
//! These types are serialized to JSON for the REST API. They are
//! separate from the domain types so the wire contract can evolve
//! independently; field names match what the original frontend consumes
//! (`storeName`, `totalCO2`, `averageCO2PerItem`, ...).

use carbon_receipt_models::{Grade, ImpactBand, ImpactColor, ImpactIcon, RatingResult, Receipt};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Request body for `POST /api/analyze-receipt`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeReceiptRequest {
    /// Receipt image as a `data:<mime>;base64,...` URL. Missing or
    /// empty is rejected with HTTP 400.
    pub image: Option<String>,
}

/// A line item as rendered on the API receipt, with its derived line
/// total and display band.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLineItem {
    /// Display label for the product.
    pub name: String,
    /// Number of units purchased.
    pub quantity: u32,
    /// Kilograms of CO2 per single unit.
    pub co2: f64,
    /// `co2 × quantity`.
    #[serde(rename = "lineCO2")]
    pub line_co2: f64,
    /// Display band derived from the per-unit weight.
    pub band: ImpactBand,
}

/// The letter grade with its presentation tags.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGrade {
    /// Letter grade, `"A+"` through `"F"`.
    pub grade: Grade,
    /// Human-readable label ("Excellent" ... "Needs Work").
    pub label: String,
    /// Color tag for the presentation layer.
    pub color: ImpactColor,
    /// Icon tag for the presentation layer.
    pub icon: ImpactIcon,
}

impl From<Grade> for ApiGrade {
    fn from(grade: Grade) -> Self {
        Self {
            grade,
            label: grade.label().to_string(),
            color: grade.color(),
            icon: grade.icon(),
        }
    }
}

/// Response body for `POST /api/analyze-receipt`: the analyzed receipt
/// with its rating derived once, server-side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiReceipt {
    /// Store name label.
    pub store_name: String,
    /// Purchase date label (display-only).
    pub date: String,
    /// Line items in display order.
    pub items: Vec<ApiLineItem>,
    /// Total kilograms of CO2 across all items.
    #[serde(rename = "totalCO2")]
    pub total_co2: f64,
    /// Total unit count across all items.
    pub total_item_count: u64,
    /// Average CO2 per item (0 for an empty receipt).
    #[serde(rename = "averageCO2PerItem")]
    pub average_co2_per_item: f64,
    /// Letter grade with presentation tags.
    pub grade: ApiGrade,
    /// Driving-distance equivalence statement.
    pub comparison: String,
}

impl ApiReceipt {
    /// Builds the wire receipt from a domain receipt and its rating.
    ///
    /// The rating is consumed as computed upstream; nothing is
    /// recomputed here beyond per-line display values.
    #[must_use]
    pub fn from_rated(receipt: Receipt, rating: RatingResult) -> Self {
        let items = receipt
            .items
            .into_iter()
            .map(|item| ApiLineItem {
                line_co2: item.line_co2(),
                band: ImpactBand::for_unit_co2(item.co2),
                name: item.name,
                quantity: item.quantity,
                co2: item.co2,
            })
            .collect();

        Self {
            store_name: receipt.store_name,
            date: receipt.date,
            items,
            total_co2: rating.total_co2,
            total_item_count: rating.total_item_count,
            average_co2_per_item: rating.average_co2_per_item,
            grade: ApiGrade::from(rating.grade),
            comparison: rating.comparison,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carbon_receipt_models::LineItem;
    use carbon_receipt_rating::rate_receipt;

    fn sample_receipt() -> Receipt {
        Receipt {
            store_name: "EcoMart Groceries".to_string(),
            date: "1/11/2026".to_string(),
            items: vec![
                LineItem::new("Organic Bananas", 1, 0.48),
                LineItem::new("Whole Milk 1L", 2, 1.6),
                LineItem::new("Ground Beef 500g", 1, 13.5),
            ],
        }
    }

    #[test]
    fn api_receipt_carries_rating_unchanged() {
        let receipt = sample_receipt();
        let rating = rate_receipt(&receipt);
        let expected_total = rating.total_co2;

        let api = ApiReceipt::from_rated(receipt, rating);
        assert!((api.total_co2 - expected_total).abs() < 1e-9);
        assert_eq!(api.total_item_count, 4);
        assert_eq!(api.grade.grade, Grade::C);
        assert_eq!(api.grade.label, "Average");
    }

    #[test]
    fn line_items_get_bands_and_line_totals() {
        let receipt = sample_receipt();
        let rating = rate_receipt(&receipt);
        let api = ApiReceipt::from_rated(receipt, rating);

        assert_eq!(api.items[0].band, ImpactBand::Low);
        assert_eq!(api.items[1].band, ImpactBand::Medium);
        assert_eq!(api.items[2].band, ImpactBand::High);
        assert!((api.items[1].line_co2 - 3.2).abs() < 1e-9);
    }

    #[test]
    fn wire_field_names_match_the_frontend_contract() {
        let receipt = sample_receipt();
        let rating = rate_receipt(&receipt);
        let value = serde_json::to_value(ApiReceipt::from_rated(receipt, rating)).unwrap();

        assert!(value.get("storeName").is_some());
        assert!(value.get("totalCO2").is_some());
        assert!(value.get("totalItemCount").is_some());
        assert!(value.get("averageCO2PerItem").is_some());
        assert!(value.get("comparison").is_some());
        assert!(value["items"][0].get("lineCO2").is_some());
        assert_eq!(value["items"][0]["band"], "low");
        assert_eq!(value["grade"]["grade"], "C");
        assert_eq!(value["grade"]["color"], "amber");
        assert_eq!(value["grade"]["icon"], "tree");
    }

    #[test]
    fn missing_image_deserializes_as_none() {
        let body: AnalyzeReceiptRequest = serde_json::from_str("{}").unwrap();
        assert!(body.image.is_none());
    }
}
