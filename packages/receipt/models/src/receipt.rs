//! Receipt and rating result types.

use serde::{Deserialize, Serialize};

use crate::Grade;

/// One purchased product on a scanned receipt.
///
/// `co2` is kilograms of CO2 *per single unit*; multiply by `quantity`
/// for the line total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Display label for the product.
    pub name: String,
    /// Number of units purchased.
    pub quantity: u32,
    /// Kilograms of CO2 per single unit.
    pub co2: f64,
}

impl LineItem {
    /// Creates a new line item.
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: u32, co2: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            co2,
        }
    }

    /// Returns the CO2 contribution of this line (`co2 × quantity`).
    #[must_use]
    pub fn line_co2(&self) -> f64 {
        self.co2 * f64::from(self.quantity)
    }
}

/// A scanned receipt: store metadata plus an ordered list of line items.
///
/// Item order is display-relevant and preserved as delivered by the
/// analysis service. The `date` field is a display-only label and never
/// feeds the rating computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Store name label.
    pub store_name: String,
    /// Purchase date label (display-only).
    pub date: String,
    /// Purchased items, in display order.
    pub items: Vec<LineItem>,
}

/// Derived aggregate metrics and qualitative rating for one receipt.
///
/// Computed once per receipt by the rating engine and passed down to
/// presentation read-only; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingResult {
    /// Total kilograms of CO2 across all items.
    #[serde(rename = "totalCO2")]
    pub total_co2: f64,
    /// Total unit count across all items. `u64` so summing many
    /// large-quantity lines cannot overflow.
    pub total_item_count: u64,
    /// `total_co2 / total_item_count`, or `0` for an empty receipt.
    #[serde(rename = "averageCO2PerItem")]
    pub average_co2_per_item: f64,
    /// Letter grade derived from the average.
    pub grade: Grade,
    /// Human-readable driving-distance equivalence statement.
    pub comparison: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_co2_multiplies_by_quantity() {
        let item = LineItem::new("Whole Milk 1L", 2, 1.6);
        assert!((item.line_co2() - 3.2).abs() < 1e-9);
    }

    #[test]
    fn receipt_round_trips_wire_names() {
        let json = r#"{
            "storeName": "EcoMart Groceries",
            "date": "1/11/2026",
            "items": [{"name": "Organic Bananas", "quantity": 1, "co2": 0.48}]
        }"#;
        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.store_name, "EcoMart Groceries");
        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.items[0].quantity, 1);

        let back = serde_json::to_value(&receipt).unwrap();
        assert!(back.get("storeName").is_some());
        assert!(back["items"][0].get("co2").is_some());
    }

    #[test]
    fn rating_result_uses_original_co2_field_names() {
        let rating = RatingResult {
            total_co2: 25.28,
            total_item_count: 9,
            average_co2_per_item: 25.28 / 9.0,
            grade: Grade::B,
            comparison: "Equivalent to driving 120 km in a car".to_string(),
        };
        let value = serde_json::to_value(&rating).unwrap();
        assert!(value.get("totalCO2").is_some());
        assert!(value.get("averageCO2PerItem").is_some());
        assert!(value.get("totalItemCount").is_some());
        assert_eq!(value["grade"], "B");
    }
}
