//! Item validation at the analysis-service boundary.

use carbon_receipt_models::LineItem;

use crate::AnalysisError;

/// Checks every item delivered by the analysis service before it can
/// reach the rating engine.
///
/// Rejected: empty names, zero quantities, and negative or non-finite
/// CO2 weights. Without this boundary a `NaN` or negative weight would
/// propagate silently into the displayed totals.
///
/// # Errors
///
/// Returns [`AnalysisError::MalformedLineItem`] naming the first
/// offending item.
pub fn validate_items(items: &[LineItem]) -> Result<(), AnalysisError> {
    for item in items {
        if item.name.trim().is_empty() {
            return Err(AnalysisError::MalformedLineItem {
                name: item.name.clone(),
                reason: "empty name".to_string(),
            });
        }
        if item.quantity == 0 {
            return Err(AnalysisError::MalformedLineItem {
                name: item.name.clone(),
                reason: "quantity must be positive".to_string(),
            });
        }
        if !item.co2.is_finite() {
            return Err(AnalysisError::MalformedLineItem {
                name: item.name.clone(),
                reason: format!("CO2 weight is not finite ({})", item.co2),
            });
        }
        if item.co2 < 0.0 {
            return Err(AnalysisError::MalformedLineItem {
                name: item.name.clone(),
                reason: format!("CO2 weight is negative ({})", item.co2),
            });
        }
    }
    Ok(())
}
