//! Fixed fallback receipt for demo resilience.

use carbon_receipt_models::{LineItem, Receipt};

/// Returns the literal fallback receipt substituted when the analysis
/// service is unreachable, so the caller always has a receipt to render.
///
/// The date label reflects the current local date; it is display-only
/// and never feeds the rating computation.
#[must_use]
pub fn fallback_receipt() -> Receipt {
    Receipt {
        store_name: "EcoMart Groceries".to_string(),
        date: chrono::Local::now().format("%-m/%-d/%Y").to_string(),
        items: vec![
            LineItem::new("Organic Bananas", 1, 0.48),
            LineItem::new("Whole Milk 1L", 2, 1.6),
            LineItem::new("Ground Beef 500g", 1, 13.5),
            LineItem::new("Rice 1kg", 1, 2.7),
            LineItem::new("Fresh Tomatoes", 1, 0.9),
            LineItem::new("Cheddar Cheese 200g", 1, 2.1),
            LineItem::new("Eggs (12 pack)", 1, 1.6),
            LineItem::new("Bread Loaf", 1, 0.8),
        ],
    }
}
