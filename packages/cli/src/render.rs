//! Terminal rendering of a rated receipt.
//!
//! Mirrors the frontend's receipt layout: items with band-colored line
//! totals, the aggregate total, the letter grade, and the driving
//! comparison. CO2 values are rounded to two decimal places at render
//! time only.

use carbon_receipt_models::{ImpactBand, ImpactColor, RatingResult, Receipt};
use console::{Style, style};

const WIDTH: usize = 44;
const LABEL_WIDTH: usize = 32;
const VALUE_WIDTH: usize = 11;

/// Maps an impact color tag onto a terminal style.
fn band_style(color: ImpactColor) -> Style {
    match color {
        ImpactColor::Emerald => Style::new().green(),
        ImpactColor::Amber => Style::new().yellow(),
        ImpactColor::Rose => Style::new().red(),
    }
}

/// Right-aligns text to the value column. Padding happens *before* any
/// styling so ANSI escape bytes never count toward the width.
fn value_cell(text: &str) -> String {
    format!("{text:>VALUE_WIDTH$}")
}

/// Left-aligns text to the label column.
fn label_cell(text: &str) -> String {
    format!("{text:<LABEL_WIDTH$}")
}

/// Prints the full receipt with its rating to stdout.
pub fn print_receipt(receipt: &Receipt, rating: &RatingResult) {
    println!();
    println!("{}", style(format!("{:^WIDTH$}", "CARBON RECEIPT")).bold());
    println!("{:^WIDTH$}", receipt.store_name);
    println!("{}", style(format!("{:^WIDTH$}", receipt.date)).dim());
    println!("{}", "-".repeat(WIDTH));
    println!("{} {}", label_cell("ITEM"), value_cell("CO2 (KG)"));

    for item in &receipt.items {
        let band = band_style(ImpactBand::for_unit_co2(item.co2).color());
        let label = if item.quantity > 1 {
            format!("{} x{}", item.name, item.quantity)
        } else {
            item.name.clone()
        };
        println!(
            "{} {}",
            label_cell(&label),
            band.apply_to(value_cell(&format!("{:.2}", item.line_co2())))
        );
    }

    println!("{}", "-".repeat(WIDTH));
    println!(
        "{} {}",
        style(label_cell("TOTAL CO2")).bold(),
        style(value_cell(&format!("{:.2} kg", rating.total_co2))).bold()
    );
    println!(
        "{} {}",
        label_cell("ITEMS"),
        value_cell(&rating.total_item_count.to_string())
    );
    println!(
        "{} {}",
        label_cell("AVG CO2 / ITEM"),
        value_cell(&format!("{:.2} kg", rating.average_co2_per_item))
    );
    println!(
        "{} {}",
        style(label_cell("GRADE")).bold(),
        band_style(rating.grade.color()).apply_to(value_cell(&format!(
            "{} ({})",
            rating.grade,
            rating.grade.label()
        )))
    );
    println!();
    println!("{}", style(&rating.comparison).italic());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_padded_before_styling() {
        let cell = value_cell("3.20");
        assert_eq!(cell.len(), VALUE_WIDTH);
        assert!(cell.ends_with("3.20"));

        let label = label_cell("ITEM");
        assert_eq!(label.len(), LABEL_WIDTH);
        assert!(label.starts_with("ITEM"));
    }

    #[test]
    fn long_values_are_not_truncated() {
        let cell = value_cell("123456789.00 kg");
        assert_eq!(cell, "123456789.00 kg");
    }
}
