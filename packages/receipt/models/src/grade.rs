//! Letter-grade taxonomy and display band definitions.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Letter grade for a receipt, derived from average CO2 per item.
///
/// Bands are ordered best to worst. Each band's threshold is the
/// *exclusive* upper bound on the average, so a value exactly at a
/// boundary falls into the next, worse band.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Grade {
    /// Average below 1 kg CO2 per item.
    #[serde(rename = "A+")]
    #[strum(serialize = "A+")]
    APlus,
    /// Average below 2 kg.
    A,
    /// Average below 3 kg.
    B,
    /// Average below 5 kg.
    C,
    /// Average below 8 kg.
    D,
    /// Average of 8 kg or more.
    F,
}

impl Grade {
    /// Returns the human-readable label shown next to the letter.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::APlus => "Excellent",
            Self::A => "Great",
            Self::B => "Good",
            Self::C => "Average",
            Self::D => "Below Average",
            Self::F => "Needs Work",
        }
    }

    /// Returns the color tag the presentation layer renders this grade in.
    #[must_use]
    pub const fn color(self) -> ImpactColor {
        match self {
            Self::APlus | Self::A => ImpactColor::Emerald,
            Self::B | Self::C => ImpactColor::Amber,
            Self::D | Self::F => ImpactColor::Rose,
        }
    }

    /// Returns the icon tag associated with this grade.
    #[must_use]
    pub const fn icon(self) -> ImpactIcon {
        match self {
            Self::APlus | Self::A => ImpactIcon::Leaf,
            Self::B | Self::C => ImpactIcon::Tree,
            Self::D | Self::F => ImpactIcon::Flame,
        }
    }

    /// Returns all grades, ordered best to worst.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::APlus, Self::A, Self::B, Self::C, Self::D, Self::F]
    }
}

/// Color tag attached to grades and item bands for the presentation layer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ImpactColor {
    /// Low impact.
    Emerald,
    /// Moderate impact.
    Amber,
    /// High impact.
    Rose,
}

/// Icon tag attached to grades and item bands for the presentation layer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ImpactIcon {
    /// Low impact.
    Leaf,
    /// Moderate impact.
    Tree,
    /// High impact.
    Flame,
}

/// Display band for a single line item, derived from its *per-unit* CO2
/// weight. Bounds are exclusive, matching [`Grade`] boundary policy.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ImpactBand {
    /// Under 1 kg CO2 per unit.
    Low,
    /// Under 3 kg CO2 per unit.
    Medium,
    /// 3 kg CO2 per unit or more.
    High,
}

impl ImpactBand {
    /// Classifies a per-unit CO2 weight into a display band.
    #[must_use]
    pub fn for_unit_co2(unit_co2: f64) -> Self {
        if unit_co2 < 1.0 {
            Self::Low
        } else if unit_co2 < 3.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Returns the color tag for this band.
    #[must_use]
    pub const fn color(self) -> ImpactColor {
        match self {
            Self::Low => ImpactColor::Emerald,
            Self::Medium => ImpactColor::Amber,
            Self::High => ImpactColor::Rose,
        }
    }

    /// Returns the icon tag for this band.
    #[must_use]
    pub const fn icon(self) -> ImpactIcon {
        match self {
            Self::Low => ImpactIcon::Leaf,
            Self::Medium => ImpactIcon::Tree,
            Self::High => ImpactIcon::Flame,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_serializes_with_plus_sign() {
        let json = serde_json::to_string(&Grade::APlus).unwrap();
        assert_eq!(json, "\"A+\"");
        assert_eq!(Grade::APlus.to_string(), "A+");
    }

    #[test]
    fn grades_ordered_best_to_worst() {
        let all = Grade::all();
        for pair in all.windows(2) {
            assert!(pair[0] < pair[1], "{:?} should rank above {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn every_grade_has_consistent_tags() {
        for grade in Grade::all() {
            // Color and icon tiers always move together.
            let expected = match grade.color() {
                ImpactColor::Emerald => ImpactIcon::Leaf,
                ImpactColor::Amber => ImpactIcon::Tree,
                ImpactColor::Rose => ImpactIcon::Flame,
            };
            assert_eq!(grade.icon(), expected);
            assert!(!grade.label().is_empty());
        }
    }

    #[test]
    fn item_band_bounds_are_exclusive() {
        assert_eq!(ImpactBand::for_unit_co2(0.99), ImpactBand::Low);
        assert_eq!(ImpactBand::for_unit_co2(1.0), ImpactBand::Medium);
        assert_eq!(ImpactBand::for_unit_co2(2.99), ImpactBand::Medium);
        assert_eq!(ImpactBand::for_unit_co2(3.0), ImpactBand::High);
    }

    #[test]
    fn band_tags_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&ImpactBand::Medium).unwrap(),
            "\"medium\""
        );
        assert_eq!(
            serde_json::to_string(&ImpactColor::Emerald).unwrap(),
            "\"emerald\""
        );
        assert_eq!(serde_json::to_string(&ImpactIcon::Leaf).unwrap(), "\"leaf\"");
    }
}
