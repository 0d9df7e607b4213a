use std::fmt::{Display, Formatter};

use comfy_table::Color;
use serde::Serialize;

use crate::{core::calendar::Season, quantity::price::KilowattHourPrice};

/// Pricing tier of the time-of-use contract.
///
/// Exactly these four tiers exist; they are referenced by identity everywhere
/// and never constructed ad hoc.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tariff {
    SuperOffPeak,
    OffPeak,
    MidPeak,
    OnPeak,
}

impl Tariff {
    /// Contract price for the given season.
    pub fn price(self, season: Season) -> KilowattHourPrice {
        let dollars = match (self, season) {
            (Self::SuperOffPeak, _) => 0.35,
            (Self::OffPeak, Season::Winter) => 0.39,
            (Self::OffPeak, Season::Summer) => 0.36,
            (Self::MidPeak, Season::Winter) => 0.52,
            (Self::MidPeak, Season::Summer) => 0.48,
            // Season-invariant, as the contract defines it.
            (Self::OnPeak, _) => 0.59,
        };
        KilowattHourPrice::from(dollars)
    }

    /// Mid-Peak and On-Peak count as peak pricing.
    #[must_use]
    pub const fn is_peak(self) -> bool {
        matches!(self, Self::MidPeak | Self::OnPeak)
    }

    pub const fn color(self) -> Color {
        match self {
            Self::SuperOffPeak => Color::Green,
            Self::OffPeak => Color::Blue,
            Self::MidPeak => Color::DarkYellow,
            Self::OnPeak => Color::Red,
        }
    }
}

impl Display for Tariff {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SuperOffPeak => write!(f, "Super Off-Peak"),
            Self::OffPeak => write!(f, "Off-Peak"),
            Self::MidPeak => write!(f, "Mid-Peak"),
            Self::OnPeak => write!(f, "On-Peak"),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn prices_ok() {
        assert_relative_eq!(Tariff::SuperOffPeak.price(Season::Winter).0.0, 0.35);
        assert_relative_eq!(Tariff::SuperOffPeak.price(Season::Summer).0.0, 0.35);
        assert_relative_eq!(Tariff::OffPeak.price(Season::Winter).0.0, 0.39);
        assert_relative_eq!(Tariff::OffPeak.price(Season::Summer).0.0, 0.36);
        assert_relative_eq!(Tariff::MidPeak.price(Season::Winter).0.0, 0.52);
        assert_relative_eq!(Tariff::MidPeak.price(Season::Summer).0.0, 0.48);
        assert_relative_eq!(Tariff::OnPeak.price(Season::Winter).0.0, 0.59);
        assert_relative_eq!(Tariff::OnPeak.price(Season::Summer).0.0, 0.59);
    }

    #[test]
    fn peak_flags_ok() {
        assert!(!Tariff::SuperOffPeak.is_peak());
        assert!(!Tariff::OffPeak.is_peak());
        assert!(Tariff::MidPeak.is_peak());
        assert!(Tariff::OnPeak.is_peak());
    }
}
