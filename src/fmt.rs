use std::fmt::{Debug, Display, Formatter};

use crate::quantity::price::KilowattHourPrice;

/// Rounded minor-unit rendering of a price, `0.39 $/kWh` → `39¢`.
pub struct FormattedCents(pub KilowattHourPrice);

impl Debug for FormattedCents {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedCents {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}¢", self.0.cents())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_cents_ok() {
        assert_eq!(FormattedCents(KilowattHourPrice::from(0.39)).to_string(), "39¢");
    }

    #[test]
    fn rounding_ok() {
        assert_eq!(FormattedCents(KilowattHourPrice::from(0.596)).to_string(), "60¢");
    }
}
