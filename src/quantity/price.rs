use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Dollars per kilowatt-hour.
pub type KilowattHourPrice = Quantity<1, -1, 0>;

impl KilowattHourPrice {
    /// Whole cents, as quoted on the bill.
    #[must_use]
    pub fn cents(self) -> f64 {
        (self.0.0 * 100.0).round()
    }
}

impl Display for KilowattHourPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} $/kWh", self.0)
    }
}

impl Debug for KilowattHourPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}$/kWh", self.0)
    }
}
