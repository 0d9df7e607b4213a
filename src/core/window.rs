use std::fmt::{Display, Formatter};

use chrono::TimeDelta;
use serde::Serialize;

use crate::core::tariff::Tariff;

/// Contiguous hour-of-day range during which one tariff applies.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[must_use]
pub struct Window {
    /// Inclusive, `0..=23`.
    pub start_hour: u32,

    /// Exclusive, `1..=24`.
    pub end_hour: u32,

    pub tariff: Tariff,
}

impl Window {
    pub const fn new(start_hour: u32, end_hour: u32, tariff: Tariff) -> Self {
        Self { start_hour, end_hour, tariff }
    }

    #[must_use]
    pub const fn contains(self, hour: u32) -> bool {
        (self.start_hour <= hour) && (hour < self.end_hour)
    }

    #[must_use]
    pub fn duration(self) -> TimeDelta {
        TimeDelta::hours(i64::from(self.end_hour) - i64::from(self.start_hour))
    }
}

impl Display for Window {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:00 - {:02}:00", self.start_hour, self.end_hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_ok() {
        let window = Window::new(16, 21, Tariff::MidPeak);
        assert!(!window.contains(15));
        assert!(window.contains(16));
        assert!(window.contains(20));
        assert!(!window.contains(21));
    }

    #[test]
    fn duration_ok() {
        assert_eq!(Window::new(8, 16, Tariff::SuperOffPeak).duration(), TimeDelta::hours(8));
    }

    #[test]
    fn display_ok() {
        assert_eq!(Window::new(0, 8, Tariff::OffPeak).to_string(), "00:00 - 08:00");
    }
}
