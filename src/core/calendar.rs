use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

/// Tariff season: winter covers October through May, summer June through
/// September.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Summer,
}

impl Season {
    pub const fn from_month(month: u32) -> Self {
        if month >= 10 || month <= 5 { Self::Winter } else { Self::Summer }
    }
}

impl Display for Season {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Winter => write!(f, "Winter"),
            Self::Summer => write!(f, "Summer"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    Weekday,
    Weekend,
}

impl Display for DayType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weekday => write!(f, "Weekday"),
            Self::Weekend => write!(f, "Weekend"),
        }
    }
}

/// Classifies a calendar day for schedule selection.
///
/// The single classification call site: the resolver, the history generator,
/// and price rendering all go through here.
pub fn classify(date: NaiveDate) -> (Season, DayType) {
    let season = Season::from_month(date.month());
    let day_type = match date.weekday() {
        Weekday::Sat | Weekday::Sun => DayType::Weekend,
        _ => DayType::Weekday,
    };
    (season, day_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_month_is_classified() {
        for month in 1..=12 {
            let expected =
                if (6..=9).contains(&month) { Season::Summer } else { Season::Winter };
            assert_eq!(Season::from_month(month), expected, "month {month}");
        }
    }

    #[test]
    fn weekend_ok() {
        // A winter Saturday and Sunday.
        assert_eq!(
            classify(NaiveDate::from_ymd_opt(2025, 1, 18).unwrap()),
            (Season::Winter, DayType::Weekend),
        );
        assert_eq!(
            classify(NaiveDate::from_ymd_opt(2025, 1, 19).unwrap()),
            (Season::Winter, DayType::Weekend),
        );
    }

    #[test]
    fn weekday_ok() {
        // A summer Wednesday.
        assert_eq!(
            classify(NaiveDate::from_ymd_opt(2025, 7, 16).unwrap()),
            (Season::Summer, DayType::Weekday),
        );
    }
}
