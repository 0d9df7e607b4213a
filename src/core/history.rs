use std::cmp::Reverse;

use chrono::{Days, NaiveDateTime};
use serde::Serialize;

use crate::{
    core::{calendar::classify, schedule::Schedule, tariff::Tariff},
    quantity::time::Hours,
};

/// One schedule window expanded onto a concrete past day.
#[derive(Clone, Copy, Debug, Serialize)]
#[must_use]
pub struct HistoryRecord {
    pub start: NaiveDateTime,
    pub tariff: Tariff,
    pub duration: Hours,
}

/// Expands the last `days` calendar days (today included) into per-window
/// records, newest first.
pub fn generate_history(now: NaiveDateTime, days: u32) -> Vec<HistoryRecord> {
    let mut records = Vec::new();
    for day_offset in 0..u64::from(days) {
        let date = now.date().checked_sub_days(Days::new(day_offset)).unwrap();
        let (season, day_type) = classify(date);
        for window in Schedule::select(season, day_type).windows() {
            records.push(HistoryRecord {
                start: date.and_hms_opt(window.start_hour, 0, 0).unwrap(),
                tariff: window.tariff,
                duration: window.duration().into(),
            });
        }
    }
    records.sort_unstable_by_key(|record| Reverse(record.start));
    records
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use itertools::Itertools;

    use super::*;

    fn winter_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_opt(10, 0, 0).unwrap()
    }

    #[test]
    fn record_count_ok() {
        // Seven winter days with four windows each.
        assert_eq!(generate_history(winter_now(), 7).len(), 28);
    }

    #[test]
    fn newest_first() {
        let records = generate_history(winter_now(), 7);
        assert!(
            records.iter().tuple_windows().all(|(left, right)| left.start >= right.start),
        );
        // The newest record is today's last window.
        let first = records.first().unwrap();
        assert_eq!(
            first.start,
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_opt(21, 0, 0).unwrap(),
        );
        assert_eq!(first.tariff, Tariff::OffPeak);
    }

    #[test]
    fn durations_cover_the_day() {
        let records = generate_history(winter_now(), 1);
        let total: f64 = records.iter().map(|record| record.duration.0.0).sum();
        assert!((total - 24.0).abs() < f64::EPSILON);
    }
}
