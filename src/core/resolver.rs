use chrono::{Days, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::{
    core::{
        calendar::{DayType, Season, classify},
        schedule::Schedule,
        tariff::Tariff,
        window::Window,
    },
    prelude::*,
    quantity::price::KilowattHourPrice,
};

/// Outcome of resolving one instant against the schedule catalog.
///
/// Ephemeral: computed fresh on every call and owned by the caller.
#[derive(Clone, Copy, Debug, Serialize)]
#[must_use]
pub struct Resolution {
    pub timestamp: NaiveDateTime,
    pub season: Season,
    pub day_type: DayType,
    pub tariff: Tariff,
    pub active_window: Window,
    pub next_window: Window,
    pub next_change: NaiveDateTime,
}

impl Resolution {
    /// Price of the active tariff in the queried instant's season.
    pub fn price(&self) -> KilowattHourPrice {
        self.tariff.price(self.season)
    }
}

/// Maps the timestamp onto the active tariff window and the next transition.
///
/// Total: always returns a result. A missing window means the schedule tables
/// violate the coverage invariant; the resolver then falls back to the first
/// window of the day and logs a warning.
pub fn resolve(timestamp: NaiveDateTime) -> Resolution {
    let date = timestamp.date();
    let hour = timestamp.hour();
    let (season, day_type) = classify(date);
    let schedule = Schedule::select(season, day_type);

    let active_window = schedule.window_at(hour).copied().unwrap_or_else(|| {
        warn!(hour, "no window covers the hour, check the schedule tables");
        schedule.first()
    });

    let (next_window, next_change) = match schedule.next_after(hour) {
        Some(window) => (*window, at_hour(date, window.start_hour)),
        None => {
            // Tomorrow's day-type, and at a season boundary even the season,
            // may differ. Reclassify instead of reusing today's list.
            let tomorrow = date.checked_add_days(Days::new(1)).unwrap();
            let (season, day_type) = classify(tomorrow);
            let window = Schedule::select(season, day_type).first();
            (window, at_hour(tomorrow, window.start_hour))
        }
    };

    Resolution {
        timestamp,
        season,
        day_type,
        tariff: active_window.tariff,
        active_window,
        next_window,
        next_change,
    }
}

fn at_hour(date: NaiveDate, hour: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, 0, 0).unwrap()
}
