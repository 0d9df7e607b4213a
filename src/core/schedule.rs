use crate::core::{
    calendar::{DayType, Season},
    tariff::Tariff,
    window::Window,
};

/// Full-day sequence of windows for one (season, day-type) combination,
/// ordered by ascending start hour.
///
/// Invariant: the windows are contiguous and cover `[0, 24)` exactly once.
#[must_use]
pub struct Schedule {
    windows: &'static [Window],
}

impl Schedule {
    /// Winter weekday and weekend schedules are identical under the current
    /// contract; they stay separate entries so selection remains a total
    /// 2x2 lookup.
    const WINTER_WEEKDAY: Self = Self {
        windows: &[
            Window::new(0, 8, Tariff::OffPeak),
            Window::new(8, 16, Tariff::SuperOffPeak),
            Window::new(16, 21, Tariff::MidPeak),
            Window::new(21, 24, Tariff::OffPeak),
        ],
    };

    const WINTER_WEEKEND: Self = Self {
        windows: &[
            Window::new(0, 8, Tariff::OffPeak),
            Window::new(8, 16, Tariff::SuperOffPeak),
            Window::new(16, 21, Tariff::MidPeak),
            Window::new(21, 24, Tariff::OffPeak),
        ],
    };

    const SUMMER_WEEKDAY: Self = Self {
        windows: &[
            Window::new(0, 16, Tariff::OffPeak),
            Window::new(16, 21, Tariff::OnPeak),
            Window::new(21, 24, Tariff::OffPeak),
        ],
    };

    const SUMMER_WEEKEND: Self = Self {
        windows: &[
            Window::new(0, 16, Tariff::OffPeak),
            Window::new(16, 21, Tariff::MidPeak),
            Window::new(21, 24, Tariff::OffPeak),
        ],
    };

    pub const fn select(season: Season, day_type: DayType) -> &'static Self {
        match (season, day_type) {
            (Season::Winter, DayType::Weekday) => &Self::WINTER_WEEKDAY,
            (Season::Winter, DayType::Weekend) => &Self::WINTER_WEEKEND,
            (Season::Summer, DayType::Weekday) => &Self::SUMMER_WEEKDAY,
            (Season::Summer, DayType::Weekend) => &Self::SUMMER_WEEKEND,
        }
    }

    pub const fn windows(&self) -> &[Window] {
        self.windows
    }

    /// The window containing the hour, `None` on a schedule gap.
    pub fn window_at(&self, hour: u32) -> Option<&Window> {
        self.windows.iter().find(|window| window.contains(hour))
    }

    /// The first window starting strictly after the hour.
    pub fn next_after(&self, hour: u32) -> Option<&Window> {
        self.windows.iter().find(|window| window.start_hour > hour)
    }

    pub fn first(&self) -> Window {
        self.windows[0]
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    const ALL: [(Season, DayType); 4] = [
        (Season::Winter, DayType::Weekday),
        (Season::Winter, DayType::Weekend),
        (Season::Summer, DayType::Weekday),
        (Season::Summer, DayType::Weekend),
    ];

    #[test]
    fn every_hour_is_covered_exactly_once() {
        for (season, day_type) in ALL {
            let schedule = Schedule::select(season, day_type);
            for hour in 0..24 {
                let matches =
                    schedule.windows().iter().filter(|window| window.contains(hour)).count();
                assert_eq!(matches, 1, "{season} {day_type} hour {hour}");
            }
        }
    }

    #[test]
    fn windows_are_contiguous_and_span_the_day() {
        for (season, day_type) in ALL {
            let schedule = Schedule::select(season, day_type);
            assert_eq!(schedule.first().start_hour, 0);
            assert_eq!(schedule.windows().last().unwrap().end_hour, 24);
            assert!(
                schedule
                    .windows()
                    .iter()
                    .tuple_windows()
                    .all(|(left, right)| left.end_hour == right.start_hour),
                "{season} {day_type}",
            );
        }
    }

    #[test]
    fn winter_schedules_match_the_contract() {
        let schedule = Schedule::select(Season::Winter, DayType::Weekday);
        let tariffs = schedule.windows().iter().map(|window| window.tariff).collect_vec();
        assert_eq!(
            tariffs,
            [Tariff::OffPeak, Tariff::SuperOffPeak, Tariff::MidPeak, Tariff::OffPeak],
        );
    }

    #[test]
    fn summer_peak_differs_between_day_types() {
        assert_eq!(
            Schedule::select(Season::Summer, DayType::Weekday).window_at(17).unwrap().tariff,
            Tariff::OnPeak,
        );
        assert_eq!(
            Schedule::select(Season::Summer, DayType::Weekend).window_at(17).unwrap().tariff,
            Tariff::MidPeak,
        );
    }
}
