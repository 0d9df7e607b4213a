use comfy_table::{Attribute, Cell, CellAlignment, Table, modifiers, presets};

use crate::{
    core::{
        calendar::{Season, classify},
        history::HistoryRecord,
        resolver::Resolution,
        schedule::Schedule,
        tariff::Tariff,
    },
    fmt::FormattedCents,
    quantity::price::KilowattHourPrice,
};

fn styled() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn tariff_cell(tariff: Tariff) -> Cell {
    Cell::new(tariff).fg(tariff.color())
}

fn price_cell(price: KilowattHourPrice) -> Cell {
    Cell::new(format!("{price} ({})", FormattedCents(price)))
        .set_alignment(CellAlignment::Right)
}

pub fn build_rate_table(resolution: &Resolution) -> Table {
    let mut table = styled();
    table.set_header(vec!["Time", "Season", "Day", "Tariff", "Price", "Window", "Next change"]);
    table.add_row(vec![
        Cell::new(resolution.timestamp.format("%b %d %H:%M")).add_attribute(Attribute::Dim),
        Cell::new(resolution.season),
        Cell::new(resolution.day_type),
        tariff_cell(resolution.tariff),
        price_cell(resolution.price()),
        Cell::new(resolution.active_window),
        Cell::new(format!(
            "{} at {}",
            resolution.next_window.tariff,
            resolution.next_change.format("%-I:%M %p"),
        )),
    ]);
    table
}

pub fn build_schedule_table(schedule: &Schedule, season: Season) -> Table {
    let mut table = styled();
    table.set_header(vec!["Start", "End", "Tariff", "Price", "Kind"]);
    for window in schedule.windows() {
        table.add_row(vec![
            Cell::new(format!("{:02}:00", window.start_hour)),
            Cell::new(format!("{:02}:00", window.end_hour)).add_attribute(Attribute::Dim),
            tariff_cell(window.tariff),
            price_cell(window.tariff.price(season)),
            Cell::new(if window.tariff.is_peak() { "peak" } else { "off-peak" }),
        ]);
    }
    table
}

pub fn build_history_table(records: &[HistoryRecord]) -> Table {
    let mut table = styled();
    table.set_header(vec!["Start", "Tariff", "Price", "Duration"]);
    for record in records {
        // Price display follows the record's own season, not today's.
        let (season, _) = classify(record.start.date());
        table.add_row(vec![
            Cell::new(record.start.format("%b %d %H:%M")).add_attribute(Attribute::Dim),
            tariff_cell(record.tariff),
            price_cell(record.tariff.price(season)),
            Cell::new(record.duration).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_timeline_table(entries: &[Resolution]) -> Table {
    let mut table = styled();
    table.set_header(vec!["Time", "Tariff", "Price", "Window", "Next change"]);
    for resolution in entries {
        let same_day = resolution.next_change.date() == resolution.timestamp.date();
        table.add_row(vec![
            Cell::new(resolution.timestamp.format("%b %d %H:%M")),
            tariff_cell(resolution.tariff),
            price_cell(resolution.price()),
            Cell::new(resolution.active_window).add_attribute(Attribute::Dim),
            Cell::new(if same_day {
                resolution.next_change.format("%-I:%M %p").to_string()
            } else {
                resolution.next_change.format("%b %d %-I:%M %p").to_string()
            }),
        ]);
    }
    table
}
