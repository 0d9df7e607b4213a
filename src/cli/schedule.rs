use chrono::{Local, NaiveDate};
use clap::Parser;

use crate::{
    core::{calendar::classify, schedule::Schedule},
    prelude::*,
    tables::build_schedule_table,
};

#[must_use]
#[derive(Parser)]
pub struct ScheduleArgs {
    /// Show this date instead of today.
    #[clap(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Emit the window list as JSON instead of a table.
    #[clap(long)]
    pub json: bool,
}

impl ScheduleArgs {
    pub fn run(&self) -> Result {
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        let (season, day_type) = classify(date);
        let schedule = Schedule::select(season, day_type);
        info!(%date, %season, %day_type, "selected the schedule");
        if self.json {
            println!("{}", serde_json::to_string_pretty(schedule.windows())?);
        } else {
            println!("{}", build_schedule_table(schedule, season));
        }
        Ok(())
    }
}
