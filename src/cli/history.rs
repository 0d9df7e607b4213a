use chrono::Local;
use clap::Parser;

use crate::{core::history::generate_history, prelude::*, tables::build_history_table};

#[must_use]
#[derive(Parser)]
pub struct HistoryArgs {
    /// How many past days to expand, today included.
    #[clap(long, env = "WATT_CLOCK_HISTORY_DAYS", default_value_t = 7)]
    pub days: u32,

    /// Emit the records as JSON instead of a table.
    #[clap(long)]
    pub json: bool,
}

impl HistoryArgs {
    pub fn run(&self) -> Result {
        ensure!(self.days != 0, "at least one day is required");
        let records = generate_history(Local::now().naive_local(), self.days);
        info!(len = records.len(), "expanded the schedule history");
        if self.json {
            println!("{}", serde_json::to_string_pretty(&records)?);
        } else {
            println!("{}", build_history_table(&records));
        }
        Ok(())
    }
}
