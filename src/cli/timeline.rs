use chrono::{Local, NaiveDateTime, TimeDelta};
use clap::Parser;
use itertools::Itertools;

use crate::{core::resolver::resolve, prelude::*, tables::build_timeline_table};

#[must_use]
#[derive(Parser)]
pub struct TimelineArgs {
    /// Start the preview at this local timestamp instead of now.
    #[clap(long, value_name = "YYYY-MM-DDTHH:MM:SS")]
    pub at: Option<NaiveDateTime>,

    /// How many hourly entries to resolve.
    #[clap(long, default_value_t = 5)]
    pub entries: u32,

    /// Emit the entries as JSON instead of a table.
    #[clap(long)]
    pub json: bool,
}

impl TimelineArgs {
    pub fn run(&self) -> Result {
        let start = self.at.unwrap_or_else(|| Local::now().naive_local());
        let entries = (0..self.entries)
            .map(|offset| resolve(start + TimeDelta::hours(i64::from(offset))))
            .collect_vec();
        info!(len = entries.len(), "resolved the upcoming entries");
        if self.json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else {
            println!("{}", build_timeline_table(&entries));
        }
        Ok(())
    }
}
