use chrono::{Local, NaiveDateTime};
use clap::Parser;

use crate::{core::resolver::resolve, prelude::*, tables::build_rate_table};

#[must_use]
#[derive(Parser)]
pub struct RateArgs {
    /// Resolve this local timestamp instead of the current one.
    #[clap(long, value_name = "YYYY-MM-DDTHH:MM:SS")]
    pub at: Option<NaiveDateTime>,

    /// Emit the resolution as JSON instead of a table.
    #[clap(long)]
    pub json: bool,
}

impl RateArgs {
    pub fn run(&self) -> Result {
        let timestamp = self.at.unwrap_or_else(|| Local::now().naive_local());
        let resolution = resolve(timestamp);
        info!(tariff = %resolution.tariff, until = %resolution.next_change, "resolved");
        if self.json {
            println!("{}", serde_json::to_string_pretty(&resolution)?);
        } else {
            println!("{}", build_rate_table(&resolution));
        }
        Ok(())
    }
}
