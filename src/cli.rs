mod history;
mod rate;
mod schedule;
mod timeline;

use clap::{Parser, Subcommand};

pub use self::{
    history::HistoryArgs,
    rate::RateArgs,
    schedule::ScheduleArgs,
    timeline::TimelineArgs,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve the active tariff and the next rate change.
    Rate(RateArgs),

    /// Show the full schedule for one day.
    Schedule(ScheduleArgs),

    /// Expand past days into a rate history.
    History(HistoryArgs),

    /// Preview upcoming entries an hour apart.
    Timeline(TimelineArgs),
}
