//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use fairway_core::{SeasonQuery, TeeSheetOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Report {
    /// Season points table
    #[default]
    Standings,
    /// Course and playing handicaps for the round
    Handicaps,
    /// Groups and tee times for the round
    #[value(alias = "teesheet")]
    TeeSheet,
}

/// Season standings, handicaps and tee sheets from a society snapshot.
#[derive(Debug, Clone, Parser)]
#[command(name = "fairway", version)]
pub struct Args {
    /// JSON export of the roster and events.
    pub snapshot: PathBuf,

    /// Report to print.
    #[arg(value_enum, default_value_t = Report::Standings)]
    pub report: Report,

    /// Season to rank (default: config, then current year).
    #[arg(long)]
    pub season: Option<i32>,

    /// Order of Merit events only.
    #[arg(long = "oom")]
    pub oom_only: bool,

    /// Event whose tees and entrants to use.
    #[arg(long = "event", value_name = "ID")]
    pub event_id: Option<String>,

    /// First tee time, `HH:MM`.
    #[arg(long = "start", value_name = "HH:MM")]
    pub start_time: Option<String>,

    /// Minutes between groups.
    #[arg(long, allow_negative_numbers = true)]
    pub interval: Option<i64>,

    /// Keep the group numbers in the snapshot.
    #[arg(long)]
    pub pre_grouped: bool,

    /// Config file to load instead of the default.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Gets the CLI arguments for the current process.
    pub fn get() -> Self {
        Self::parse()
    }

    /// Overrides the configured season query with `--season` / `--oom`.
    pub fn override_query(&self, query: &mut SeasonQuery) {
        if let Some(season) = self.season {
            query.season = season;
        }

        if self.oom_only {
            query.oom_only = true;
        }
    }

    /// Overrides the configured tee sheet layout with `--start` / `--interval`.
    pub fn override_tee_sheet(&self, options: &mut TeeSheetOptions) {
        if let Some(ref start) = self.start_time {
            options.start_time = Some(start.clone());
        }

        if self.interval.is_some() {
            options.interval_minutes = self.interval;
        }
    }
}
