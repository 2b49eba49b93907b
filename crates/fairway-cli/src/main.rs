//! Fairway - season standings, handicaps and tee sheets from a society
//! snapshot.
//!
//! Reads a JSON export of the roster and events, runs the engine and prints
//! the requested report as plain text.

mod args;
mod render;
mod snapshot;

use std::io;

use anyhow::{anyhow, Result};
use chrono::{Datelike, Local};
use fairway_core::handicap::handicaps_for_roster;
use fairway_core::standings::compute_standings;
use fairway_core::tee_sheet::{build_tee_sheet, tee_players_for};
use fairway_core::{Config, Event, TeeBlock};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use args::{Args, Report};
use snapshot::Snapshot;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let args = Args::get();
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let snapshot = Snapshot::load(&args.snapshot)?;
    info!(
        members = snapshot.members.len(),
        events = snapshot.events.len(),
        "Loaded snapshot"
    );

    let output = match args.report {
        Report::Standings => standings_report(&args, &config, &snapshot),
        Report::Handicaps => handicap_report(&args, &config, &snapshot)?,
        Report::TeeSheet => tee_sheet_report(&args, &config, &snapshot)?,
    };
    print!("{}", output);
    Ok(())
}

fn standings_report(args: &Args, config: &Config, snapshot: &Snapshot) -> String {
    let mut query = config.season_query(Local::now().year());
    args.override_query(&mut query);

    let entries = compute_standings(&snapshot.events, &snapshot.members, &query);
    let title = match (&config.society_name, query.oom_only) {
        (Some(name), true) => format!("{} Order of Merit {}", name, query.season),
        (Some(name), false) => format!("{} Standings {}", name, query.season),
        (None, true) => format!("Order of Merit {}", query.season),
        (None, false) => format!("Standings {}", query.season),
    };
    render::standings_table(&title, &entries)
}

fn round_event<'a>(args: &Args, snapshot: &'a Snapshot) -> Result<Option<&'a Event>> {
    match (&args.event_id, snapshot.event_for_round(args.event_id.as_deref())) {
        (Some(id), None) => Err(anyhow!("No event with id {}", id)),
        (_, event) => Ok(event),
    }
}

fn handicap_report(args: &Args, config: &Config, snapshot: &Snapshot) -> Result<String> {
    let event = round_event(args, snapshot)?;
    let (men, women) = tees(event);
    debug!(event_id = ?event.map(|e| &e.id), "Computing handicaps");

    let handicaps = handicaps_for_roster(&snapshot.members, men, women, config.allowance);
    let title = handicap_title(event, men.is_some() || women.is_some(), config.allowance.fraction());
    Ok(render::handicap_table(&title, &handicaps))
}

fn handicap_title(event: Option<&Event>, has_tees: bool, allowance: f64) -> String {
    match (event, has_tees) {
        (Some(e), true) => format!("Handicaps for {} ({:.0}% allowance)", e.display_name(), allowance * 100.0),
        (Some(e), false) => format!("Handicaps for {} (no tee data)", e.display_name()),
        (None, _) => "Handicaps (no tee data)".to_string(),
    }
}

fn tee_sheet_report(args: &Args, config: &Config, snapshot: &Snapshot) -> Result<String> {
    let event = round_event(args, snapshot)?;
    let (men, women) = tees(event);

    let mut players = tee_players_for(&snapshot.entrants(event), men, women, config.allowance);
    if args.pre_grouped {
        for player in &mut players {
            player.group = snapshot.groups.get(&player.member_id).copied();
        }
    }

    let mut options = config.tee_sheet_options(args.pre_grouped);
    args.override_tee_sheet(&mut options);

    let groups = build_tee_sheet(players, &options);
    let title = match event {
        Some(e) => format!("Tee sheet - {}", e.display_name()),
        None => "Tee sheet".to_string(),
    };
    Ok(render::tee_sheet(&title, &groups))
}

fn tees(event: Option<&Event>) -> (Option<&TeeBlock>, Option<&TeeBlock>) {
    match event {
        Some(e) => (e.men_tee.as_ref(), e.women_tee.as_ref()),
        None => (None, None),
    }
}
