//! Fairway core - season standings, WHS handicaps and tee sheets for golf
//! societies.
//!
//! Everything here is a pure function over records the caller has already
//! fetched. The engine never performs I/O beyond the optional config file.

pub mod config;
pub mod error;
pub mod handicap;
pub mod leaderboard;
pub mod models;
pub mod points;
pub mod standings;
pub mod tee_sheet;
pub mod utils;

pub use config::Config;
pub use error::EngineError;
pub use handicap::{course_handicap, playing_handicap, select_tee, Allowance, MemberHandicap};
pub use leaderboard::{resolve_leaderboard, Placing};
pub use models::{Event, EventResult, EventStatus, Gender, Member, ScoringFormat, TeeBlock};
pub use points::points_for_position;
pub use standings::{compute_standings, SeasonQuery, StandingsEntry};
pub use tee_sheet::{build_tee_sheet, TeeGroup, TeePlayer, TeeSheetOptions, TeeTime};
