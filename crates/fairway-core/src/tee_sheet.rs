//! Tee sheet: players split into groups of up to four with tee times.
//!
//! Groups either come from numbers the organiser already assigned or are
//! built automatically, highest handicap first. Group `i` tees off at
//! `start + i × interval`, wrapping past midnight.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::EngineError;
use crate::handicap::{handicaps_for, Allowance};
use crate::models::{Member, TeeBlock};

/// Most players allowed in one group
pub const GROUP_SIZE: usize = 4;

/// Interval used when none is configured
pub const DEFAULT_INTERVAL_MINUTES: i64 = 10;

/// Interval used when the configured one is zero or negative
pub const FALLBACK_INTERVAL_MINUTES: i64 = 8;

/// First tee time used when none, or an unreadable one, is configured
pub const DEFAULT_START: TeeTime = TeeTime(8 * 60);

const MINUTES_PER_DAY: i64 = 24 * 60;

/// A time of day to the minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeeTime(u16);

impl TeeTime {
    /// Build from an arbitrary minute count, wrapping into one day
    pub fn from_minutes(minutes: i64) -> Self {
        Self(minutes.rem_euclid(MINUTES_PER_DAY) as u16)
    }

    pub fn minute_of_day(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    pub fn minute(&self) -> u16 {
        self.0 % 60
    }

    pub fn plus_minutes(&self, minutes: i64) -> Self {
        Self::from_minutes(i64::from(self.0) + minutes.rem_euclid(MINUTES_PER_DAY))
    }
}

impl FromStr for TeeTime {
    type Err = EngineError;

    /// `HH:MM`, or `HH:MM:SS` with the seconds ignored. Out-of-range parts
    /// wrap the same way as tee time arithmetic, so `24:10` reads as `00:10`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.len() < 2 || parts.len() > 3 {
            return Err(EngineError::invalid_time(s));
        }
        let hour: i64 = parts[0].trim().parse().map_err(|_| EngineError::invalid_time(s))?;
        let minute: i64 = parts[1].trim().parse().map_err(|_| EngineError::invalid_time(s))?;
        // Reduce each part first so huge values can't overflow
        Ok(Self::from_minutes(hour.rem_euclid(24) * 60 + minute.rem_euclid(MINUTES_PER_DAY)))
    }
}

impl std::fmt::Display for TeeTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl TryFrom<String> for TeeTime {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TeeTime> for String {
    fn from(time: TeeTime) -> Self {
        time.to_string()
    }
}

/// A player to be placed on the tee sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct TeePlayer {
    #[serde(rename = "memberId", alias = "member_id")]
    pub member_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "playingHandicap", alias = "playing_handicap", default)]
    pub playing_handicap: Option<i32>,
    /// Group number assigned by the organiser, if any
    #[serde(alias = "groupNumber", alias = "group_number", default)]
    pub group: Option<u32>,
}

impl TeePlayer {
    pub fn new(member_id: impl Into<String>, playing_handicap: Option<i32>) -> Self {
        let member_id = member_id.into();
        Self {
            name: member_id.clone(),
            member_id,
            playing_handicap,
            group: None,
        }
    }

    pub fn in_group(mut self, group: u32) -> Self {
        self.group = Some(group);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct TeeGroup {
    /// 1-based, in tee-off order
    pub number: usize,
    #[cfg_attr(feature = "ts", ts(type = "string"))]
    pub tee_time: TeeTime,
    pub players: Vec<TeePlayer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeeSheetOptions {
    /// `HH:MM`; falls back to 08:00
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub interval_minutes: Option<i64>,
    /// Use the players' own group numbers instead of grouping by handicap
    #[serde(default)]
    pub pre_grouped: bool,
}

impl TeeSheetOptions {
    pub fn interval(&self) -> i64 {
        match self.interval_minutes {
            None => DEFAULT_INTERVAL_MINUTES,
            Some(minutes) if minutes > 0 => minutes,
            Some(minutes) => {
                warn!(interval = minutes, fallback = FALLBACK_INTERVAL_MINUTES, "Tee interval must be positive");
                FALLBACK_INTERVAL_MINUTES
            }
        }
    }

    pub fn start(&self) -> TeeTime {
        match self.start_time.as_deref().map(str::parse::<TeeTime>) {
            None => DEFAULT_START,
            Some(Ok(time)) => time,
            Some(Err(e)) => {
                warn!(error = %e, fallback = %DEFAULT_START, "Unreadable first tee time");
                DEFAULT_START
            }
        }
    }
}

/// Lay out the tee sheet for a round.
pub fn build_tee_sheet(players: Vec<TeePlayer>, options: &TeeSheetOptions) -> Vec<TeeGroup> {
    let start = options.start();
    let interval = options.interval();

    let buckets = if options.pre_grouped {
        pre_assigned_groups(players)
    } else {
        groups_by_handicap(players)
    };

    debug!(groups = buckets.len(), start = %start, interval, "Built tee sheet");

    buckets
        .into_iter()
        .enumerate()
        .map(|(index, players)| TeeGroup {
            number: index + 1,
            tee_time: start.plus_minutes(offset_minutes(index, interval)),
            players,
        })
        .collect()
}

/// Minutes after the first tee time for group `index`, within one day.
fn offset_minutes(index: usize, interval: i64) -> i64 {
    let index = (index as i64).rem_euclid(MINUTES_PER_DAY);
    (index * interval.rem_euclid(MINUTES_PER_DAY)).rem_euclid(MINUTES_PER_DAY)
}

/// Highest playing handicap first, then chunks of four.
fn groups_by_handicap(mut players: Vec<TeePlayer>) -> Vec<Vec<TeePlayer>> {
    // None < Some, so a descending sort leaves players without a handicap last
    players.sort_by(|a, b| b.playing_handicap.cmp(&a.playing_handicap));
    chunk(players)
}

/// Bucket by assigned group number, ascending. Players without a number
/// are grouped by handicap after the assigned groups.
fn pre_assigned_groups(players: Vec<TeePlayer>) -> Vec<Vec<TeePlayer>> {
    let mut assigned: BTreeMap<u32, Vec<TeePlayer>> = BTreeMap::new();
    let mut unassigned = Vec::new();
    for player in players {
        match player.group {
            Some(group) => assigned.entry(group).or_default().push(player),
            None => unassigned.push(player),
        }
    }

    let mut groups = Vec::new();
    for (number, members) in assigned {
        if members.len() > GROUP_SIZE {
            warn!(group = number, players = members.len(), "Assigned group too large, splitting");
        }
        groups.extend(chunk(members));
    }
    groups.extend(groups_by_handicap(unassigned));
    groups
}

fn chunk(players: Vec<TeePlayer>) -> Vec<Vec<TeePlayer>> {
    let mut groups = Vec::with_capacity(players.len().div_ceil(GROUP_SIZE));
    let mut remaining = players.into_iter().peekable();
    while remaining.peek().is_some() {
        groups.push(remaining.by_ref().take(GROUP_SIZE).collect());
    }
    groups
}

/// Tee sheet entries for a roster with playing handicaps worked out.
pub fn tee_players_for(
    members: &[Member],
    men: Option<&TeeBlock>,
    women: Option<&TeeBlock>,
    allowance: Allowance,
) -> Vec<TeePlayer> {
    members
        .iter()
        .map(|member| {
            let handicap = handicaps_for(member, men, women, allowance);
            TeePlayer {
                member_id: handicap.member_id,
                name: handicap.name,
                playing_handicap: handicap.playing_handicap,
                group: None,
            }
        })
        .collect()
}
