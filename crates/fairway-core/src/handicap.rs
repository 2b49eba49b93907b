//! World Handicap System course and playing handicaps.
//!
//! A missing handicap index or missing tee data yields `None` all the way
//! through. `None` must never be shown or treated as a handicap of zero.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineError;
use crate::models::tee::STANDARD_SLOPE;
use crate::models::{Gender, Member, TeeBlock};

/// Fraction of the course handicap a player receives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Allowance(f64);

impl Allowance {
    pub const FULL: Allowance = Allowance(1.0);
    pub const STANDARD: Allowance = Allowance(0.95);

    pub fn new(fraction: f64) -> Result<Self, EngineError> {
        if fraction.is_finite() && fraction > 0.0 && fraction <= 1.0 {
            Ok(Self(fraction))
        } else {
            Err(EngineError::InvalidAllowance(fraction))
        }
    }

    /// `90` means 90%.
    pub fn from_percent(percent: u8) -> Result<Self, EngineError> {
        Self::new(f64::from(percent) / 100.0)
    }

    pub fn fraction(&self) -> f64 {
        self.0
    }
}

impl Default for Allowance {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl TryFrom<f64> for Allowance {
    type Error = EngineError;

    fn try_from(fraction: f64) -> Result<Self, Self::Error> {
        Self::new(fraction)
    }
}

impl From<Allowance> for f64 {
    fn from(allowance: Allowance) -> Self {
        allowance.0
    }
}

/// Round half up to the nearest whole stroke (`2.5 -> 3`, `-2.5 -> -2`).
pub fn round_half_up(value: f64) -> i32 {
    // Snap to 1e-6 first so 9.4999999999 from binary fractions rounds as 9.5
    let snapped = (value * 1e6).round() / 1e6;
    (snapped + 0.5).floor() as i32
}

/// `index × slope / 113 + (course rating − par)`, rounded.
pub fn course_handicap(handicap_index: Option<f64>, tee: &TeeBlock) -> Option<i32> {
    let index = handicap_index?;
    let unrounded = index * (tee.slope_rating / STANDARD_SLOPE) + tee.rating_adjustment();
    Some(round_half_up(unrounded))
}

/// Course handicap scaled by the competition allowance, rounded.
pub fn playing_handicap(course_handicap: Option<i32>, allowance: Allowance) -> Option<i32> {
    course_handicap.map(|course| round_half_up(f64::from(course) * allowance.fraction()))
}

/// Pick the tees a member plays from.
///
/// Prefers the block for the member's gender and falls back to whichever
/// block exists. Members of unknown gender are treated as playing the
/// men's tees when both exist.
pub fn select_tee<'a>(
    gender: Gender,
    men: Option<&'a TeeBlock>,
    women: Option<&'a TeeBlock>,
) -> Option<&'a TeeBlock> {
    match gender {
        Gender::Female => women.or(men),
        Gender::Male | Gender::Unknown => men.or(women),
    }
}

/// Computed handicaps for one member on one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct MemberHandicap {
    pub member_id: String,
    pub name: String,
    pub handicap_index: Option<f64>,
    pub course_handicap: Option<i32>,
    pub playing_handicap: Option<i32>,
}

pub fn handicaps_for(
    member: &Member,
    men: Option<&TeeBlock>,
    women: Option<&TeeBlock>,
    allowance: Allowance,
) -> MemberHandicap {
    let course = match select_tee(member.gender, men, women) {
        Some(tee) => course_handicap(member.handicap_index, tee),
        None => {
            debug!(member_id = %member.id, "No tee data, handicap not computed");
            None
        }
    };

    MemberHandicap {
        member_id: member.id.clone(),
        name: member.display_name().to_string(),
        handicap_index: member.handicap_index,
        course_handicap: course,
        playing_handicap: playing_handicap(course, allowance),
    }
}

pub fn handicaps_for_roster(
    members: &[Member],
    men: Option<&TeeBlock>,
    women: Option<&TeeBlock>,
    allowance: Allowance,
) -> Vec<MemberHandicap> {
    members
        .iter()
        .map(|member| handicaps_for(member, men, women, allowance))
        .collect()
}
