use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::de;
use super::tee::TeeBlock;
use crate::error::EngineError;

/// Date layouts accepted for `Event::date`, tried after RFC 3339.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d"];

/// Date-time layouts without an offset, as some backends store them.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A missing or blank format reads as `Other`, the same as an unknown label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringFormat {
    Stableford,
    Strokeplay,
    Medal,
    #[default]
    Other,
}

impl ScoringFormat {
    /// Higher score is better (points), as opposed to fewer strokes
    pub fn is_points_based(&self) -> bool {
        matches!(self, ScoringFormat::Stableford)
    }
}

impl From<&str> for ScoringFormat {
    fn from(label: &str) -> Self {
        let normalized: String = label
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match normalized.as_str() {
            "stableford" | "stablefordpoints" | "points" => ScoringFormat::Stableford,
            "strokeplay" | "stroke" | "strokes" | "gross" => ScoringFormat::Strokeplay,
            "medal" | "monthlymedal" | "medalplay" => ScoringFormat::Medal,
            _ => ScoringFormat::Other,
        }
    }
}

impl std::fmt::Display for ScoringFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoringFormat::Stableford => write!(f, "Stableford"),
            ScoringFormat::Strokeplay => write!(f, "Strokeplay"),
            ScoringFormat::Medal => write!(f, "Medal"),
            ScoringFormat::Other => write!(f, "Other"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Draft,
    Published,
}

impl From<&str> for EventStatus {
    fn from(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("published") {
            EventStatus::Published
        } else {
            EventStatus::Draft
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventStatus::Draft => write!(f, "Draft"),
            EventStatus::Published => write!(f, "Published"),
        }
    }
}

/// One member's raw scores for one event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventResult {
    // Empty when results are keyed by member id; filled in from the key
    #[serde(rename = "memberId", alias = "member_id", default)]
    pub member_id: String,
    #[serde(alias = "grossScore", alias = "gross_score", deserialize_with = "de::opt_i32", default)]
    pub gross: Option<i32>,
    #[serde(alias = "netScore", alias = "net_score", deserialize_with = "de::opt_i32", default)]
    pub net: Option<i32>,
    #[serde(
        alias = "stablefordPoints",
        alias = "stableford_points",
        alias = "points",
        deserialize_with = "de::opt_i32",
        default
    )]
    pub stableford: Option<i32>,
}

impl EventResult {
    pub fn gross(member_id: impl Into<String>, gross: i32) -> Self {
        Self {
            member_id: member_id.into(),
            gross: Some(gross),
            ..Self::default()
        }
    }

    pub fn stableford(member_id: impl Into<String>, points: i32) -> Self {
        Self {
            member_id: member_id.into(),
            stableford: Some(points),
            ..Self::default()
        }
    }

    /// The value the leaderboard sorts on for the given format
    pub fn score_for(&self, format: ScoringFormat) -> Option<i32> {
        if format.is_points_based() {
            self.stableford
        } else {
            self.gross
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(alias = "eventId", alias = "event_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(alias = "eventDate", alias = "event_date", alias = "startDate", default)]
    pub date: String,
    #[serde(alias = "scoringFormat", alias = "scoring_format", deserialize_with = "de::label", default)]
    pub format: ScoringFormat,
    #[serde(rename = "isOOM", alias = "isOom", alias = "is_oom", alias = "oom", default)]
    pub is_oom: bool,
    #[serde(deserialize_with = "de::label", default)]
    pub status: EventStatus,
    #[serde(deserialize_with = "de::results", default)]
    pub results: Vec<EventResult>,
    #[serde(rename = "menTee", alias = "men_tee", alias = "mensTee", default, deserialize_with = "de::opt_tee")]
    pub men_tee: Option<TeeBlock>,
    #[serde(rename = "womenTee", alias = "women_tee", alias = "ladiesTee", default, deserialize_with = "de::opt_tee")]
    pub women_tee: Option<TeeBlock>,
}

impl Event {
    pub fn new(id: impl Into<String>, date: impl Into<String>, format: ScoringFormat) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            date: date.into(),
            format,
            is_oom: false,
            status: EventStatus::Draft,
            results: Vec::new(),
            men_tee: None,
            women_tee: None,
        }
    }

    pub fn published(mut self) -> Self {
        self.status = EventStatus::Published;
        self
    }

    pub fn order_of_merit(mut self) -> Self {
        self.is_oom = true;
        self
    }

    pub fn with_results(mut self, results: Vec<EventResult>) -> Self {
        self.results = results;
        self
    }

    pub fn is_published(&self) -> bool {
        self.status == EventStatus::Published
    }

    pub fn parsed_date(&self) -> Result<NaiveDate, EngineError> {
        parse_event_date(&self.date)
    }

    /// Season year the event belongs to, `None` when the date is unusable
    pub fn season(&self) -> Option<i32> {
        self.parsed_date().ok().map(|d| d.year())
    }

    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// Parse an event date as stored by the backend.
pub fn parse_event_date(raw: &str) -> Result<NaiveDate, EngineError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EngineError::invalid_date(raw));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt.date());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }

    Err(EngineError::invalid_date(raw))
}

/// Year component of an event date.
pub fn parse_event_year(raw: &str) -> Result<i32, EngineError> {
    parse_event_date(raw).map(|d| d.year())
}
