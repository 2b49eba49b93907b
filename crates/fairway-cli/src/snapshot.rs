//! Society data handed to the CLI as a single JSON document.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use fairway_core::{Event, Member};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub events: Vec<Event>,
    /// Pre-assigned tee groups, member id -> group number
    #[serde(alias = "teeGroups", alias = "tee_groups", default)]
    pub groups: BTreeMap<String, u32>,
}

impl Snapshot {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse snapshot: {}", path.display()))
    }

    /// The requested event, or the most recent one carrying tee data
    pub fn event_for_round(&self, event_id: Option<&str>) -> Option<&Event> {
        match event_id {
            Some(id) => self.events.iter().find(|e| e.id == id),
            None => self
                .events
                .iter()
                .filter(|e| e.men_tee.is_some() || e.women_tee.is_some())
                .filter_map(|e| e.parsed_date().ok().map(|date| (date, e)))
                .max_by_key(|(date, _)| *date)
                .map(|(_, e)| e),
        }
    }

    /// Members entered for an event; the whole roster if nobody is yet
    pub fn entrants(&self, event: Option<&Event>) -> Vec<Member> {
        match event {
            Some(event) if !event.results.is_empty() => self
                .members
                .iter()
                .filter(|m| event.results.iter().any(|r| r.member_id == m.id))
                .cloned()
                .collect(),
            _ => self.members.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "members": [
            {"id": "m1", "name": "Alice", "gender": "female", "handicapIndex": 14.2},
            {"id": "m2", "name": "Bob", "gender": "male", "hcp": 8.1},
            {"id": "m3", "name": "Cara"}
        ],
        "events": [
            {"id": "e1", "date": "2025-04-01", "status": "published",
             "menTee": {"par": 72, "courseRating": 71.0, "slopeRating": 125}},
            {"id": "e2", "date": "2025-06-01", "status": "draft",
             "womenTee": {"par": 72, "courseRating": 73.0, "slopeRating": 130},
             "results": [{"memberId": "m1", "stableford": 30}]},
            {"id": "e3", "date": "2025-07-01", "status": "draft"}
        ],
        "teeGroups": {"m1": 2, "m2": 1}
    }"#;

    #[test]
    fn test_parse_snapshot() {
        let snapshot: Snapshot = serde_json::from_str(SNAPSHOT).expect("snapshot should parse");
        assert_eq!(snapshot.members.len(), 3);
        assert_eq!(snapshot.events.len(), 3);
        assert_eq!(snapshot.groups.get("m1"), Some(&2));
    }

    #[test]
    fn test_event_for_round_prefers_latest_with_tees() {
        let snapshot: Snapshot = serde_json::from_str(SNAPSHOT).unwrap();
        assert_eq!(snapshot.event_for_round(None).map(|e| e.id.as_str()), Some("e2"));
        assert_eq!(snapshot.event_for_round(Some("e1")).map(|e| e.id.as_str()), Some("e1"));
        assert!(snapshot.event_for_round(Some("nope")).is_none());
    }

    #[test]
    fn test_entrants() {
        let snapshot: Snapshot = serde_json::from_str(SNAPSHOT).unwrap();
        let e2 = snapshot.event_for_round(Some("e2"));
        let ids: Vec<String> = snapshot.entrants(e2).into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["m1"]);

        let e1 = snapshot.event_for_round(Some("e1"));
        assert_eq!(snapshot.entrants(e1).len(), 3);
    }

    #[test]
    fn test_incomplete_tee_block_keeps_snapshot() {
        let json = r#"{
            "members": [{"id": "m1", "name": "Alice"}],
            "events": [
                {"id": "e1", "date": "2025-04-01", "menTee": {"par": "72", "courseRating": 71.0, "slopeRating": "125"}},
                {"id": "e2", "date": "2025-06-01", "menTee": {"par": 72, "courseRating": 71.0}}
            ]
        }"#;
        let snapshot: Snapshot = serde_json::from_str(json).expect("snapshot should parse");
        assert_eq!(snapshot.events.len(), 2);
        assert!(snapshot.events[1].men_tee.is_none());
        assert_eq!(snapshot.event_for_round(None).map(|e| e.id.as_str()), Some("e1"));
    }
}
