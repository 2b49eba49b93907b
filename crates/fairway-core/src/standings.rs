//! Season-long Order of Merit standings.
//!
//! Aggregation walks every eligible event, resolves its leaderboard and
//! totals the points, wins and appearances per member. Ranking then orders
//! those totals and hands out positions.
//!
//! Tie-breaks, in order: points, wins, events played (more is better).
//! Name and member id only settle display order; a rank is shared exactly
//! when points are equal.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::leaderboard::resolve_leaderboard;
use crate::models::event::parse_event_year;
use crate::models::{Event, Member};
use crate::utils::cmp_ignore_case;

/// Which events count towards a standings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonQuery {
    pub season: i32,
    /// Only events flagged as Order of Merit events
    #[serde(default)]
    pub oom_only: bool,
}

impl SeasonQuery {
    pub fn new(season: i32) -> Self {
        Self {
            season,
            oom_only: false,
        }
    }

    pub fn oom_only(mut self) -> Self {
        self.oom_only = true;
        self
    }
}

/// Cumulative figures for one member over a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonTotals {
    pub member_id: String,
    pub name: String,
    pub points: u32,
    pub played: u32,
    pub wins: u32,
}

/// One row of the ranked standings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct StandingsEntry {
    pub rank: usize,
    pub member_id: String,
    pub name: String,
    pub points: u32,
    pub played: u32,
    pub wins: u32,
}

#[derive(Debug, Default)]
struct Tally {
    points: u32,
    played: u32,
    wins: u32,
}

/// Events that count for the query: published, dated in the season, and
/// flagged Order of Merit when `oom_only` is set. Events whose date can't
/// be read are logged and left out.
pub fn eligible_events<'a>(events: &'a [Event], query: &SeasonQuery) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| event.is_published())
        .filter(|event| match parse_event_year(&event.date) {
            Ok(year) => year == query.season,
            Err(e) => {
                warn!(event_id = %event.id, date = %event.date, error = %e, "Skipping event with unreadable date");
                false
            }
        })
        .filter(|event| !query.oom_only || event.is_oom)
        .collect()
}

/// Fold eligible events into per-member totals.
///
/// Members who finish the season on zero points are left off. Ids with no
/// roster entry are shown under their id. Output is in member id order.
pub fn aggregate_season(events: &[Event], members: &[Member], query: &SeasonQuery) -> Vec<SeasonTotals> {
    let eligible = eligible_events(events, query);

    let mut tallies: BTreeMap<String, Tally> = BTreeMap::new();
    for event in &eligible {
        for placing in resolve_leaderboard(&event.results, event.format) {
            let tally = tallies.entry(placing.member_id).or_default();
            tally.points += placing.points;
            tally.played += 1;
            if placing.position == 1 {
                tally.wins += 1;
            }
        }
    }

    let names: HashMap<&str, &str> = members
        .iter()
        .map(|m| (m.id.as_str(), m.display_name()))
        .collect();

    debug!(
        season = query.season,
        oom_only = query.oom_only,
        events = eligible.len(),
        members = tallies.len(),
        "Aggregated season"
    );

    tallies
        .into_iter()
        .filter(|(_, tally)| tally.points > 0)
        .map(|(member_id, tally)| SeasonTotals {
            name: names
                .get(member_id.as_str())
                .map(|name| name.to_string())
                .unwrap_or_else(|| member_id.clone()),
            member_id,
            points: tally.points,
            played: tally.played,
            wins: tally.wins,
        })
        .collect()
}

/// Order totals and assign ranks.
pub fn rank_standings(mut totals: Vec<SeasonTotals>) -> Vec<StandingsEntry> {
    totals.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.wins.cmp(&a.wins))
            .then_with(|| b.played.cmp(&a.played))
            .then_with(|| cmp_ignore_case(&a.name, &b.name))
            .then_with(|| a.member_id.cmp(&b.member_id))
    });

    let mut entries: Vec<StandingsEntry> = Vec::with_capacity(totals.len());
    for (index, total) in totals.into_iter().enumerate() {
        // Sorted by points, so equal points are always adjacent
        let rank = match entries.last() {
            Some(previous) if previous.points == total.points => previous.rank,
            _ => index + 1,
        };
        entries.push(StandingsEntry {
            rank,
            member_id: total.member_id,
            name: total.name,
            points: total.points,
            played: total.played,
            wins: total.wins,
        });
    }
    entries
}

/// Aggregate and rank in one go.
pub fn compute_standings(events: &[Event], members: &[Member], query: &SeasonQuery) -> Vec<StandingsEntry> {
    rank_standings(aggregate_season(events, members, query))
}

/// Seasons that have at least one published event, newest first.
pub fn available_seasons(events: &[Event]) -> Vec<i32> {
    let seasons: BTreeSet<i32> = events
        .iter()
        .filter(|event| event.is_published())
        .filter_map(|event| event.season())
        .collect();
    seasons.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventResult, ScoringFormat};

    fn stableford_event(id: &str, date: &str, cards: &[(&str, i32)]) -> Event {
        Event::new(id, date, ScoringFormat::Stableford)
            .published()
            .with_results(
                cards
                    .iter()
                    .map(|(member, pts)| EventResult::stableford(*member, *pts))
                    .collect(),
            )
    }

    fn roster() -> Vec<Member> {
        vec![
            Member::new("alice", "Alice"),
            Member::new("bob", "Bob"),
            Member::new("cara", "Cara"),
            Member::new("dan", "Dan"),
        ]
    }

    fn totals(member_id: &str, points: u32, played: u32, wins: u32) -> SeasonTotals {
        SeasonTotals {
            member_id: member_id.to_string(),
            name: member_id.to_string(),
            points,
            played,
            wins,
        }
    }

    #[test]
    fn test_alice_season_scenario() {
        let events = vec![
            stableford_event("e1", "2025-04-12", &[("alice", 40), ("bob", 35), ("cara", 30)]),
            stableford_event("e2", "2025-05-10", &[("bob", 33), ("alice", 38)]),
            stableford_event("e3", "2025-06-14", &[("cara", 41), ("bob", 39), ("alice", 37)]),
        ];

        let table = compute_standings(&events, &roster(), &SeasonQuery::new(2025));
        let alice = table.iter().find(|e| e.member_id == "alice").expect("alice ranked");
        assert_eq!(alice.points, 65);
        assert_eq!(alice.wins, 2);
        assert_eq!(alice.played, 3);
        assert_eq!(alice.rank, 1);
        assert_eq!(alice.name, "Alice");
    }

    #[test]
    fn test_draft_events_never_count() {
        let mut draft = stableford_event("d1", "2025-03-01", &[("dan", 45)]);
        draft.status = crate::models::EventStatus::Draft;
        let events = vec![draft, stableford_event("e1", "2025-04-01", &[("bob", 30)])];

        let table = compute_standings(&events, &roster(), &SeasonQuery::new(2025));
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].member_id, "bob");
        assert!(table.iter().all(|e| e.member_id != "dan"));
    }

    #[test]
    fn test_season_and_oom_filters() {
        let events = vec![
            stableford_event("last-year", "2024-09-01", &[("alice", 40)]),
            stableford_event("friendly", "2025-05-01", &[("bob", 40)]),
            stableford_event("oom", "2025-06-01", &[("cara", 40)]).order_of_merit(),
        ];

        let all = aggregate_season(&events, &roster(), &SeasonQuery::new(2025));
        let ids: Vec<&str> = all.iter().map(|t| t.member_id.as_str()).collect();
        assert_eq!(ids, vec!["bob", "cara"]);

        let oom = aggregate_season(&events, &roster(), &SeasonQuery::new(2025).oom_only());
        let ids: Vec<&str> = oom.iter().map(|t| t.member_id.as_str()).collect();
        assert_eq!(ids, vec!["cara"]);
    }

    #[test]
    fn test_unreadable_date_is_skipped() {
        let events = vec![
            stableford_event("bad", "sometime in June", &[("alice", 40)]),
            stableford_event("good", "2025-06-01", &[("bob", 30)]),
        ];
        let table = aggregate_season(&events, &roster(), &SeasonQuery::new(2025));
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].member_id, "bob");
    }

    #[test]
    fn test_zero_point_members_are_hidden() {
        // Twelve players: 11th and 12th score nothing
        let cards: Vec<(String, i32)> = (0..12).map(|i| (format!("p{:02}", i), 40 - i)).collect();
        let cards: Vec<(&str, i32)> = cards.iter().map(|(id, pts)| (id.as_str(), *pts)).collect();
        let events = vec![stableford_event("e1", "2025-05-01", &cards)];

        let table = aggregate_season(&events, &[], &SeasonQuery::new(2025));
        assert_eq!(table.len(), 10);
        assert!(table.iter().all(|t| t.points > 0));
        assert!(table.iter().all(|t| t.member_id != "p10" && t.member_id != "p11"));
    }

    #[test]
    fn test_unknown_member_uses_id_as_name() {
        let events = vec![stableford_event("e1", "2025-05-01", &[("guest-7", 36)])];
        let table = aggregate_season(&events, &roster(), &SeasonQuery::new(2025));
        assert_eq!(table[0].name, "guest-7");
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let events = vec![
            stableford_event("e1", "2025-04-12", &[("alice", 40), ("bob", 40), ("cara", 30)]),
            stableford_event("e2", "2025-05-10", &[("dan", 33), ("cara", 38)]),
        ];
        let query = SeasonQuery::new(2025);
        let first = compute_standings(&events, &roster(), &query);
        let second = compute_standings(&events, &roster(), &query);
        assert_eq!(first, second);
        assert_eq!(
            aggregate_season(&events, &roster(), &query),
            aggregate_season(&events, &roster(), &query)
        );
    }

    #[test]
    fn test_rank_sharing_on_points_only() {
        let ranked = rank_standings(vec![totals("a", 50, 3, 1), totals("b", 40, 2, 0), totals("c", 50, 2, 2)]);
        let ranks: Vec<usize> = ranked.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 1, 3]);
        // Wins break the tie for display order but not the rank
        assert_eq!(ranked[0].member_id, "c");
        assert_eq!(ranked[1].member_id, "a");
    }

    #[test]
    fn test_rank_sequence_with_gaps() {
        let ranked = rank_standings(vec![
            totals("a", 40, 1, 0),
            totals("b", 40, 1, 0),
            totals("c", 35, 1, 0),
            totals("d", 30, 1, 0),
            totals("e", 30, 1, 0),
        ]);
        let ranks: Vec<usize> = ranked.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 1, 3, 4, 4]);
    }

    #[test]
    fn test_more_events_played_wins_tie() {
        let ranked = rank_standings(vec![totals("few", 30, 2, 1), totals("many", 30, 5, 1)]);
        assert_eq!(ranked[0].member_id, "many");
        assert_eq!(ranked[1].member_id, "few");
        assert_eq!(ranked[0].rank, ranked[1].rank);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(compute_standings(&[], &[], &SeasonQuery::new(2025)).is_empty());
        assert!(rank_standings(Vec::new()).is_empty());
        assert!(available_seasons(&[]).is_empty());
    }

    #[test]
    fn test_available_seasons() {
        let mut draft = stableford_event("d", "2026-01-10", &[]);
        draft.status = crate::models::EventStatus::Draft;
        let events = vec![
            stableford_event("a", "2024-05-01", &[]),
            stableford_event("b", "2025-05-01", &[]),
            stableford_event("c", "2025-08-01", &[]),
            stableford_event("x", "not a date", &[]),
            draft,
        ];
        assert_eq!(available_seasons(&events), vec![2025, 2024]);
    }
}
