//! Plain-text tables for the reports.

use fairway_core::handicap::MemberHandicap;
use fairway_core::utils::{format_handicap, format_index, ordinal, truncate_string};
use fairway_core::{StandingsEntry, TeeGroup};

/// Width of the name column in every table
const NAME_WIDTH: usize = 24;

pub fn standings_table(title: &str, entries: &[StandingsEntry]) -> String {
    let mut out = format!("{}\n", title);
    if entries.is_empty() {
        out.push_str("No results yet.\n");
        return out;
    }

    out.push_str(&format!(
        "{:<6} {:<width$} {:>6} {:>6} {:>4}\n",
        "Pos", "Name", "Points", "Played", "Wins",
        width = NAME_WIDTH
    ));
    for entry in entries {
        // Shared ranks print as "=3rd"
        let shared = entries.iter().filter(|e| e.rank == entry.rank).count() > 1;
        let position = if shared {
            format!("={}", ordinal(entry.rank))
        } else {
            ordinal(entry.rank)
        };
        out.push_str(&format!(
            "{:<6} {:<width$} {:>6} {:>6} {:>4}\n",
            position,
            truncate_string(&entry.name, NAME_WIDTH),
            entry.points,
            entry.played,
            entry.wins,
            width = NAME_WIDTH
        ));
    }
    out
}

pub fn handicap_table(title: &str, handicaps: &[MemberHandicap]) -> String {
    let mut out = format!("{}\n", title);
    out.push_str(&format!(
        "{:<width$} {:>6} {:>6} {:>7}\n",
        "Name", "Index", "Course", "Playing",
        width = NAME_WIDTH
    ));
    for h in handicaps {
        out.push_str(&format!(
            "{:<width$} {:>6} {:>6} {:>7}\n",
            truncate_string(&h.name, NAME_WIDTH),
            format_index(h.handicap_index),
            format_handicap(h.course_handicap),
            format_handicap(h.playing_handicap),
            width = NAME_WIDTH
        ));
    }
    out
}

pub fn tee_sheet(title: &str, groups: &[TeeGroup]) -> String {
    let mut out = format!("{}\n", title);
    for group in groups {
        let players: Vec<String> = group
            .players
            .iter()
            .map(|p| format!("{} ({})", p.name, format_handicap(p.playing_handicap)))
            .collect();
        out.push_str(&format!("{}  Group {:>2}  {}\n", group.tee_time, group.number, players.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_core::{TeePlayer, TeeTime};

    fn entry(rank: usize, name: &str, points: u32) -> StandingsEntry {
        StandingsEntry {
            rank,
            member_id: name.to_lowercase(),
            name: name.to_string(),
            points,
            played: 3,
            wins: 1,
        }
    }

    #[test]
    fn test_standings_marks_shared_ranks() {
        let table = standings_table("2025", &[entry(1, "Alice", 50), entry(1, "Bob", 50), entry(3, "Cara", 40)]);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[2].starts_with("=1st"));
        assert!(lines[3].starts_with("=1st"));
        assert!(lines[4].starts_with("3rd "));
    }

    #[test]
    fn test_empty_standings() {
        assert!(standings_table("2025", &[]).contains("No results yet."));
    }

    #[test]
    fn test_missing_handicap_shows_placeholder() {
        let rows = vec![MemberHandicap {
            member_id: "m1".to_string(),
            name: "Alice".to_string(),
            handicap_index: None,
            course_handicap: None,
            playing_handicap: None,
        }];
        let table = handicap_table("Handicaps", &rows);
        let row = table.lines().nth(2).unwrap();
        assert!(row.ends_with("-"));
        assert!(!row.contains(" 0"));
    }

    #[test]
    fn test_tee_sheet_lines() {
        let mut player = TeePlayer::new("m1", Some(-2));
        player.name = "Alice".to_string();
        let groups = vec![TeeGroup {
            number: 1,
            tee_time: "08:00".parse::<TeeTime>().unwrap(),
            players: vec![player, TeePlayer::new("m2", None)],
        }];
        let sheet = tee_sheet("Tee sheet", &groups);
        assert!(sheet.contains("08:00  Group  1  Alice (+2), m2 (-)"));
    }
}
