/// Shared types used across the application
///
/// This module contains the season data model shared between
/// the library (pipeline, focus, tui) and the binary (main.rs).
use serde::Deserialize;

/// Division keys whose first token is this marker belong to the second league.
pub const SECOND_LEAGUE_MARKER: &str = "AL";

/// One team's season as delivered by the season data file.
///
/// `results` holds the running wins-minus-losses after each game played so far.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSeasonRecord {
    pub abbreviation: String,
    /// Division key, e.g. "AL East". Used verbatim for grouping.
    pub league: String,
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub wins_home: u32,
    pub losses_home: u32,
    pub wins_road: u32,
    pub losses_road: u32,
    #[serde(default)]
    pub results: Vec<i32>,
}

impl TeamSeasonRecord {
    /// Games above/below .500 after the last game played (0 before opening day)
    pub fn final_result(&self) -> i32 {
        self.results.last().copied().unwrap_or(0)
    }

    pub fn winning_percentage(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins as f64 / self.games as f64
    }

    pub fn league(&self) -> League {
        League::from_division_key(&self.league)
    }
}

/// Which of the two leagues a division belongs to.
///
/// The second league's charts sit to the right of their first-league partner,
/// so enlarging one displaces its left neighbour instead of its right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum League {
    First,
    Second,
}

impl League {
    pub fn from_division_key(key: &str) -> Self {
        match key.split_whitespace().next() {
            Some(SECOND_LEAGUE_MARKER) => League::Second,
            _ => League::First,
        }
    }
}

/// A team's record plus where its label row lands in the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRow {
    pub record: TeamSeasonRecord,
    pub label_position: f64,
}

impl TeamRow {
    pub fn new(record: TeamSeasonRecord) -> Self {
        Self {
            record,
            label_position: 0.0,
        }
    }
}

/// All teams of one division, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct DivisionGroup {
    pub key: String,
    pub values: Vec<TeamRow>,
}

impl DivisionGroup {
    pub fn league(&self) -> League {
        League::from_division_key(&self.key)
    }
}

/// Index of a chart in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChartId(pub usize);
