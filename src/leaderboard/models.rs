use serde::{Deserialize, Serialize};

use crate::bonus::UnresolvedRoleError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    /// Competition rank: tied adjusted scores share a position
    pub position: usize,
    pub player: String,
    pub total_strokes: u32,
    pub rounds_played: usize,
    pub bonus: f64,
    pub adjusted_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Leaderboard {
    pub rows: Vec<LeaderboardRow>,
    pub issues: Vec<UnresolvedRoleError>,
}

impl Leaderboard {
    pub fn row(&self, player: &str) -> Option<&LeaderboardRow> {
        self.rows.iter().find(|row| row.player == player)
    }

    pub fn players(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.player.as_str()).collect()
    }
}
