//! Match and Team for doubles games (always 2v2).

use crate::models::player::PlayerName;
use serde::{Deserialize, Serialize};

/// Score both teams start a game with (conventional badminton game point).
pub const DEFAULT_GAME_POINTS: i32 = 21;

/// One side of a match.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    One,
    Two,
}

/// A single doubles match: two fixed pairs and one score per team.
///
/// Matches are identified by their position in the session's match list;
/// that position is also the chronological order the ranking counts.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    /// Team 1 pair, in seat order.
    pub team_1: [PlayerName; 2],
    /// Team 2 pair, in seat order.
    pub team_2: [PlayerName; 2],
    /// Team 1's points (any integer accepted; no rule validation).
    pub team_1_score: i32,
    /// Team 2's points.
    pub team_2_score: i32,
}

impl GameMatch {
    /// New match with both scores at [`DEFAULT_GAME_POINTS`].
    pub fn new(team_1: [PlayerName; 2], team_2: [PlayerName; 2]) -> Self {
        Self {
            team_1,
            team_2,
            team_1_score: DEFAULT_GAME_POINTS,
            team_2_score: DEFAULT_GAME_POINTS,
        }
    }
}
