//! Player names, the default roster, and the ranking view.

use serde::{Deserialize, Serialize};

/// Players are identified by name; names are unique within a session.
pub type PlayerName = String;

/// The regulars offered on the selection screen when a session is created
/// without a custom roster.
pub const DEFAULT_ROSTER: [&str; 9] = [
    "Simon", "Jason", "小瑞", "承訓", "威威", "下巴", "彥霖", "仲儀", "馬克",
];

/// Owned copy of [`DEFAULT_ROSTER`] (for `Session` construction).
pub fn default_roster() -> Vec<PlayerName> {
    DEFAULT_ROSTER.iter().map(|n| n.to_string()).collect()
}

/// One row of the computed ranking (for API / display).
///
/// Rows are produced sorted descending by `score`; players with equal scores
/// keep the order in which they first appeared in the match list.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub name: PlayerName,
    pub score: i32,
}
