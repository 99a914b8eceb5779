//! Session state machine, supported player counts, and session errors.

use crate::models::game::GameMatch;
use crate::models::player::{default_roster, PlayerName};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during session operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SessionError {
    /// Operation not allowed in the current wizard phase.
    InvalidState,
    /// Player count outside the supported set (only 7 and 8 have schedules).
    UnsupportedPlayerCount(u8),
    /// Matches requested without an exact-size selection.
    WrongSelectionCount { required: usize, selected: usize },
    /// Toggled a name that is not on the session roster.
    UnknownPlayer(PlayerName),
    /// Score update addressed a match index that does not exist.
    MatchNotFound(usize),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::InvalidState => write!(f, "Invalid state for this action"),
            SessionError::UnsupportedPlayerCount(n) => {
                write!(f, "Unsupported player count {} (only 7 or 8)", n)
            }
            SessionError::WrongSelectionCount { required, selected } => {
                write!(f, "Must select exactly {} players (selected {})", required, selected)
            }
            SessionError::UnknownPlayer(name) => {
                write!(f, "Player {} is not on the roster", name)
            }
            SessionError::MatchNotFound(index) => write!(f, "Match {} not found", index),
        }
    }
}

/// Unique identifier for a session.
pub type SessionId = Uuid;

/// Head counts a fixed schedule exists for. Closed set: other counts are
/// rejected at the boundary and never reach the schedule lookup.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PlayerCount {
    Seven,
    Eight,
}

impl PlayerCount {
    pub fn as_u8(self) -> u8 {
        match self {
            PlayerCount::Seven => 7,
            PlayerCount::Eight => 8,
        }
    }

    pub fn as_usize(self) -> usize {
        self.as_u8() as usize
    }
}

impl TryFrom<u8> for PlayerCount {
    type Error = SessionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            7 => Ok(PlayerCount::Seven),
            8 => Ok(PlayerCount::Eight),
            other => Err(SessionError::UnsupportedPlayerCount(other)),
        }
    }
}

impl From<PlayerCount> for u8 {
    fn from(count: PlayerCount) -> u8 {
        count.as_u8()
    }
}

/// Current screen of the four-step wizard.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Choosing between 7 and 8 players; nothing else set yet.
    #[default]
    SelectCount,
    /// Toggling roster names until exactly `player_count` are selected.
    SelectPlayers,
    /// Schedule generated; editing per-match scores.
    EnterScores,
    /// Scores settled; showing the ranking.
    ViewRanking,
}

/// Full session state: roster, selection, matches, and wizard phase.
///
/// One session is one run of the wizard, held in memory only. The ranking is
/// never stored here; it is recomputed from `matches` on demand.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub created_at: DateTime<Utc>,
    /// Names the selection screen offers; fixed for the session lifetime.
    pub roster: Vec<PlayerName>,
    /// Chosen head count (None until the first screen is answered).
    pub player_count: Option<PlayerCount>,
    /// Current picks in selection order; order defines the seat indices the
    /// schedule tables are resolved against.
    pub selected_players: Vec<PlayerName>,
    /// Current schedule with editable scores; replaced wholesale whenever
    /// matches are regenerated.
    pub matches: Vec<GameMatch>,
    pub phase: SessionPhase,
}

impl Session {
    /// Create a new session offering the default roster.
    pub fn new() -> Self {
        Self::with_roster(default_roster())
    }

    /// Create a session with a custom roster. Names are trimmed; empty names
    /// and duplicates are dropped, first occurrence wins.
    pub fn with_roster(roster: Vec<PlayerName>) -> Self {
        let mut cleaned: Vec<PlayerName> = Vec::with_capacity(roster.len());
        for name in roster {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                continue;
            }
            if cleaned.iter().any(|n| n == trimmed) {
                continue;
            }
            cleaned.push(trimmed.to_string());
        }
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            roster: cleaned,
            player_count: None,
            selected_players: Vec::new(),
            matches: Vec::new(),
            phase: SessionPhase::SelectCount,
        }
    }

    /// Whether `name` is on the roster.
    pub fn roster_contains(&self, name: &str) -> bool {
        self.roster.iter().any(|n| n == name)
    }

    /// Whether `name` is currently selected.
    pub fn is_selected(&self, name: &str) -> bool {
        self.selected_players.iter().any(|n| n == name)
    }

    /// Go back one screen. Previously entered data is kept: a selection
    /// survives returning to the count screen, and matches with their scores
    /// survive returning to the selection screen (until regenerated).
    pub fn go_back(&mut self) -> Result<(), SessionError> {
        use SessionPhase::*;
        self.phase = match self.phase {
            SelectCount => return Err(SessionError::InvalidState),
            SelectPlayers => SelectCount,
            EnterScores => SelectPlayers,
            ViewRanking => EnterScores,
        };
        Ok(())
    }

    /// Start the wizard over: back to the count screen with the same roster;
    /// count, selection, and matches are cleared.
    pub fn reset(&mut self) {
        self.player_count = None;
        self.selected_players.clear();
        self.matches.clear();
        self.phase = SessionPhase::SelectCount;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
