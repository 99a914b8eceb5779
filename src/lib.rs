//! Badminton session web app: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{
    bottom_four_start, choose_player_count, compute_ranking, generate_matches, resolve_matches,
    schedule_for, set_match_score, show_ranking, toggle_player, COUNTED_MATCHES_PER_PLAYER,
};
pub use models::{
    default_roster, GameMatch, PlayerCount, PlayerName, RankingEntry, Session, SessionError,
    SessionId, SessionPhase, Team, DEFAULT_GAME_POINTS, DEFAULT_ROSTER,
};
