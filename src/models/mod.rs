//! Data structures for the badminton session: players, matches, session state.

mod game;
mod player;
mod session;

pub use game::{GameMatch, Team, DEFAULT_GAME_POINTS};
pub use player::{default_roster, PlayerName, RankingEntry, DEFAULT_ROSTER};
pub use session::{PlayerCount, Session, SessionError, SessionId, SessionPhase};
