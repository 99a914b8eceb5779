//! Fixed round-robin schedules and match resolution.

use crate::models::{GameMatch, PlayerCount, PlayerName, Session, SessionError, SessionPhase};

/// Seat pairings for an eight-player session: ten matches, seats 1-8.
/// Each entry `[a, b, c, d]` puts seats a and b against seats c and d.
const SCHEDULE_EIGHT: [[usize; 4]; 10] = [
    [1, 5, 2, 6],
    [3, 7, 4, 8],
    [1, 7, 2, 8],
    [3, 5, 4, 6],
    [1, 6, 3, 8],
    [2, 5, 4, 7],
    [1, 4, 5, 8],
    [2, 3, 6, 7],
    [1, 8, 2, 7],
    [3, 6, 4, 5],
];

/// Seat pairings for a seven-player session: nine matches, seats 1-7.
const SCHEDULE_SEVEN: [[usize; 4]; 9] = [
    [1, 2, 3, 4],
    [5, 6, 7, 1],
    [2, 3, 4, 5],
    [6, 7, 1, 3],
    [2, 4, 5, 7],
    [1, 5, 3, 6],
    [2, 6, 4, 7],
    [3, 5, 1, 4],
    [2, 7, 5, 6],
];

/// The fixed pairing table for a head count. Every seat index is in
/// `1..=count`; the tables balance per-player match counts and opponent
/// variety and are never shuffled.
pub fn schedule_for(count: PlayerCount) -> &'static [[usize; 4]] {
    match count {
        PlayerCount::Seven => &SCHEDULE_SEVEN,
        PlayerCount::Eight => &SCHEDULE_EIGHT,
    }
}

/// Resolve the fixed table against an ordered selection: seat `i` plays as
/// `players[i - 1]`. Output order equals table order; both teams start at
/// the default game points.
pub fn resolve_matches(
    count: PlayerCount,
    players: &[PlayerName],
) -> Result<Vec<GameMatch>, SessionError> {
    if players.len() != count.as_usize() {
        return Err(SessionError::WrongSelectionCount {
            required: count.as_usize(),
            selected: players.len(),
        });
    }
    let matches = schedule_for(count)
        .iter()
        .map(|&[a, b, c, d]| {
            GameMatch::new(
                [players[a - 1].clone(), players[b - 1].clone()],
                [players[c - 1].clone(), players[d - 1].clone()],
            )
        })
        .collect();
    Ok(matches)
}

/// Generate the session's matches from the fixed schedule (selection screen
/// to score entry). Any previous matches and scores are replaced wholesale.
pub fn generate_matches(session: &mut Session) -> Result<(), SessionError> {
    if session.phase != SessionPhase::SelectPlayers {
        return Err(SessionError::InvalidState);
    }
    let count = session.player_count.ok_or(SessionError::InvalidState)?;
    session.matches = resolve_matches(count, &session.selected_players)?;
    session.phase = SessionPhase::EnterScores;
    Ok(())
}
