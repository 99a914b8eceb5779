//! Count choice and the player selection gate.

use crate::models::{PlayerCount, Session, SessionError, SessionPhase};

/// Answer the first screen: fix the head count and move on to selection.
/// A selection left over from an earlier pass is kept; the generate gate
/// still requires exactly `count` picks before matches can be produced.
pub fn choose_player_count(session: &mut Session, count: PlayerCount) -> Result<(), SessionError> {
    if session.phase != SessionPhase::SelectCount {
        return Err(SessionError::InvalidState);
    }
    session.player_count = Some(count);
    session.phase = SessionPhase::SelectPlayers;
    Ok(())
}

/// Toggle one roster name in or out of the selection.
///
/// Removing is always allowed. Adding only takes effect while the selection
/// is below the chosen count; toggling an unselected name against a full
/// selection is silently ignored, not an error. Selection order is insertion
/// order and determines the seat indices matches are resolved against.
pub fn toggle_player(session: &mut Session, name: &str) -> Result<(), SessionError> {
    if session.phase != SessionPhase::SelectPlayers {
        return Err(SessionError::InvalidState);
    }
    if !session.roster_contains(name) {
        return Err(SessionError::UnknownPlayer(name.to_string()));
    }
    let limit = session
        .player_count
        .ok_or(SessionError::InvalidState)?
        .as_usize();
    if session.is_selected(name) {
        session.selected_players.retain(|n| n != name);
    } else if session.selected_players.len() < limit {
        session.selected_players.push(name.to_string());
    }
    Ok(())
}
