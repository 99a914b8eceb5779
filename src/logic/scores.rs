//! Score ledger: update one team's points on one match.

use crate::models::{Session, SessionError, SessionPhase, Team};

/// Set one team's score on the match at `index`. The other team's score and
/// every other match are untouched. Any integer is accepted; score legality
/// against badminton rules is not checked here. The front end turns empty
/// or unparsable input into 0 before calling this.
pub fn set_match_score(
    session: &mut Session,
    index: usize,
    team: Team,
    score: i32,
) -> Result<(), SessionError> {
    if session.phase != SessionPhase::EnterScores {
        return Err(SessionError::InvalidState);
    }
    let game = session
        .matches
        .get_mut(index)
        .ok_or(SessionError::MatchNotFound(index))?;
    match team {
        Team::One => game.team_1_score = score,
        Team::Two => game.team_2_score = score,
    }
    Ok(())
}
