//! Ranking aggregation: first-five-capped totals, stable descending sort.

use crate::models::{GameMatch, PlayerName, RankingEntry, Session, SessionError, SessionPhase};

/// Matches counted per player: only a player's chronologically first five
/// appearances contribute to their total, whatever the later scores are.
pub const COUNTED_MATCHES_PER_PLAYER: u32 = 5;

/// Per-player accumulation state while scanning the match list. Rebuilt
/// from scratch on every ranking request; never stored on the session.
#[derive(Clone, Copy, Debug, Default)]
struct PlayerStat {
    score: i32,
    matches_counted: u32,
}

/// Compute the ranking for a match list.
///
/// Players are registered in first-seen order (team 1 before team 2, in
/// match order). Each appearance adds that match's own team score to the
/// player's total until five matches have been counted. Entries come out
/// stable-sorted descending by total, so equal totals keep first-seen
/// order. Players appearing in no match get no entry.
pub fn compute_ranking(matches: &[GameMatch]) -> Vec<RankingEntry> {
    let mut stats: Vec<(PlayerName, PlayerStat)> = Vec::new();

    for game in matches {
        for name in game.team_1.iter().chain(game.team_2.iter()) {
            if !stats.iter().any(|(n, _)| n == name) {
                stats.push((name.clone(), PlayerStat::default()));
            }
        }
        add_team_points(&mut stats, &game.team_1, game.team_1_score);
        add_team_points(&mut stats, &game.team_2, game.team_2_score);
    }

    let mut entries: Vec<RankingEntry> = stats
        .into_iter()
        .map(|(name, stat)| RankingEntry {
            name,
            score: stat.score,
        })
        .collect();
    // sort_by is stable, so ties keep first-seen order.
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries
}

/// Credit one team's points to its members, respecting the per-player cap.
fn add_team_points(stats: &mut [(PlayerName, PlayerStat)], team: &[PlayerName; 2], points: i32) {
    for name in team {
        if let Some((_, stat)) = stats.iter_mut().find(|(n, _)| n == name) {
            if stat.matches_counted < COUNTED_MATCHES_PER_PLAYER {
                stat.score += points;
                stat.matches_counted += 1;
            }
        }
    }
}

/// Settle score entry and move to the ranking screen.
pub fn show_ranking(session: &mut Session) -> Result<(), SessionError> {
    if session.phase != SessionPhase::EnterScores {
        return Err(SessionError::InvalidState);
    }
    session.phase = SessionPhase::ViewRanking;
    Ok(())
}

/// First index of the "bottom four" in a ranking of `total` entries. The
/// last four rows get distinct visual treatment; a ranking shorter than
/// four rows is flagged in full. Presentation hint only, no data meaning.
pub fn bottom_four_start(total: usize) -> usize {
    total.saturating_sub(4)
}
