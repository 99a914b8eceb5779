//! Integration tests for the wizard state machine: phase gates, the
//! selection limit, backward navigation, and reset.

use badminton_session_web::{
    choose_player_count, compute_ranking, generate_matches, set_match_score, show_ranking,
    toggle_player, PlayerCount, Session, SessionError, SessionPhase, Team, DEFAULT_ROSTER,
};

/// Walk a fresh default-roster session up to the score entry screen.
fn session_at_score_entry() -> Session {
    let mut s = Session::new();
    choose_player_count(&mut s, PlayerCount::Eight).unwrap();
    for name in DEFAULT_ROSTER.iter().take(8) {
        toggle_player(&mut s, name).unwrap();
    }
    generate_matches(&mut s).unwrap();
    s
}

#[test]
fn full_wizard_walkthrough() {
    let mut s = Session::new();
    assert_eq!(s.phase, SessionPhase::SelectCount);
    assert_eq!(s.roster.len(), 9);

    choose_player_count(&mut s, PlayerCount::Eight).unwrap();
    assert_eq!(s.phase, SessionPhase::SelectPlayers);

    for name in DEFAULT_ROSTER.iter().take(8) {
        toggle_player(&mut s, name).unwrap();
    }
    generate_matches(&mut s).unwrap();
    assert_eq!(s.phase, SessionPhase::EnterScores);
    assert_eq!(s.matches.len(), 10);

    set_match_score(&mut s, 0, Team::One, 15).unwrap();
    show_ranking(&mut s).unwrap();
    assert_eq!(s.phase, SessionPhase::ViewRanking);
    assert_eq!(compute_ranking(&s.matches).len(), 8);
}

#[test]
fn score_update_touches_exactly_one_field() {
    let mut s = session_at_score_entry();
    let before = s.matches.clone();

    set_match_score(&mut s, 0, Team::One, 15).unwrap();

    assert_eq!(s.matches[0].team_1_score, 15);
    assert_eq!(s.matches[0].team_2_score, before[0].team_2_score);
    assert_eq!(s.matches[0].team_1, before[0].team_1);
    assert_eq!(s.matches[1..], before[1..]);
}

#[test]
fn score_update_rejects_unknown_index() {
    let mut s = session_at_score_entry();
    assert!(matches!(
        set_match_score(&mut s, 99, Team::Two, 21),
        Err(SessionError::MatchNotFound(99))
    ));
}

#[test]
fn selection_limit_is_enforced_silently() {
    let mut s = Session::new();
    choose_player_count(&mut s, PlayerCount::Seven).unwrap();
    for name in DEFAULT_ROSTER.iter().take(7) {
        toggle_player(&mut s, name).unwrap();
    }
    assert_eq!(s.selected_players.len(), 7);

    // An eighth pick is ignored without an error.
    toggle_player(&mut s, DEFAULT_ROSTER[7]).unwrap();
    assert_eq!(s.selected_players.len(), 7);
    assert!(!s.is_selected(DEFAULT_ROSTER[7]));

    // Removing and re-adding the same name restores the prior length.
    toggle_player(&mut s, DEFAULT_ROSTER[0]).unwrap();
    assert_eq!(s.selected_players.len(), 6);
    toggle_player(&mut s, DEFAULT_ROSTER[0]).unwrap();
    assert_eq!(s.selected_players.len(), 7);
}

#[test]
fn toggling_a_name_off_the_roster_is_an_error() {
    let mut s = Session::new();
    choose_player_count(&mut s, PlayerCount::Eight).unwrap();
    let err = toggle_player(&mut s, "nobody").unwrap_err();
    assert_eq!(err, SessionError::UnknownPlayer("nobody".to_string()));
}

#[test]
fn operations_are_rejected_off_their_screen() {
    let mut s = Session::new();

    assert!(matches!(
        toggle_player(&mut s, DEFAULT_ROSTER[0]),
        Err(SessionError::InvalidState)
    ));
    assert!(matches!(
        generate_matches(&mut s),
        Err(SessionError::InvalidState)
    ));
    assert!(matches!(
        set_match_score(&mut s, 0, Team::One, 21),
        Err(SessionError::InvalidState)
    ));
    assert!(matches!(show_ranking(&mut s), Err(SessionError::InvalidState)));
    assert!(matches!(s.go_back(), Err(SessionError::InvalidState)));

    choose_player_count(&mut s, PlayerCount::Eight).unwrap();
    // The count screen was answered; answering it again requires going back.
    assert!(matches!(
        choose_player_count(&mut s, PlayerCount::Seven),
        Err(SessionError::InvalidState)
    ));
}

#[test]
fn going_back_keeps_entered_data() {
    let mut s = session_at_score_entry();
    set_match_score(&mut s, 2, Team::Two, 13).unwrap();
    show_ranking(&mut s).unwrap();

    s.go_back().unwrap();
    assert_eq!(s.phase, SessionPhase::EnterScores);
    assert_eq!(s.matches[2].team_2_score, 13);

    s.go_back().unwrap();
    assert_eq!(s.phase, SessionPhase::SelectPlayers);
    assert_eq!(s.selected_players.len(), 8);
    // Matches survive until regenerated.
    assert_eq!(s.matches.len(), 10);

    s.go_back().unwrap();
    assert_eq!(s.phase, SessionPhase::SelectCount);

    // Re-choosing a count keeps the previous picks; the generate gate now
    // requires deselecting down to seven.
    choose_player_count(&mut s, PlayerCount::Seven).unwrap();
    assert_eq!(s.selected_players.len(), 8);
    assert!(matches!(
        generate_matches(&mut s),
        Err(SessionError::WrongSelectionCount {
            required: 7,
            selected: 8
        })
    ));
    toggle_player(&mut s, DEFAULT_ROSTER[0]).unwrap();
    generate_matches(&mut s).unwrap();
    assert_eq!(s.matches.len(), 9);
}

#[test]
fn reset_returns_to_the_count_screen() {
    let mut s = session_at_score_entry();
    let roster = s.roster.clone();

    s.reset();

    assert_eq!(s.phase, SessionPhase::SelectCount);
    assert_eq!(s.player_count, None);
    assert!(s.selected_players.is_empty());
    assert!(s.matches.is_empty());
    assert_eq!(s.roster, roster);
}

#[test]
fn custom_rosters_are_trimmed_and_deduplicated() {
    let s = Session::with_roster(vec![
        "  Amy  ".to_string(),
        "".to_string(),
        "Amy".to_string(),
        "Ben".to_string(),
    ]);
    assert_eq!(s.roster, ["Amy".to_string(), "Ben".to_string()]);
}
