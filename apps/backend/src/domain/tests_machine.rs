use crate::domain::editing::{add_player, is_locked, remove_player, set_total_overs};
use crate::domain::machine::{
    acknowledge_result, create_match, mark_submitted, rematch, reopen, select_non_striker,
    select_striker, start_second_innings, toggle_extra_mode, undo_from_result_popup, NewMatch,
};
use crate::domain::man_of_match::{derive_fielding, select_man_of_match, TieBreak};
use crate::domain::state::{
    ExtraMode, MatchStatus, MatchType, PlayerId, TeamSide, Toss, TossDecision,
};
use crate::domain::test_state_helpers::{
    a, b, innings, live, live_match, new_match, play, run,
};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

fn new_params(match_type: MatchType, total_overs: Option<u32>) -> NewMatch {
    NewMatch {
        id: "m-2".into(),
        season_id: 3,
        match_type,
        total_overs,
        rules: None,
        team_a: "Lions".into(),
        team_b: "Tigers".into(),
        players_a: vec!["Ann".into(), "Bea".into()],
        players_b: vec!["Cat".into(), "Dee".into()],
        now_ms: 1_000,
    }
}

/// One-over match won by team A by 6 runs.
fn completed_match() -> crate::domain::state::Match {
    let mut m = live_match(Some(1), 3);
    m = play(m, run(6));
    for _ in 0..5 {
        m = play(m, run(0));
    }
    let mut m = start_second_innings(m);
    for _ in 0..6 {
        m = play(m, run(0));
    }
    assert_eq!(m.status, MatchStatus::Completed);
    m
}

#[test]
fn limited_overs_need_positive_overs() {
    let err = create_match(new_params(MatchType::Overs, None)).unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
    let err = create_match(new_params(MatchType::Custom, Some(0))).unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));

    let m = create_match(new_params(MatchType::Test, Some(20))).unwrap();
    assert_eq!(m.total_overs, None);
}

#[test]
fn new_match_uses_default_extra_rules() {
    let m = create_match(new_params(MatchType::Overs, Some(20))).unwrap();
    assert_eq!(m.status, MatchStatus::Setup);
    assert!(!m.rules.wide.extra_run);
    assert!(m.rules.wide.extra_ball);
    assert!(m.rules.no_ball.extra_run);
    assert!(m.rules.no_ball.extra_ball);
    assert_eq!(m.teams.team_b.players[0].id, PlayerId(3));
}

#[test]
fn duplicate_names_rejected_after_normalization() {
    let mut params = new_params(MatchType::Overs, Some(5));
    params.players_b = vec!["  ann ".into()];
    assert!(create_match(params).is_err());

    let mut params = new_params(MatchType::Overs, Some(5));
    params.team_b = "LIONS".into();
    assert!(create_match(params).is_err());
}

#[test]
fn toss_decision_picks_batting_side() {
    let m = crate::domain::machine::record_toss(
        new_match(Some(5), 4),
        Toss {
            winner: TeamSide::A,
            decision: TossDecision::Bowl,
        },
    );
    assert_eq!(m.status, MatchStatus::Live);
    assert_eq!(m.innings.len(), 1);
    assert_eq!(m.innings[0].batting_team, TeamSide::B);
    assert_eq!(m.innings[0].bowling_team, TeamSide::A);
}

#[test]
fn batter_selection_enforces_eligibility() {
    let m = live_match(Some(5), 4);
    // bowling-side player
    let m = select_striker(m, b(4, 2));
    assert_eq!(live(&m).striker, Some(a(1)));
    // already at the other end
    let m = select_non_striker(m, a(1));
    assert_eq!(live(&m).non_striker, Some(a(2)));

    let m = select_striker(m, a(3));
    assert_eq!(live(&m).striker, Some(a(3)));
    assert!(innings(&m).batting_stats.contains(a(3)));
}

#[test]
fn dismissed_batter_cannot_return() {
    let m = crate::domain::test_state_helpers::striker_bowled(live_match(Some(5), 4));
    let m = select_striker(m, a(1));
    assert_eq!(live(&m).striker, None);
}

#[test]
fn extra_mode_toggle_returns_to_normal() {
    let m = live_match(Some(5), 4);
    let m = toggle_extra_mode(m, ExtraMode::NoBall);
    assert_eq!(live(&m).extra_mode, ExtraMode::NoBall);
    let m = toggle_extra_mode(m, ExtraMode::Wide);
    assert_eq!(live(&m).extra_mode, ExtraMode::Wide);
    let m = toggle_extra_mode(m, ExtraMode::Wide);
    assert_eq!(live(&m).extra_mode, ExtraMode::Normal);
}

#[test]
fn result_popup_undo_reopens_scoring() {
    let m = completed_match();
    let m = undo_from_result_popup(m);
    assert_eq!(m.status, MatchStatus::Live);
    assert!(m.result.is_none());
    assert_eq!(innings(&m).balls, 5);
    assert!(!m.innings[1].completed);
}

#[test]
fn acknowledgement_awards_and_locks_popup_undo() {
    let m = completed_match();
    let fielding = derive_fielding(&m);
    let mom = select_man_of_match(&m, &fielding, TieBreak::FirstInRoster);
    assert_eq!(mom, Some(a(1)));

    let m = acknowledge_result(m, fielding, mom);
    assert!(m.ui.match_result_seen);
    assert_eq!(m.man_of_the_match, Some(a(1)));

    let m = mark_submitted(m);
    assert!(m.ui.submitted);
    let unchanged = undo_from_result_popup(m.clone());
    assert_eq!(unchanged, m);
}

#[test]
fn reopen_clears_result_and_flags() {
    let m = completed_match();
    let fielding = derive_fielding(&m);
    let m = mark_submitted(acknowledge_result(m, fielding, Some(a(1))));

    let m = reopen(m);
    assert_eq!(m.status, MatchStatus::Live);
    assert!(m.result.is_none());
    assert!(m.man_of_the_match.is_none());
    assert!(m.fielding.is_none());
    assert!(!m.ui.submitted);
    assert!(!m.ui.match_result_seen);
    assert!(!live(&m).history.is_empty());
}

#[test]
fn rematch_copies_format_and_rosters() {
    let m = completed_match();
    let next = rematch(&m, "m-9".into(), 42).unwrap();
    assert_eq!(next.status, MatchStatus::Setup);
    assert_eq!(next.total_overs, m.total_overs);
    assert_eq!(next.rules, m.rules);
    assert_eq!(next.teams, m.teams);
    assert!(next.innings.is_empty());
    assert_eq!(next.created_at_ms, 42);

    assert!(rematch(&live_match(Some(5), 4), "x".into(), 0).is_err());
}

#[test]
fn players_can_be_added_mid_match() {
    let m = live_match(Some(5), 4);
    let m = add_player(m, TeamSide::A, "Late Arrival").unwrap();
    let added = m.teams.team_a.players.last().unwrap();
    assert_eq!(added.name, "Late Arrival");
    assert_eq!(added.id, PlayerId(9));
}

#[test]
fn locked_players_cannot_be_removed() {
    let m = live_match(Some(5), 4);
    assert!(is_locked(&m, a(1)));
    let err = remove_player(m.clone(), a(1)).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::PlayerLocked, _)
    ));

    let m = remove_player(m, a(4)).unwrap();
    assert_eq!(m.teams.team_a.players.len(), 3);

    let err = remove_player(m, PlayerId(99)).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Player, _)));
}

#[test]
fn overs_cannot_drop_below_overs_started() {
    let mut m = live_match(Some(5), 4);
    for _ in 0..7 {
        m = play(m, run(0));
    }
    assert!(set_total_overs(m.clone(), 1).is_err());

    let m = set_total_overs(m, 2).unwrap();
    assert_eq!(m.total_overs, Some(2));
    assert!(!live(&m).pending_next_innings);
}

#[test]
fn shrinking_to_completed_overs_ends_the_innings() {
    let mut m = live_match(Some(5), 4);
    for _ in 0..6 {
        m = play(m, run(0));
    }
    let m = set_total_overs(m, 1).unwrap();
    assert!(live(&m).pending_next_innings);
}

#[test]
fn test_matches_have_no_over_limit_to_edit() {
    let m = live_match(None, 4);
    assert!(set_total_overs(m, 10).is_err());
}
