use crate::domain::ball::record_ball;
use crate::domain::history::{depth, undo};
use crate::domain::machine::{
    apply_runs, record_toss, start_second_innings, swap_strike, toggle_extra_mode,
    undo_from_innings_popup,
};
use crate::domain::state::{ActionKind, ExtraMode, MatchStatus, TeamSide, Toss, TossDecision};
use crate::domain::test_state_helpers::{
    a, innings, live, live_match, new_match, play, run, striker_bowled,
};

#[test]
fn undo_reverses_a_run_exactly() {
    let before = live_match(Some(6), 11);
    let after = record_ball(before.clone(), run(3));
    assert_ne!(after, before);
    assert_eq!(undo(after), before);
}

#[test]
fn undo_reverses_over_completion() {
    let mut m = live_match(Some(6), 11);
    for _ in 0..5 {
        m = record_ball(m, run(0));
    }
    let before = m.clone();
    let m = record_ball(m, run(0));
    assert_eq!(live(&m).bowler, None);

    let m = undo(m);
    assert_eq!(m, before);
    assert_eq!(innings(&m).this_over.len(), 5);
    assert_eq!(live(&m).bowler, before.live.as_ref().unwrap().bowler);
}

#[test]
fn undo_reverses_a_wicket() {
    let before = live_match(Some(6), 11);
    let m = striker_bowled(before.clone());
    assert_eq!(live(&m).out_batsmen, vec![a(1)]);
    let m = undo(m);
    assert_eq!(m, before);
    assert!(innings(&m).dismissals.is_empty());
}

#[test]
fn undo_restores_armed_extra_mode() {
    let m = toggle_extra_mode(live_match(Some(6), 11), ExtraMode::Wide);
    let m = apply_runs(m, 0);
    assert_eq!(live(&m).extra_mode, ExtraMode::Normal);
    let m = undo(m);
    assert_eq!(live(&m).extra_mode, ExtraMode::Wide);
    assert_eq!(innings(&m).extras.wides, 0);
}

#[test]
fn undo_reverses_strike_swap() {
    let before = live_match(Some(6), 11);
    let m = swap_strike(before.clone());
    assert_eq!(live(&m).striker, Some(a(2)));
    assert_eq!(
        live(&m).history.last().map(|entry| entry.action),
        Some(ActionKind::StrikeSwap)
    );
    assert_eq!(undo(m), before);
}

#[test]
fn undo_on_empty_history_is_noop() {
    let m = record_toss(
        new_match(Some(6), 11),
        Toss {
            winner: TeamSide::B,
            decision: TossDecision::Bowl,
        },
    );
    assert_eq!(depth(&m), 0);
    let again = undo(m.clone());
    assert_eq!(again, m);
}

#[test]
fn innings_popup_blocks_plain_undo_and_has_its_own() {
    // Two batters per side: one wicket ends the innings.
    let m = live_match(Some(2), 2);
    let m = record_ball(m, run(1));
    let before_wicket = m.clone();
    let m = striker_bowled(m);
    assert!(live(&m).pending_next_innings);
    assert!(m.innings[0].completed);

    let blocked = undo(m.clone());
    assert_eq!(blocked, m);

    let reopened = undo_from_innings_popup(m);
    assert!(!live(&reopened).pending_next_innings);
    assert!(!reopened.innings[0].completed);
    assert_eq!(innings(&reopened).wickets, 0);
    assert_eq!(reopened.innings[0], before_wicket.innings[0]);
}

#[test]
fn history_resets_at_second_innings() {
    let m = live_match(Some(1), 2);
    let m = striker_bowled(m);
    assert!(live(&m).pending_next_innings);

    let m = start_second_innings(m);
    assert_eq!(m.status, MatchStatus::Live);
    assert_eq!(live(&m).innings_index, 1);
    assert_eq!(depth(&m), 0);
    assert_eq!(innings(&m).batting_team, TeamSide::B);

    let m = play(m, run(2));
    assert_eq!(innings(&m).total_runs, 2);
}
