//! Whole-match scenarios driven through the public transitions.

use crate::domain::machine::start_second_innings;
use crate::domain::scorecard::{chase, innings_card, result_line};
use crate::domain::state::{
    BallEvent, DismissalKind, ExtraMode, Match, MatchStatus, ResultKind, TeamSide, WicketDetail,
};
use crate::domain::test_state_helpers::{innings, live, live_match, play, run, striker_bowled};

fn play_all(mut m: Match, balls: impl IntoIterator<Item = BallEvent>) -> Match {
    for ball in balls {
        m = play(m, ball);
    }
    m
}

fn dots(n: usize) -> impl Iterator<Item = BallEvent> {
    std::iter::repeat(run(0)).take(n)
}

/// A makes 50/3 in six overs.
fn first_innings_fifty_for_three() -> Match {
    let mut m = live_match(Some(6), 11);
    for _ in 0..3 {
        m = striker_bowled(m);
    }
    let m = play_all(m, std::iter::repeat(run(4)).take(12));
    let m = play(m, run(2));
    play_all(m, dots(20))
}

#[test]
fn chase_ends_mid_over_with_wickets_margin() {
    let m = first_innings_fifty_for_three();
    assert_eq!(m.innings[0].total_runs, 50);
    assert_eq!(m.innings[0].wickets, 3);
    assert_eq!(m.innings[0].balls, 36);
    assert!(live(&m).pending_next_innings);

    // Balls are ignored while the innings break is pending.
    let paused = play(m.clone(), run(4));
    assert_eq!(paused.innings, m.innings);

    let mut m = start_second_innings(m);
    for _ in 0..2 {
        m = striker_bowled(m);
    }
    let m = play_all(m, std::iter::repeat(run(6)).take(8));
    let m = play_all(m, dots(14));
    assert_eq!(innings(&m).balls, 24);
    assert_eq!(m.status, MatchStatus::Live);

    let c = chase(&m).unwrap();
    assert_eq!(c.target, 51);
    assert_eq!(c.runs_needed, 3);
    assert_eq!(c.balls_remaining, Some(12));

    let m = play(m, run(1));
    assert_eq!(m.status, MatchStatus::Live);
    let m = play(m, run(2));
    assert_eq!(m.status, MatchStatus::Completed);
    assert_eq!(innings(&m).balls, 26);
    assert!(m.innings[1].completed);

    let result = m.result.clone().unwrap();
    assert_eq!(result.winner, Some(TeamSide::B));
    assert_eq!(result.kind, ResultKind::Wickets);
    assert_eq!(result.margin, 11 - 1 - 2);
    assert_eq!(result_line(&m).unwrap(), "Bravo won by 8 wickets");
    assert!(!m.ui.match_result_seen);

    let after = play(m.clone(), run(4));
    assert_eq!(after.innings, m.innings);
}

#[test]
fn defended_total_wins_by_runs() {
    let m = live_match(Some(1), 11);
    let m = play_all(m, std::iter::repeat(run(4)).take(6));
    let m = start_second_innings(m);
    let m = play_all(m, dots(6));

    assert_eq!(m.status, MatchStatus::Completed);
    let result = m.result.clone().unwrap();
    assert_eq!(result.winner, Some(TeamSide::A));
    assert_eq!(result.kind, ResultKind::Runs);
    assert_eq!(result.margin, 24);
    assert_eq!(result_line(&m).unwrap(), "Alpha won by 24 runs");
}

#[test]
fn equal_totals_tie() {
    let m = live_match(Some(1), 11);
    let m = play_all(m, std::iter::once(run(2)).chain(dots(5)));
    let m = start_second_innings(m);
    let m = play_all(m, std::iter::once(run(2)).chain(dots(5)));

    let result = m.result.clone().unwrap();
    assert_eq!(result.winner, None);
    assert_eq!(result.kind, ResultKind::Tie);
    assert_eq!(result.margin, 0);
    assert_eq!(result_line(&m).unwrap(), "Match tied");
}

#[test]
fn wide_past_target_waits_for_next_legal_ball() {
    let m = live_match(Some(2), 11);
    let m = play_all(m, dots(12));
    let m = start_second_innings(m);

    let m = play(m, BallEvent::Wide { runs: 1 });
    assert_eq!(innings(&m).total_runs, 1);
    assert_eq!(m.status, MatchStatus::Live);

    let m = play(m, run(0));
    assert_eq!(m.status, MatchStatus::Completed);
    assert_eq!(m.result.as_ref().unwrap().winner, Some(TeamSide::B));
}

#[test]
fn run_out_on_a_no_ball_waits_for_next_legal_ball() {
    let m = live_match(Some(2), 11);
    let m = play_all(m, std::iter::once(run(3)).chain(dots(11)));
    let m = start_second_innings(m);
    let m = play(m, run(2));

    let out = live(&m).non_striker.unwrap();
    let m = play(
        m,
        BallEvent::Wicket(WicketDetail {
            kind: DismissalKind::RunOut,
            out,
            fielder: None,
            runs: 1,
            delivery: ExtraMode::NoBall,
        }),
    );
    // 2 + 1 run + 1 automatic extra reaches the target of 4
    assert_eq!(innings(&m).total_runs, 4);
    assert_eq!(innings(&m).balls, 1);
    assert_eq!(m.status, MatchStatus::Live);
    assert!(m.result.is_none());

    let m = play(m, run(0));
    assert_eq!(m.status, MatchStatus::Completed);
    let result = m.result.as_ref().unwrap();
    assert_eq!(
        (result.winner, result.kind, result.margin),
        (Some(TeamSide::B), ResultKind::Wickets, 9)
    );
}

#[test]
fn run_out_on_a_wide_does_not_end_the_innings() {
    let m = live_match(None, 2);
    let out = live(&m).striker.unwrap();
    let m = play(
        m,
        BallEvent::Wicket(WicketDetail {
            kind: DismissalKind::RunOut,
            out,
            fielder: None,
            runs: 0,
            delivery: ExtraMode::Wide,
        }),
    );
    assert_eq!(m.innings[0].wickets, 1);
    assert_eq!(m.innings[0].balls, 0);
    assert!(!live(&m).pending_next_innings);
    assert!(!m.innings[0].completed);
}

#[test]
fn test_match_runs_until_all_out() {
    let mut m = live_match(None, 3);
    m = play_all(m, dots(60));
    assert_eq!(innings(&m).balls, 60);
    assert!(!live(&m).pending_next_innings);

    m = striker_bowled(m);
    m = striker_bowled(m);
    assert!(live(&m).pending_next_innings);
}

#[test]
fn scorecard_lists_batters_in_order_of_appearance() {
    let m = first_innings_fifty_for_three();
    let card = innings_card(&m, 0).unwrap();

    assert_eq!(card.batting_team, "Alpha");
    assert_eq!(card.total, "50/3 (6.0 ov)");
    let names: Vec<_> = card.batting.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["A1", "A2", "A3", "A4", "A5"]);
    assert_eq!(card.batting[0].dismissal, "b B1");
    assert_eq!(card.batting[4].dismissal, "not out");
    assert_eq!(card.bowling.len(), 2);
}
