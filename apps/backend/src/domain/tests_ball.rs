use crate::domain::ball::record_ball;
use crate::domain::machine::{record_toss, select_bowler, select_non_striker, select_striker};
use crate::domain::state::{
    BallEvent, DismissalKind, ExtraMode, ExtraParityRule, TeamSide, Toss, TossDecision,
    WicketDetail,
};
use crate::domain::test_state_helpers::{a, b, innings, live, live_match, new_match, run};

const N: usize = 11;

#[test]
fn run_credits_striker_and_bowler() {
    let m = record_ball(live_match(Some(6), N), run(4));
    let inn = innings(&m);

    assert_eq!(inn.total_runs, 4);
    assert_eq!(inn.balls, 1);
    let line = inn.batting_stats.get(a(1)).unwrap();
    assert_eq!((line.runs, line.balls, line.fours, line.sixes), (4, 1, 1, 0));
    let bowl = inn.bowling_stats.get(b(N, 1)).unwrap();
    assert_eq!((bowl.balls, bowl.runs), (1, 4));
    assert_eq!(live(&m).striker, Some(a(1)));
    assert_eq!(inn.this_over, vec![run(4)]);
}

#[test]
fn odd_runs_rotate_strike() {
    let m = record_ball(live_match(Some(6), N), run(1));
    assert_eq!(live(&m).striker, Some(a(2)));
    assert_eq!(live(&m).non_striker, Some(a(1)));

    let m = record_ball(m, run(6));
    assert_eq!(live(&m).striker, Some(a(2)));
    assert_eq!(innings(&m).batting_stats.get(a(2)).unwrap().sixes, 1);
}

#[test]
fn wide_with_automatic_run_leaves_striker_untouched() {
    let mut m = live_match(Some(6), N);
    m.rules.wide.extra_run = true;
    let m = record_ball(m, BallEvent::Wide { runs: 0 });
    let inn = innings(&m);

    assert_eq!(inn.total_runs, 1);
    assert_eq!(inn.extras.wides, 1);
    assert_eq!(inn.balls, 0);
    let line = inn.batting_stats.get(a(1)).unwrap();
    assert_eq!((line.runs, line.balls), (0, 0));
    assert_eq!(live(&m).striker, Some(a(1)));
    assert_eq!(inn.bowling_stats.get(b(N, 1)).unwrap().runs, 1);
}

#[test]
fn wide_without_automatic_run_rotates_on_single() {
    let m = record_ball(live_match(Some(6), N), BallEvent::Wide { runs: 1 });
    let inn = innings(&m);
    assert_eq!(inn.total_runs, 1);
    assert_eq!(inn.extras.wides, 1);
    assert_eq!(live(&m).striker, Some(a(2)));
}

#[test]
fn total_runs_parity_rotates_on_lone_extra() {
    let mut m = live_match(Some(6), N);
    m.rules.wide.extra_run = true;
    m.rules.extra_parity = ExtraParityRule::TotalRuns;
    let m = record_ball(m, BallEvent::Wide { runs: 0 });
    assert_eq!(live(&m).striker, Some(a(2)));
}

#[test]
fn no_ball_runs_go_to_bat_and_extra_to_extras() {
    let m = record_ball(live_match(Some(6), N), BallEvent::NoBall { runs: 4 });
    let inn = innings(&m);

    assert_eq!(inn.total_runs, 5);
    assert_eq!(inn.extras.no_balls, 1);
    assert_eq!(inn.balls, 0);
    let line = inn.batting_stats.get(a(1)).unwrap();
    assert_eq!((line.runs, line.balls, line.fours), (4, 1, 1));
    let bowl = inn.bowling_stats.get(b(N, 1)).unwrap();
    assert_eq!((bowl.balls, bowl.runs), (0, 5));
    assert_eq!(live(&m).striker, Some(a(1)));
}

#[test]
fn no_ball_without_extra_ball_is_not_faced() {
    let mut m = live_match(Some(6), N);
    m.rules.no_ball.extra_ball = false;
    let m = record_ball(m, BallEvent::NoBall { runs: 0 });
    assert_eq!(innings(&m).batting_stats.get(a(1)).unwrap().balls, 0);
}

#[test]
fn run_out_of_non_striker_after_two_runs() {
    let fielder = b(N, 3);
    let m = record_ball(
        live_match(Some(6), N),
        BallEvent::Wicket(WicketDetail {
            kind: DismissalKind::RunOut,
            out: a(2),
            fielder: Some(fielder),
            runs: 2,
            delivery: ExtraMode::Normal,
        }),
    );
    let inn = innings(&m);
    let l = live(&m);

    assert_eq!(inn.total_runs, 2);
    assert_eq!(inn.balls, 1);
    assert_eq!(inn.wickets, 1);
    let line = inn.batting_stats.get(a(1)).unwrap();
    assert_eq!((line.runs, line.balls), (2, 1));
    assert_eq!(l.striker, Some(a(1)));
    assert_eq!(l.non_striker, None);
    assert_eq!(l.out_batsmen, vec![a(2)]);

    let d = inn.dismissals.get(a(2)).unwrap();
    assert_eq!(d.kind, DismissalKind::RunOut);
    assert_eq!(d.bowler, b(N, 1));
    assert_eq!(d.fielder, Some(fielder));
    assert_eq!(
        inn.batting_stats.get(a(2)).unwrap().dismissal.as_ref(),
        Some(d)
    );
    assert_eq!(inn.bowling_stats.get(b(N, 1)).unwrap().wickets, 0);
}

#[test]
fn bowled_credits_bowler_and_clears_striker() {
    let m = record_ball(
        live_match(Some(6), N),
        BallEvent::Wicket(WicketDetail {
            kind: DismissalKind::Bowled,
            out: a(1),
            fielder: None,
            runs: 0,
            delivery: ExtraMode::Normal,
        }),
    );
    assert_eq!(live(&m).striker, None);
    assert_eq!(live(&m).non_striker, Some(a(2)));
    assert_eq!(innings(&m).bowling_stats.get(b(N, 1)).unwrap().wickets, 1);
}

#[test]
fn wicket_on_no_ball_never_credits_bowler() {
    let m = record_ball(
        live_match(Some(6), N),
        BallEvent::Wicket(WicketDetail {
            kind: DismissalKind::Caught,
            out: a(1),
            fielder: Some(b(N, 2)),
            runs: 0,
            delivery: ExtraMode::NoBall,
        }),
    );
    let inn = innings(&m);
    assert_eq!(inn.balls, 0);
    assert_eq!(inn.wickets, 1);
    assert_eq!(inn.total_runs, 1);
    assert_eq!(inn.extras.no_balls, 1);
    assert_eq!(inn.bowling_stats.get(b(N, 1)).unwrap().wickets, 0);
}

#[test]
fn wicket_on_no_ball_is_faced_even_without_extra_ball() {
    let mut m = live_match(Some(6), N);
    m.rules.no_ball.extra_ball = false;
    let m = record_ball(
        m,
        BallEvent::Wicket(WicketDetail {
            kind: DismissalKind::RunOut,
            out: a(2),
            fielder: None,
            runs: 1,
            delivery: ExtraMode::NoBall,
        }),
    );
    let inn = innings(&m);
    let line = inn.batting_stats.get(a(1)).unwrap();
    assert_eq!((line.runs, line.balls), (1, 1));
    assert_eq!(inn.balls, 0);
    assert_eq!(inn.total_runs, 2);
}

#[test]
fn run_out_on_wide_sends_runs_to_extras() {
    let m = record_ball(
        live_match(Some(6), N),
        BallEvent::Wicket(WicketDetail {
            kind: DismissalKind::RunOut,
            out: a(1),
            fielder: None,
            runs: 1,
            delivery: ExtraMode::Wide,
        }),
    );
    let inn = innings(&m);
    assert_eq!(inn.total_runs, 1);
    assert_eq!(inn.extras.wides, 1);
    assert_eq!(inn.balls, 0);
    assert_eq!(inn.batting_stats.get(a(1)).unwrap().balls, 0);
}

#[test]
fn ball_ignored_until_bowler_selected() {
    let m = new_match(Some(6), N);
    let m = record_toss(
        m,
        Toss {
            winner: TeamSide::A,
            decision: TossDecision::Bat,
        },
    );
    let m = select_striker(m, a(1));
    let m = select_non_striker(m, a(2));
    let before = m.clone();

    let m = record_ball(m, run(2));
    assert_eq!(m, before);
}

#[test]
fn dismissal_of_player_off_the_crease_is_ignored() {
    let m = live_match(Some(6), N);
    let before = m.clone();
    let m = record_ball(
        m,
        BallEvent::Wicket(WicketDetail {
            kind: DismissalKind::Bowled,
            out: a(5),
            fielder: None,
            runs: 0,
            delivery: ExtraMode::Normal,
        }),
    );
    assert_eq!(m, before);
}

#[test]
fn six_dot_balls_make_a_maiden_and_end_the_over() {
    let mut m = live_match(Some(6), N);
    for _ in 0..6 {
        m = record_ball(m, run(0));
    }
    let inn = innings(&m);
    let l = live(&m);

    assert_eq!(inn.balls, 6);
    assert!(inn.this_over.is_empty());
    assert_eq!(l.bowler, None);
    assert_eq!(l.last_over_bowler, Some(b(N, 1)));
    assert_eq!(l.striker, Some(a(2)));
    assert_eq!(inn.bowling_stats.get(b(N, 1)).unwrap().maidens, 1);
}

#[test]
fn over_with_a_wide_is_not_a_maiden() {
    let mut m = live_match(Some(6), N);
    m = record_ball(m, BallEvent::Wide { runs: 0 });
    for _ in 0..6 {
        m = record_ball(m, run(0));
    }
    let inn = innings(&m);
    assert_eq!(inn.balls, 6);
    assert_eq!(inn.bowling_stats.get(b(N, 1)).unwrap().maidens, 0);
}

#[test]
fn last_over_bowler_cannot_bowl_again() {
    let mut m = live_match(Some(6), N);
    for _ in 0..6 {
        m = record_ball(m, run(0));
    }
    let m = select_bowler(m, b(N, 1));
    assert_eq!(live(&m).bowler, None);
    let m = select_bowler(m, b(N, 2));
    assert_eq!(live(&m).bowler, Some(b(N, 2)));
}

#[test]
fn extra_mode_resets_after_each_ball() {
    let m = live_match(Some(6), N);
    let m = crate::domain::machine::toggle_extra_mode(m, ExtraMode::Wide);
    assert_eq!(live(&m).extra_mode, ExtraMode::Wide);
    let m = crate::domain::machine::apply_runs(m, 2);
    assert_eq!(live(&m).extra_mode, ExtraMode::Normal);
    assert_eq!(innings(&m).extras.wides, 2);
    assert_eq!(innings(&m).balls, 0);
}
