//! Applying a single delivery to the innings in progress.

use tracing::debug;

use crate::domain::history;
use crate::domain::ledger::Ledger;
use crate::domain::rules;
use crate::domain::state::{
    live_parts_mut, ActionKind, BallEvent, BattingLine, BowlingLine, Dismissal, ExtraMode, Match,
    PlayerId,
};

/// Record one delivery. Returns the match unchanged when the crease is not
/// fully staffed or scoring is blocked.
pub fn record_ball(mut m: Match, ball: BallEvent) -> Match {
    if let Some(reason) = blocked_reason(&m, &ball) {
        debug!(match_id = %m.id, reason, "ball ignored");
        return m;
    }

    let rules_cfg = m.rules;
    let legal = ball.is_legal();

    history::push(&mut m, ActionKind::from(&ball));

    let Some((live, inn)) = live_parts_mut(&mut m) else {
        return m;
    };
    let (Some(striker), Some(bowler)) = (live.striker, live.bowler) else {
        return m;
    };

    inn.this_over.push(ball.clone());

    match &ball {
        BallEvent::Run { runs } => {
            let runs = u32::from(*runs);
            inn.total_runs += runs;
            credit_bat(&mut inn.batting_stats, striker, runs, true);
            inn.balls += 1;
            charge_bowler(&mut inn.bowling_stats, bowler, runs, true);
            if runs % 2 == 1 {
                swap_ends(&mut live.striker, &mut live.non_striker);
            }
        }
        BallEvent::Wide { runs } => {
            let runs = u32::from(*runs);
            let extra = u32::from(rules_cfg.wide.extra_run);
            let total = runs + extra;
            inn.total_runs += total;
            inn.extras.wides += total;
            charge_bowler(&mut inn.bowling_stats, bowler, total, false);
            if rules::rotates_after_extra(rules_cfg.extra_parity, rules_cfg.wide.extra_run, total) {
                swap_ends(&mut live.striker, &mut live.non_striker);
            }
        }
        BallEvent::NoBall { runs } => {
            let runs = u32::from(*runs);
            let extra = u32::from(rules_cfg.no_ball.extra_run);
            let total = runs + extra;
            inn.total_runs += total;
            inn.extras.no_balls += extra;
            credit_bat(
                &mut inn.batting_stats,
                striker,
                runs,
                rules_cfg.no_ball.extra_ball,
            );
            charge_bowler(&mut inn.bowling_stats, bowler, total, false);
            if rules::rotates_after_extra(
                rules_cfg.extra_parity,
                rules_cfg.no_ball.extra_run,
                total,
            ) {
                swap_ends(&mut live.striker, &mut live.non_striker);
            }
        }
        BallEvent::Wicket(detail) => {
            let runs = u32::from(detail.runs);
            let extra = match detail.delivery {
                ExtraMode::Normal => 0,
                ExtraMode::Wide => u32::from(rules_cfg.wide.extra_run),
                ExtraMode::NoBall => u32::from(rules_cfg.no_ball.extra_run),
            };
            inn.total_runs += runs + extra;
            match detail.delivery {
                ExtraMode::Wide => inn.extras.wides += runs + extra,
                ExtraMode::NoBall => {
                    inn.extras.no_balls += extra;
                    credit_bat(&mut inn.batting_stats, striker, runs, true);
                }
                ExtraMode::Normal => credit_bat(&mut inn.batting_stats, striker, runs, true),
            }
            if legal {
                inn.balls += 1;
            }
            charge_bowler(&mut inn.bowling_stats, bowler, runs + extra, legal);

            inn.wickets += 1;
            if !live.out_batsmen.contains(&detail.out) {
                live.out_batsmen.push(detail.out);
            }

            let dismissal = Dismissal {
                kind: detail.kind,
                bowler,
                fielder: detail.fielder,
            };
            inn.batting_stats.entry(detail.out).dismissal = Some(dismissal.clone());
            inn.dismissals.insert(detail.out, dismissal);
            if detail.kind.credits_bowler() && detail.delivery != ExtraMode::NoBall {
                inn.bowling_stats.entry(bowler).wickets += 1;
            }

            if live.striker == Some(detail.out) {
                live.striker = None;
            } else if live.non_striker == Some(detail.out) {
                live.non_striker = None;
            }
        }
    }

    live.extra_mode = ExtraMode::Normal;

    if legal {
        rules::complete_over(&mut m);
        m = rules::evaluate(m);
    }
    m
}

fn blocked_reason(m: &Match, ball: &BallEvent) -> Option<&'static str> {
    if !m.scoring_open() {
        return Some("scoring closed");
    }
    let live = m.live.as_ref()?;
    if live.striker.is_none() || live.non_striker.is_none() {
        return Some("batter not selected");
    }
    if live.bowler.is_none() {
        return Some("bowler not selected");
    }
    if let BallEvent::Wicket(detail) = ball {
        if live.striker != Some(detail.out) && live.non_striker != Some(detail.out) {
            return Some("dismissed batter not at the crease");
        }
    }
    None
}

fn credit_bat(stats: &mut Ledger<BattingLine>, striker: PlayerId, runs: u32, faced: bool) {
    let line = stats.entry(striker);
    line.runs += runs;
    if runs == 4 {
        line.fours += 1;
    }
    if runs == 6 {
        line.sixes += 1;
    }
    if faced {
        line.balls += 1;
    }
}

fn charge_bowler(stats: &mut Ledger<BowlingLine>, bowler: PlayerId, runs: u32, legal: bool) {
    let line = stats.entry(bowler);
    line.runs += runs;
    if legal {
        line.balls += 1;
    }
}

pub(crate) fn swap_ends(striker: &mut Option<PlayerId>, non_striker: &mut Option<PlayerId>) {
    std::mem::swap(striker, non_striker);
}
