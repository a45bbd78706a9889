//! Over, innings and match completion rules.

use tracing::{debug, info};

use crate::domain::ball::swap_ends;
use crate::domain::state::{
    live_parts_mut, BallEvent, ExtraMode, ExtraParityRule, Innings, Match, MatchResult,
    MatchStatus, ResultKind,
};

pub const BALLS_PER_OVER: u32 = 6;

pub fn is_over_complete(balls: u32) -> bool {
    balls > 0 && balls % BALLS_PER_OVER == 0
}

/// No runs conceded and no extras bowled in the over.
pub fn is_maiden(this_over: &[BallEvent]) -> bool {
    this_over.iter().all(|ball| match ball {
        BallEvent::Run { runs } => *runs == 0,
        BallEvent::Wide { .. } | BallEvent::NoBall { .. } => false,
        BallEvent::Wicket(detail) => detail.runs == 0 && detail.delivery == ExtraMode::Normal,
    })
}

/// Whether the batters change ends after a wide or no-ball.
pub fn rotates_after_extra(parity: ExtraParityRule, extra_run: bool, total: u32) -> bool {
    match parity {
        ExtraParityRule::AsRecorded => {
            if extra_run {
                total % 2 == 0 && total > 0
            } else {
                total % 2 == 1
            }
        }
        ExtraParityRule::TotalRuns => total % 2 == 1,
    }
}

/// Close the over if the last legal delivery was its sixth ball.
pub fn complete_over(m: &mut Match) {
    let match_id = m.id.clone();
    let Some((live, inn)) = live_parts_mut(m) else {
        return;
    };
    if !is_over_complete(inn.balls) {
        return;
    }

    let maiden = is_maiden(&inn.this_over);
    if let Some(bowler) = live.bowler {
        if maiden {
            inn.bowling_stats.entry(bowler).maidens += 1;
        }
    }
    live.last_over_bowler = live.bowler.take();
    swap_ends(&mut live.striker, &mut live.non_striker);
    inn.this_over.clear();

    debug!(
        match_id = %match_id,
        overs = inn.balls / BALLS_PER_OVER,
        maiden,
        "over complete"
    );
}

pub fn innings_exhausted(total_overs: Option<u32>, inn: &Innings, batting_players: u32) -> bool {
    let overs_done = total_overs.is_some_and(|overs| inn.balls >= overs * BALLS_PER_OVER);
    let all_out = batting_players >= 2 && inn.wickets >= batting_players - 1;
    overs_done || all_out
}

/// Runs the side batting second needs to win.
pub fn target(m: &Match) -> Option<u32> {
    m.innings.first().map(|first| first.total_runs + 1)
}

/// Check for a successful chase or the end of the current innings.
pub fn evaluate(mut m: Match) -> Match {
    let Some(idx) = m.live.as_ref().map(|live| live.innings_index) else {
        return m;
    };
    let Some(inn) = m.innings.get(idx) else {
        return m;
    };
    let batting_players = m.teams.side(inn.batting_team).players.len() as u32;

    if idx == 1 {
        if let Some(target) = target(&m) {
            if inn.total_runs >= target {
                let result = MatchResult {
                    winner: Some(inn.batting_team),
                    kind: ResultKind::Wickets,
                    margin: batting_players
                        .saturating_sub(1)
                        .saturating_sub(inn.wickets),
                };
                return end_match(m, result);
            }
        }
    }

    if !innings_exhausted(m.total_overs, inn, batting_players) {
        return m;
    }

    if idx == 0 {
        if let Some(first) = m.innings.get_mut(0) {
            first.completed = true;
            info!(
                match_id = %m.id,
                runs = first.total_runs,
                wickets = first.wickets,
                "first innings complete"
            );
        }
        if let Some(live) = m.live.as_mut() {
            live.pending_next_innings = true;
        }
        return m;
    }

    let (Some(first), Some(second)) = (m.innings.first(), m.innings.get(1)) else {
        return m;
    };
    let result = if second.total_runs < first.total_runs {
        MatchResult {
            winner: Some(first.batting_team),
            kind: ResultKind::Runs,
            margin: first.total_runs - second.total_runs,
        }
    } else {
        MatchResult {
            winner: None,
            kind: ResultKind::Tie,
            margin: 0,
        }
    };
    end_match(m, result)
}

pub fn end_match(mut m: Match, result: MatchResult) -> Match {
    if let Some(idx) = m.live.as_ref().map(|live| live.innings_index) {
        if let Some(inn) = m.innings.get_mut(idx) {
            inn.completed = true;
        }
    }
    info!(
        match_id = %m.id,
        winner = ?result.winner,
        kind = result.kind.as_str(),
        margin = result.margin,
        "match complete"
    );
    m.status = MatchStatus::Completed;
    m.result = Some(result);
    m.ui.match_result_seen = false;
    m
}
