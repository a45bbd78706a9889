//! Snapshot-based undo for the innings in progress.

use tracing::debug;

use crate::domain::state::{
    live_parts_mut, ActionKind, HistoryEntry, HistorySnapshot, Innings, LiveState, Match,
};

pub fn snapshot(live: &LiveState, inn: &Innings) -> HistorySnapshot {
    HistorySnapshot {
        striker: live.striker,
        non_striker: live.non_striker,
        bowler: live.bowler,
        last_over_bowler: live.last_over_bowler,
        balls: inn.balls,
        total_runs: inn.total_runs,
        wickets: inn.wickets,
        extras: inn.extras,
        batting_stats: inn.batting_stats.clone(),
        bowling_stats: inn.bowling_stats.clone(),
        dismissals: inn.dismissals.clone(),
        out_batsmen: live.out_batsmen.clone(),
        this_over: inn.this_over.clone(),
        extra_mode: live.extra_mode,
    }
}

/// Record the current state before `action` mutates it.
pub fn push(m: &mut Match, action: ActionKind) {
    if let Some((live, inn)) = live_parts_mut(m) {
        let snapshot = snapshot(live, inn);
        live.history.push(HistoryEntry { action, snapshot });
    }
}

fn restore(live: &mut LiveState, inn: &mut Innings, snap: HistorySnapshot) {
    live.striker = snap.striker;
    live.non_striker = snap.non_striker;
    live.bowler = snap.bowler;
    live.last_over_bowler = snap.last_over_bowler;
    live.out_batsmen = snap.out_batsmen;
    live.extra_mode = snap.extra_mode;
    inn.balls = snap.balls;
    inn.total_runs = snap.total_runs;
    inn.wickets = snap.wickets;
    inn.extras = snap.extras;
    inn.batting_stats = snap.batting_stats;
    inn.bowling_stats = snap.bowling_stats;
    inn.dismissals = snap.dismissals;
    inn.this_over = snap.this_over;
}

/// Pop the latest entry and restore it. Returns the undone action.
pub(crate) fn pop_and_restore(m: &mut Match) -> Option<ActionKind> {
    let (live, inn) = live_parts_mut(m)?;
    let entry = live.history.pop()?;
    restore(live, inn, entry.snapshot);
    Some(entry.action)
}

/// Undo the most recent action while scoring is open.
pub fn undo(mut m: Match) -> Match {
    if !m.scoring_open() {
        debug!(match_id = %m.id, "undo ignored: scoring closed");
        return m;
    }
    match pop_and_restore(&mut m) {
        Some(action) => debug!(match_id = %m.id, ?action, "undo"),
        None => debug!(match_id = %m.id, "undo ignored: history empty"),
    }
    m
}

pub fn depth(m: &Match) -> usize {
    m.live.as_ref().map_or(0, |live| live.history.len())
}
