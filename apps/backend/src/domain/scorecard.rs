//! Read-only scorecard projections of a match.

use serde::Serialize;

use crate::domain::rules::{self, BALLS_PER_OVER};
use crate::domain::state::{Dismissal, DismissalKind, Extras, Match, ResultKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattingRow {
    pub name: String,
    pub dismissal: String,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub strike_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BowlingRow {
    pub name: String,
    pub overs: String,
    pub maidens: u32,
    pub runs: u32,
    pub wickets: u32,
    pub economy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InningsCard {
    pub batting_team: String,
    pub batting: Vec<BattingRow>,
    pub bowling: Vec<BowlingRow>,
    pub extras: Extras,
    /// e.g. `142/6 (20.0 ov)`
    pub total: String,
    pub run_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chase {
    pub target: u32,
    pub runs_needed: u32,
    /// `None` when the match has no over limit.
    pub balls_remaining: Option<u32>,
}

/// Overs in cricket notation: completed overs, then balls of the current one.
pub fn format_overs(balls: u32) -> String {
    format!("{}.{}", balls / BALLS_PER_OVER, balls % BALLS_PER_OVER)
}

pub fn run_rate(runs: u32, balls: u32) -> f64 {
    if balls == 0 {
        return 0.0;
    }
    round2(f64::from(runs) * f64::from(BALLS_PER_OVER) / f64::from(balls))
}

pub fn strike_rate(runs: u32, balls: u32) -> f64 {
    if balls == 0 {
        return 0.0;
    }
    round2(f64::from(runs) * 100.0 / f64::from(balls))
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub fn dismissal_text(m: &Match, dismissal: Option<&Dismissal>) -> String {
    let Some(d) = dismissal else {
        return "not out".to_string();
    };
    let name = |id| m.player_name(id).unwrap_or("?").to_string();
    let bowler = name(d.bowler);
    let fielder = d.fielder.map(name);
    match (d.kind, fielder) {
        (DismissalKind::Bowled, _) => format!("b {bowler}"),
        (DismissalKind::Caught, Some(f)) if f == bowler => format!("c & b {bowler}"),
        (DismissalKind::Caught, Some(f)) => format!("c {f} b {bowler}"),
        (DismissalKind::Caught, None) => format!("c ? b {bowler}"),
        (DismissalKind::Lbw, _) => format!("lbw b {bowler}"),
        (DismissalKind::Stumped, Some(f)) => format!("st {f} b {bowler}"),
        (DismissalKind::Stumped, None) => format!("st b {bowler}"),
        (DismissalKind::RunOut, Some(f)) => format!("run out ({f})"),
        (DismissalKind::RunOut, None) => "run out".to_string(),
        (DismissalKind::HitWicket, _) => format!("hit wicket b {bowler}"),
        (DismissalKind::Special, _) => "retired".to_string(),
    }
}

pub fn innings_card(m: &Match, index: usize) -> Option<InningsCard> {
    let inn = m.innings.get(index)?;
    let name = |id| m.player_name(id).unwrap_or("?").to_string();

    let batting = inn
        .batting_stats
        .iter()
        .map(|(id, line)| BattingRow {
            name: name(id),
            dismissal: dismissal_text(m, line.dismissal.as_ref()),
            runs: line.runs,
            balls: line.balls,
            fours: line.fours,
            sixes: line.sixes,
            strike_rate: strike_rate(line.runs, line.balls),
        })
        .collect();

    let bowling = inn
        .bowling_stats
        .iter()
        .map(|(id, line)| BowlingRow {
            name: name(id),
            overs: format_overs(line.balls),
            maidens: line.maidens,
            runs: line.runs,
            wickets: line.wickets,
            economy: run_rate(line.runs, line.balls),
        })
        .collect();

    Some(InningsCard {
        batting_team: m.teams.side(inn.batting_team).name.clone(),
        batting,
        bowling,
        extras: inn.extras,
        total: format!(
            "{}/{} ({} ov)",
            inn.total_runs,
            inn.wickets,
            format_overs(inn.balls)
        ),
        run_rate: run_rate(inn.total_runs, inn.balls),
    })
}

/// Requirement for the side batting second, while the chase is on.
pub fn chase(m: &Match) -> Option<Chase> {
    let live = m.live.as_ref()?;
    if live.innings_index != 1 {
        return None;
    }
    let target = rules::target(m)?;
    let inn = m.innings.get(1)?;
    Some(Chase {
        target,
        runs_needed: target.saturating_sub(inn.total_runs),
        balls_remaining: m
            .total_overs
            .map(|overs| (overs * BALLS_PER_OVER).saturating_sub(inn.balls)),
    })
}

pub fn result_line(m: &Match) -> Option<String> {
    let result = m.result.as_ref()?;
    let Some(winner) = result.winner else {
        return Some("Match tied".to_string());
    };
    let team = &m.teams.side(winner).name;
    let unit = match (result.kind, result.margin) {
        (ResultKind::Wickets, 1) => "wicket",
        (ResultKind::Wickets, _) => "wickets",
        (ResultKind::Runs, 1) => "run",
        (ResultKind::Runs, _) => "runs",
        (ResultKind::Tie, _) => return Some("Match tied".to_string()),
    };
    Some(format!("{team} won by {} {unit}", result.margin))
}
