//! Fielding credits and Man-of-the-Match selection.

use crate::domain::ledger::Ledger;
use crate::domain::state::{
    BattingLine, BowlingLine, DismissalKind, FieldingLine, Match, PlayerId,
};

/// How equal top scores are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Earliest player in the winning roster.
    #[default]
    FirstInRoster,
}

/// Catches (including stumpings) and run-outs across both innings.
pub fn derive_fielding(m: &Match) -> Ledger<FieldingLine> {
    let mut fielding: Ledger<FieldingLine> = Ledger::new();
    for inn in &m.innings {
        for (_, dismissal) in inn.dismissals.iter() {
            let Some(fielder) = dismissal.fielder else {
                continue;
            };
            match dismissal.kind {
                DismissalKind::Caught | DismissalKind::Stumped => {
                    fielding.entry(fielder).catches += 1;
                }
                DismissalKind::RunOut => fielding.entry(fielder).run_outs += 1,
                _ => {}
            }
        }
    }
    fielding
}

pub fn batting_points(line: &BattingLine) -> u32 {
    let mut points = line.runs + line.fours + 2 * line.sixes;
    if line.balls > 0 {
        if line.runs * 100 >= 150 * line.balls {
            points += 8;
        } else if line.runs * 100 >= 120 * line.balls {
            points += 4;
        }
    }
    if line.runs >= 50 {
        points += 8;
    }
    if line.runs >= 100 {
        points += 15;
    }
    if line.dismissal.is_none() && line.runs >= 20 {
        points += 5;
    }
    points
}

pub fn bowling_points(line: &BowlingLine) -> u32 {
    let mut points = 20 * line.wickets + 8 * line.maidens;
    if line.balls > 0 {
        // economy = runs per over = 6 * runs / balls
        if line.runs <= line.balls {
            points += 8;
        } else if 3 * line.runs <= 4 * line.balls {
            points += 4;
        }
    }
    if line.wickets >= 4 {
        points += 8;
    }
    if line.wickets >= 5 {
        points += 12;
    }
    points
}

pub fn fielding_points(line: &FieldingLine) -> u32 {
    8 * line.catches + 10 * line.run_outs
}

/// Total points for `player` summed across both innings.
pub fn player_points(m: &Match, fielding: &Ledger<FieldingLine>, player: PlayerId) -> u32 {
    let mut total = 0;
    for inn in &m.innings {
        if let Some(line) = inn.batting_stats.get(player) {
            total += batting_points(line);
        }
        if let Some(line) = inn.bowling_stats.get(player) {
            total += bowling_points(line);
        }
    }
    if let Some(line) = fielding.get(player) {
        total += fielding_points(line);
    }
    total
}

/// Best performer on the winning side. `None` for a tie or no result.
pub fn select_man_of_match(
    m: &Match,
    fielding: &Ledger<FieldingLine>,
    tie_break: TieBreak,
) -> Option<PlayerId> {
    let winner = m.result.as_ref()?.winner?;
    let roster = &m.teams.side(winner).players;

    let mut best: Option<(PlayerId, u32)> = None;
    for entry in roster {
        let points = player_points(m, fielding, entry.id);
        best = match (best, tie_break) {
            (None, _) => Some((entry.id, points)),
            (Some((_, top)), TieBreak::FirstInRoster) if points > top => Some((entry.id, points)),
            (keep, _) => keep,
        };
    }
    best.map(|(id, _)| id)
}
