//! Builds the finalized-match payload from an acknowledged match.

use crate::domain::ledger::Ledger;
use crate::domain::state::{require_result, FieldingLine, Match, MatchStatus, PlayerId};
use crate::errors::domain::DomainError;
use crate::protocol::finalized_match::{
    BattingEntry, BowlingEntry, DismissalEntry, FieldingEntry, FinalizedInnings, FinalizedMatch,
    FinalizedResult, FinalizedTeam, FinalizedToss,
};

pub fn build_payload(
    m: &Match,
    fielding: &Ledger<FieldingLine>,
    man_of_the_match: Option<PlayerId>,
) -> Result<FinalizedMatch, DomainError> {
    if m.status != MatchStatus::Completed {
        return Err(DomainError::validation("match is not completed"));
    }
    let result = require_result(m, "build_payload")?;

    let name = |id: PlayerId| -> Result<String, DomainError> {
        m.player_name(id).map(str::to_string).ok_or_else(|| {
            DomainError::validation(format!("player {} is not on either roster", id.0))
        })
    };
    let team_name = |side| m.teams.side(side).name.clone();

    let teams = [&m.teams.team_a, &m.teams.team_b]
        .into_iter()
        .map(|team| FinalizedTeam {
            name: team.name.clone(),
            players: team.players.iter().map(|p| p.name.clone()).collect(),
        })
        .collect::<Vec<_>>();
    let players = teams
        .iter()
        .flat_map(|team| team.players.iter().cloned())
        .collect();

    let mut innings = Vec::with_capacity(m.innings.len());
    for inn in &m.innings {
        let mut batting = Vec::with_capacity(inn.batting_stats.len());
        for (id, line) in inn.batting_stats.iter() {
            let dismissal = match &line.dismissal {
                Some(d) => Some(DismissalEntry {
                    kind: d.kind,
                    bowler: name(d.bowler)?,
                    fielder: d.fielder.map(name).transpose()?,
                }),
                None => None,
            };
            batting.push(BattingEntry {
                name: name(id)?,
                runs: line.runs,
                balls: line.balls,
                fours: line.fours,
                sixes: line.sixes,
                dismissal,
            });
        }

        let mut bowling = Vec::with_capacity(inn.bowling_stats.len());
        for (id, line) in inn.bowling_stats.iter() {
            bowling.push(BowlingEntry {
                name: name(id)?,
                balls: line.balls,
                runs: line.runs,
                wickets: line.wickets,
                maidens: line.maidens,
            });
        }

        innings.push(FinalizedInnings {
            batting_team: team_name(inn.batting_team),
            bowling_team: team_name(inn.bowling_team),
            total_runs: inn.total_runs,
            wickets: inn.wickets,
            balls: inn.balls,
            extras: inn.extras,
            batting,
            bowling,
        });
    }

    let mut fielding_entries = Vec::with_capacity(fielding.len());
    for (id, line) in fielding.iter() {
        fielding_entries.push(FieldingEntry {
            name: name(id)?,
            catches: line.catches,
            run_outs: line.run_outs,
        });
    }

    Ok(FinalizedMatch {
        match_id: m.id.clone(),
        season_id: m.season_id,
        match_type: m.match_type,
        total_overs: m.total_overs,
        rules: m.rules,
        toss: m.toss.map(|toss| FinalizedToss {
            winner: team_name(toss.winner),
            decision: toss.decision,
        }),
        teams,
        players,
        innings,
        result: FinalizedResult {
            winner: result.winner.map(team_name),
            kind: result.kind,
            margin: result.margin,
            man_of_the_match: man_of_the_match.map(name).transpose()?,
        },
        fielding: fielding_entries,
    })
}
