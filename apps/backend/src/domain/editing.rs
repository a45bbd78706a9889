//! Operator edits to a match that is being set up or scored.

use tracing::info;

use crate::domain::machine::enroll;
use crate::domain::rules::{self, BALLS_PER_OVER};
use crate::domain::state::{Match, MatchRules, MatchStatus, MatchType, PlayerId, TeamSide};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

pub fn add_player(mut m: Match, side: TeamSide, name: &str) -> Result<Match, DomainError> {
    if m.status == MatchStatus::Completed {
        return Err(DomainError::validation(
            "players cannot be added to a completed match",
        ));
    }
    let id = enroll(&mut m, side, name)?;
    info!(match_id = %m.id, player = id.0, ?side, "player added");
    Ok(m)
}

/// A player is locked once the live match references them anywhere.
pub fn is_locked(m: &Match, id: PlayerId) -> bool {
    if let Some(live) = &m.live {
        let at_crease = live.striker == Some(id) || live.non_striker == Some(id);
        let bowling = live.bowler == Some(id) || live.last_over_bowler == Some(id);
        if at_crease || bowling || live.out_batsmen.contains(&id) {
            return true;
        }
    }
    m.innings.iter().any(|inn| {
        inn.batting_stats.contains(id)
            || inn.bowling_stats.contains(id)
            || inn
                .dismissals
                .values()
                .any(|d| d.bowler == id || d.fielder == Some(id))
    })
}

pub fn remove_player(mut m: Match, id: PlayerId) -> Result<Match, DomainError> {
    let Some(side) = m.side_of(id) else {
        return Err(DomainError::not_found(
            NotFoundKind::Player,
            format!("player {} is not on either roster", id.0),
        ));
    };
    if is_locked(&m, id) {
        return Err(DomainError::conflict(
            ConflictKind::PlayerLocked,
            "player has taken part in this match and cannot be removed",
        ));
    }
    m.teams.side_mut(side).players.retain(|p| p.id != id);
    info!(match_id = %m.id, player = id.0, "player removed");
    Ok(m)
}

/// Change the over limit. Never below the overs already started in the
/// current innings.
pub fn set_total_overs(mut m: Match, overs: u32) -> Result<Match, DomainError> {
    if m.match_type == MatchType::Test {
        return Err(DomainError::validation("test matches have no over limit"));
    }
    if overs == 0 {
        return Err(DomainError::validation("total overs must be positive"));
    }
    if let Some(inn) = m.current_innings() {
        let started = inn.balls.div_ceil(BALLS_PER_OVER);
        if overs < started {
            return Err(DomainError::validation(format!(
                "{started} overs have already been started"
            )));
        }
    }
    m.total_overs = Some(overs);
    info!(match_id = %m.id, overs, "total overs changed");

    if m.scoring_open() {
        m = rules::evaluate(m);
    }
    Ok(m)
}

pub fn update_rules(mut m: Match, rules: MatchRules) -> Match {
    m.rules = rules;
    m
}
