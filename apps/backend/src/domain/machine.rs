//! Match lifecycle transitions.
//!
//! Every operator action is a pure function from the current `Match` to the
//! next one. Guard failures return the match unchanged; only constructors
//! that build a new match report errors.

use tracing::{debug, info};

use crate::domain::ball::{record_ball, swap_ends};
use crate::domain::history;
use crate::domain::ledger::Ledger;
use crate::domain::names::{clean_display_name, normalize_name};
use crate::domain::state::{
    live_parts_mut, ActionKind, BallEvent, DismissalKind, ExtraMode, FieldingLine, Innings,
    LiveState, Match, MatchRules, MatchStatus, MatchType, PlayerId, RosterEntry, Team, TeamSide,
    Teams, Toss, UiFlags, WicketDetail,
};
use crate::errors::domain::DomainError;

/// Parameters for a fresh match in `Setup`.
#[derive(Debug, Clone)]
pub struct NewMatch {
    pub id: String,
    pub season_id: i64,
    pub match_type: MatchType,
    pub total_overs: Option<u32>,
    pub rules: Option<MatchRules>,
    pub team_a: String,
    pub team_b: String,
    pub players_a: Vec<String>,
    pub players_b: Vec<String>,
    pub now_ms: i64,
}

pub fn create_match(new: NewMatch) -> Result<Match, DomainError> {
    let total_overs = match new.match_type {
        MatchType::Test => None,
        MatchType::Overs | MatchType::Custom => match new.total_overs {
            Some(overs) if overs > 0 => Some(overs),
            _ => {
                return Err(DomainError::validation(
                    "total overs must be positive for limited-overs matches",
                ))
            }
        },
    };

    let team_a = clean_display_name(&new.team_a);
    let team_b = clean_display_name(&new.team_b);
    if team_a.is_empty() || team_b.is_empty() {
        return Err(DomainError::validation("team names must not be empty"));
    }
    if normalize_name(&team_a) == normalize_name(&team_b) {
        return Err(DomainError::validation("team names must differ"));
    }

    let mut m = Match {
        id: new.id,
        season_id: new.season_id,
        match_type: new.match_type,
        total_overs,
        rules: new.rules.unwrap_or_default(),
        teams: Teams {
            team_a: Team {
                name: team_a,
                players: Vec::new(),
            },
            team_b: Team {
                name: team_b,
                players: Vec::new(),
            },
        },
        toss: None,
        innings: Vec::new(),
        live: None,
        status: MatchStatus::Setup,
        result: None,
        ui: UiFlags::default(),
        fielding: None,
        man_of_the_match: None,
        next_player_id: 1,
        created_at_ms: new.now_ms,
        updated_at_ms: new.now_ms,
    };

    for name in &new.players_a {
        enroll(&mut m, TeamSide::A, name)?;
    }
    for name in &new.players_b {
        enroll(&mut m, TeamSide::B, name)?;
    }

    info!(match_id = %m.id, season_id = m.season_id, "match created");
    Ok(m)
}

/// Add `name` to a roster, assigning the next player id.
pub(crate) fn enroll(
    m: &mut Match,
    side: TeamSide,
    raw_name: &str,
) -> Result<PlayerId, DomainError> {
    let name = clean_display_name(raw_name);
    if name.is_empty() {
        return Err(DomainError::validation("player name must not be empty"));
    }
    let key = normalize_name(&name);
    let taken = m
        .teams
        .team_a
        .players
        .iter()
        .chain(m.teams.team_b.players.iter())
        .any(|p| normalize_name(&p.name) == key);
    if taken {
        return Err(DomainError::validation(format!(
            "player '{name}' is already in this match"
        )));
    }

    let id = PlayerId(m.next_player_id);
    m.next_player_id += 1;
    m.teams.side_mut(side).players.push(RosterEntry { id, name });
    Ok(id)
}

pub fn record_toss(mut m: Match, toss: Toss) -> Match {
    if m.status != MatchStatus::Setup {
        debug!(match_id = %m.id, "toss ignored: match already started");
        return m;
    }
    let batting = toss.batting_first();
    m.toss = Some(toss);
    m.innings = vec![Innings::new(batting)];
    m.live = Some(LiveState::for_innings(0));
    m.status = MatchStatus::Live;
    info!(match_id = %m.id, ?batting, "toss recorded, first innings live");
    m
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Crease {
    Striker,
    NonStriker,
}

fn select_batter(mut m: Match, slot: Crease, id: PlayerId) -> Match {
    if !m.scoring_open() {
        debug!(match_id = %m.id, "selection ignored: scoring closed");
        return m;
    }
    let eligible = match (m.live.as_ref(), m.current_innings()) {
        (Some(live), Some(inn)) => {
            m.batting_roster(inn).contains(id)
                && !live.out_batsmen.contains(&id)
                && live.striker != Some(id)
                && live.non_striker != Some(id)
        }
        _ => false,
    };
    if !eligible {
        debug!(match_id = %m.id, player = id.0, "selection ignored: batter not eligible");
        return m;
    }

    history::push(&mut m, ActionKind::Selection);
    if let Some((live, inn)) = live_parts_mut(&mut m) {
        match slot {
            Crease::Striker => live.striker = Some(id),
            Crease::NonStriker => live.non_striker = Some(id),
        }
        inn.batting_stats.entry(id);
    }
    m
}

pub fn select_striker(m: Match, id: PlayerId) -> Match {
    select_batter(m, Crease::Striker, id)
}

pub fn select_non_striker(m: Match, id: PlayerId) -> Match {
    select_batter(m, Crease::NonStriker, id)
}

pub fn select_bowler(mut m: Match, id: PlayerId) -> Match {
    if !m.scoring_open() {
        debug!(match_id = %m.id, "selection ignored: scoring closed");
        return m;
    }
    let eligible = match (m.live.as_ref(), m.current_innings()) {
        (Some(live), Some(inn)) => {
            m.bowling_roster(inn).contains(id) && live.last_over_bowler != Some(id)
        }
        _ => false,
    };
    if !eligible {
        debug!(match_id = %m.id, player = id.0, "selection ignored: bowler not eligible");
        return m;
    }

    history::push(&mut m, ActionKind::Selection);
    if let Some(live) = m.live.as_mut() {
        live.bowler = Some(id);
    }
    m
}

pub fn swap_strike(mut m: Match) -> Match {
    if !m.scoring_open() {
        return m;
    }
    history::push(&mut m, ActionKind::StrikeSwap);
    if let Some(live) = m.live.as_mut() {
        swap_ends(&mut live.striker, &mut live.non_striker);
    }
    m
}

/// Arm a delivery type for the next ball; choosing the armed mode again disarms it.
pub fn toggle_extra_mode(mut m: Match, mode: ExtraMode) -> Match {
    if !m.scoring_open() {
        return m;
    }
    if let Some(live) = m.live.as_mut() {
        live.extra_mode = if live.extra_mode == mode {
            ExtraMode::Normal
        } else {
            mode
        };
    }
    m
}

/// Score `runs` off the next ball as the armed delivery type.
pub fn apply_runs(m: Match, runs: u8) -> Match {
    let mode = m.live.as_ref().map(|live| live.extra_mode).unwrap_or_default();
    let ball = match mode {
        ExtraMode::Normal => BallEvent::Run { runs },
        ExtraMode::Wide => BallEvent::Wide { runs },
        ExtraMode::NoBall => BallEvent::NoBall { runs },
    };
    record_ball(m, ball)
}

pub fn record_wicket(
    m: Match,
    kind: DismissalKind,
    out: PlayerId,
    fielder: Option<PlayerId>,
    runs: u8,
) -> Match {
    let delivery = m.live.as_ref().map(|live| live.extra_mode).unwrap_or_default();
    record_ball(
        m,
        BallEvent::Wicket(WicketDetail {
            kind,
            out,
            fielder,
            runs,
            delivery,
        }),
    )
}

pub fn start_second_innings(mut m: Match) -> Match {
    let ready = m.status == MatchStatus::Live
        && m.innings.len() == 1
        && m
            .live
            .as_ref()
            .is_some_and(|live| live.pending_next_innings && live.innings_index == 0);
    if !ready {
        debug!(match_id = %m.id, "second innings ignored: first innings not finished");
        return m;
    }
    let batting = m.innings[0].bowling_team;
    m.innings.push(Innings::new(batting));
    m.live = Some(LiveState::for_innings(1));
    info!(match_id = %m.id, ?batting, "second innings live");
    m
}

/// Reverse the ball that ended the first innings and resume scoring it.
pub fn undo_from_innings_popup(mut m: Match) -> Match {
    let pending = m.status == MatchStatus::Live
        && m
            .live
            .as_ref()
            .is_some_and(|live| live.pending_next_innings && !live.history.is_empty());
    if !pending {
        return m;
    }
    history::pop_and_restore(&mut m);
    if let Some((live, inn)) = live_parts_mut(&mut m) {
        live.pending_next_innings = false;
        inn.completed = false;
    }
    info!(match_id = %m.id, "first innings reopened");
    m
}

/// Reverse the ball that ended the match before the result is acknowledged.
pub fn undo_from_result_popup(mut m: Match) -> Match {
    let open = m.status == MatchStatus::Completed
        && !m.ui.match_result_seen
        && !m.ui.submitted
        && history::depth(&m) > 0;
    if !open {
        return m;
    }
    history::pop_and_restore(&mut m);
    if let Some((_, inn)) = live_parts_mut(&mut m) {
        inn.completed = false;
    }
    m.status = MatchStatus::Live;
    m.result = None;
    info!(match_id = %m.id, "result withdrawn");
    m
}

/// Record the acknowledgement of a completed match together with its
/// derived awards.
pub fn acknowledge_result(
    mut m: Match,
    fielding: Ledger<FieldingLine>,
    man_of_the_match: Option<PlayerId>,
) -> Match {
    if m.status != MatchStatus::Completed || m.ui.match_result_seen {
        return m;
    }
    m.fielding = Some(fielding);
    m.man_of_the_match = man_of_the_match;
    m.ui.match_result_seen = true;
    info!(match_id = %m.id, mom = ?man_of_the_match.map(|p| p.0), "result acknowledged");
    m
}

pub fn mark_submitted(mut m: Match) -> Match {
    if m.status == MatchStatus::Completed {
        m.ui.submitted = true;
    }
    m
}

/// Return a completed match to live scoring. History is kept intact.
pub fn reopen(mut m: Match) -> Match {
    if m.status != MatchStatus::Completed {
        return m;
    }
    if let Some((live, inn)) = live_parts_mut(&mut m) {
        live.pending_next_innings = false;
        inn.completed = false;
    }
    m.status = MatchStatus::Live;
    m.result = None;
    m.man_of_the_match = None;
    m.fielding = None;
    m.ui = UiFlags::default();
    info!(match_id = %m.id, "match reopened");
    m
}

/// Fresh match with the same season, format, rules and rosters.
pub fn rematch(m: &Match, id: String, now_ms: i64) -> Result<Match, DomainError> {
    if m.status != MatchStatus::Completed {
        return Err(DomainError::validation(
            "rematch is only available for completed matches",
        ));
    }
    let roster = |side: &Team| side.players.iter().map(|p| p.name.clone()).collect();
    create_match(NewMatch {
        id,
        season_id: m.season_id,
        match_type: m.match_type,
        total_overs: m.total_overs,
        rules: Some(m.rules),
        team_a: m.teams.team_a.name.clone(),
        team_b: m.teams.team_b.name.clone(),
        players_a: roster(&m.teams.team_a),
        players_b: roster(&m.teams.team_b),
        now_ms,
    })
}
