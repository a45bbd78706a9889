//! Live match orchestration: read the match document, apply one pure
//! transition, persist the result whole.

use time::OffsetDateTime;
use tracing::{debug, info};

use crate::domain::state::{
    BallEvent, DismissalKind, ExtraMode, Match, MatchRules, MatchStatus, PlayerId, TeamSide, Toss,
};
use crate::domain::{editing, finalize, history, machine, man_of_match};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::matches::CompletedMatchRecord;
use crate::services::submit::MatchSubmitter;
use crate::store::MatchStore;

fn now_ms() -> i64 {
    i64::try_from(OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000).unwrap_or(i64::MAX)
}

/// Result of acknowledging a completed match.
#[derive(Debug, Clone)]
pub struct Acknowledged {
    pub game: Match,
    pub record: CompletedMatchRecord,
}

pub struct LiveMatchService<S, P> {
    store: S,
    submitter: P,
}

impl<S: MatchStore, P: MatchSubmitter> LiveMatchService<S, P> {
    pub fn new(store: S, submitter: P) -> Self {
        Self { store, submitter }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn load(&self, id: &str) -> Result<Match, AppError> {
        let doc = self.store.get(id).await?.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Match, format!("Match {id} not found"))
        })?;
        let m = serde_json::from_str::<Match>(&doc).map_err(DomainError::from)?;
        Ok(m)
    }

    async fn persist(&self, mut m: Match) -> Result<Match, AppError> {
        m.updated_at_ms = now_ms();
        let doc = serde_json::to_string(&m)?;
        self.store.put(&m.id, doc).await?;
        Ok(m)
    }

    /// Apply a transition that cannot fail. Unchanged matches are not rewritten.
    pub async fn apply<F>(&self, id: &str, transition: F) -> Result<Match, AppError>
    where
        F: FnOnce(Match) -> Match,
    {
        let before = self.load(id).await?;
        let after = transition(before.clone());
        if after == before {
            debug!(match_id = %id, "transition left match unchanged");
            return Ok(after);
        }
        self.persist(after).await
    }

    /// Apply a transition that may reject its input.
    pub async fn try_apply<F>(&self, id: &str, transition: F) -> Result<Match, AppError>
    where
        F: FnOnce(Match) -> Result<Match, DomainError>,
    {
        let before = self.load(id).await?;
        let after = transition(before.clone())?;
        if after == before {
            return Ok(after);
        }
        self.persist(after).await
    }

    pub async fn create(&self, new: machine::NewMatch) -> Result<Match, AppError> {
        let m = machine::create_match(new)?;
        self.insert_new(m).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.store.delete(id).await?;
        Ok(())
    }

    pub async fn record_toss(&self, id: &str, toss: Toss) -> Result<Match, AppError> {
        self.apply(id, |m| machine::record_toss(m, toss)).await
    }

    pub async fn select_striker(&self, id: &str, player: PlayerId) -> Result<Match, AppError> {
        self.apply(id, |m| machine::select_striker(m, player)).await
    }

    pub async fn select_non_striker(&self, id: &str, player: PlayerId) -> Result<Match, AppError> {
        self.apply(id, |m| machine::select_non_striker(m, player)).await
    }

    pub async fn select_bowler(&self, id: &str, player: PlayerId) -> Result<Match, AppError> {
        self.apply(id, |m| machine::select_bowler(m, player)).await
    }

    pub async fn record_ball(&self, id: &str, ball: BallEvent) -> Result<Match, AppError> {
        self.apply(id, |m| crate::domain::ball::record_ball(m, ball)).await
    }

    pub async fn apply_runs(&self, id: &str, runs: u8) -> Result<Match, AppError> {
        self.apply(id, |m| machine::apply_runs(m, runs)).await
    }

    pub async fn toggle_extra_mode(&self, id: &str, mode: ExtraMode) -> Result<Match, AppError> {
        self.apply(id, |m| machine::toggle_extra_mode(m, mode)).await
    }

    pub async fn record_wicket(
        &self,
        id: &str,
        kind: DismissalKind,
        out: PlayerId,
        fielder: Option<PlayerId>,
        runs: u8,
    ) -> Result<Match, AppError> {
        self.apply(id, |m| machine::record_wicket(m, kind, out, fielder, runs)).await
    }

    pub async fn swap_strike(&self, id: &str) -> Result<Match, AppError> {
        self.apply(id, machine::swap_strike).await
    }

    pub async fn undo(&self, id: &str) -> Result<Match, AppError> {
        self.apply(id, history::undo).await
    }

    pub async fn start_second_innings(&self, id: &str) -> Result<Match, AppError> {
        self.apply(id, machine::start_second_innings).await
    }

    pub async fn undo_from_innings_popup(&self, id: &str) -> Result<Match, AppError> {
        self.apply(id, machine::undo_from_innings_popup).await
    }

    pub async fn undo_from_result_popup(&self, id: &str) -> Result<Match, AppError> {
        self.apply(id, machine::undo_from_result_popup).await
    }

    pub async fn reopen(&self, id: &str) -> Result<Match, AppError> {
        self.apply(id, machine::reopen).await
    }

    pub async fn add_player(
        &self,
        id: &str,
        side: TeamSide,
        name: &str,
    ) -> Result<Match, AppError> {
        self.try_apply(id, |m| editing::add_player(m, side, name)).await
    }

    pub async fn remove_player(&self, id: &str, player: PlayerId) -> Result<Match, AppError> {
        self.try_apply(id, |m| editing::remove_player(m, player)).await
    }

    pub async fn set_total_overs(&self, id: &str, overs: u32) -> Result<Match, AppError> {
        self.try_apply(id, |m| editing::set_total_overs(m, overs)).await
    }

    pub async fn update_rules(&self, id: &str, rules: MatchRules) -> Result<Match, AppError> {
        self.apply(id, |m| editing::update_rules(m, rules)).await
    }

    /// New `Setup` match under `new_id` copying the completed match's setup.
    pub async fn rematch(&self, id: &str, new_id: String) -> Result<Match, AppError> {
        let source = self.load(id).await?;
        let next = machine::rematch(&source, new_id, now_ms())?;
        self.insert_new(next).await
    }

    async fn insert_new(&self, m: Match) -> Result<Match, AppError> {
        if self.store.get(&m.id).await?.is_some() {
            return Err(DomainError::conflict(
                ConflictKind::Other("MatchExists".into()),
                format!("Match {} already exists", m.id),
            )
            .into());
        }
        self.persist(m).await
    }

    /// Acknowledge the result: derive awards, submit once, then persist.
    ///
    /// Nothing is written when the submission fails, so the call can be
    /// retried as is.
    pub async fn acknowledge(&self, id: &str) -> Result<Acknowledged, AppError> {
        let m = self.load(id).await?;
        if m.status != MatchStatus::Completed {
            return Err(DomainError::validation("match is not completed").into());
        }
        if m.ui.submitted {
            return Err(DomainError::conflict(
                ConflictKind::AlreadySubmitted,
                format!("Match {id} was already submitted"),
            )
            .into());
        }

        let fielding = man_of_match::derive_fielding(&m);
        let mom =
            man_of_match::select_man_of_match(&m, &fielding, man_of_match::TieBreak::FirstInRoster);
        let acked = machine::acknowledge_result(m, fielding.clone(), mom);
        let payload = finalize::build_payload(&acked, &fielding, mom)?;

        let record = self.submitter.submit(payload).await?;
        let game = self.persist(machine::mark_submitted(acked)).await?;
        info!(match_id = %id, record_id = record.id, "match submitted");
        Ok(Acknowledged { game, record })
    }
}
