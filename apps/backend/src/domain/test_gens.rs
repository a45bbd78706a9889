// Proptest generators for scoring actions.
//
// Wickets are generated abstractly (which end, which kind) and resolved to a
// concrete batter when applied, so every generated sequence is playable.

use proptest::prelude::*;

use crate::domain::state::{
    BallEvent, DismissalKind, ExtraMode, ExtraParityRule, LiveState, MatchRules, WicketDetail,
};

#[derive(Debug, Clone, Copy)]
pub enum Action {
    Run(u8),
    Wide(u8),
    NoBall(u8),
    StrikerOut(DismissalKind, ExtraMode),
    NonStrikerRunOut(u8, ExtraMode),
}

impl Action {
    /// Concrete delivery for the current crease.
    pub fn to_ball(self, live: &LiveState) -> Option<BallEvent> {
        let ball = match self {
            Action::Run(runs) => BallEvent::Run { runs },
            Action::Wide(runs) => BallEvent::Wide { runs },
            Action::NoBall(runs) => BallEvent::NoBall { runs },
            Action::StrikerOut(kind, delivery) => BallEvent::Wicket(WicketDetail {
                kind,
                out: live.striker?,
                fielder: None,
                runs: 0,
                delivery,
            }),
            Action::NonStrikerRunOut(runs, delivery) => BallEvent::Wicket(WicketDetail {
                kind: DismissalKind::RunOut,
                out: live.non_striker?,
                fielder: None,
                runs,
                delivery,
            }),
        };
        Some(ball)
    }
}

pub fn delivery() -> impl Strategy<Value = ExtraMode> {
    prop_oneof![
        6 => Just(ExtraMode::Normal),
        1 => Just(ExtraMode::Wide),
        1 => Just(ExtraMode::NoBall),
    ]
}

pub fn dismissal_kind() -> impl Strategy<Value = DismissalKind> {
    prop_oneof![
        Just(DismissalKind::Bowled),
        Just(DismissalKind::Caught),
        Just(DismissalKind::Lbw),
        Just(DismissalKind::Stumped),
        Just(DismissalKind::HitWicket),
        Just(DismissalKind::Special),
    ]
}

pub fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        12 => (0u8..=6).prop_map(Action::Run),
        2 => (0u8..=4).prop_map(Action::Wide),
        2 => (0u8..=6).prop_map(Action::NoBall),
        1 => (dismissal_kind(), delivery()).prop_map(|(k, d)| Action::StrikerOut(k, d)),
        1 => (0u8..=4, delivery()).prop_map(|(r, d)| Action::NonStrikerRunOut(r, d)),
    ]
}

pub fn rules() -> impl Strategy<Value = MatchRules> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        prop_oneof![
            Just(ExtraParityRule::AsRecorded),
            Just(ExtraParityRule::TotalRuns)
        ],
    )
        .prop_map(|(wr, wb, nr, nb, parity)| {
            let mut rules = MatchRules::default();
            rules.wide.extra_run = wr;
            rules.wide.extra_ball = wb;
            rules.no_ball.extra_run = nr;
            rules.no_ball.extra_ball = nb;
            rules.extra_parity = parity;
            rules
        })
}
