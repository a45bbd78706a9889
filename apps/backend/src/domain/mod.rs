//! Domain layer: pure scoring logic types and transitions.

pub mod ball;
pub mod editing;
pub mod finalize;
pub mod history;
pub mod ledger;
pub mod machine;
pub mod man_of_match;
pub mod names;
pub mod rules;
pub mod scorecard;
pub mod state;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_ball;
#[cfg(test)]
mod tests_machine;
#[cfg(test)]
mod tests_scenarios;
#[cfg(test)]
mod tests_undo;

// Re-exports for ergonomics
pub use ball::record_ball;
pub use history::undo;
pub use ledger::Ledger;
pub use man_of_match::{derive_fielding, select_man_of_match, TieBreak};
pub use names::normalize_name;
pub use state::{BallEvent, Match, MatchStatus, PlayerId, TeamSide};
