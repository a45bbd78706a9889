//! Wire format for a completed match handed to the stats pipeline.
//!
//! Everything is keyed by display name; the pipeline resolves names to
//! season players itself.

use serde::{Deserialize, Serialize};

use crate::domain::state::{DismissalKind, Extras, MatchRules, MatchType, ResultKind, TossDecision};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizedMatch {
    pub match_id: String,
    pub season_id: i64,
    pub match_type: MatchType,
    pub total_overs: Option<u32>,
    pub rules: MatchRules,
    pub toss: Option<FinalizedToss>,
    /// Exactly two teams, team A first.
    pub teams: Vec<FinalizedTeam>,
    /// Every participant across both rosters.
    pub players: Vec<String>,
    pub innings: Vec<FinalizedInnings>,
    pub result: FinalizedResult,
    #[serde(default)]
    pub fielding: Vec<FieldingEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizedToss {
    pub winner: String,
    pub decision: TossDecision,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizedTeam {
    pub name: String,
    pub players: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizedInnings {
    pub batting_team: String,
    pub bowling_team: String,
    pub total_runs: u32,
    pub wickets: u32,
    pub balls: u32,
    pub extras: Extras,
    pub batting: Vec<BattingEntry>,
    pub bowling: Vec<BowlingEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattingEntry {
    pub name: String,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub dismissal: Option<DismissalEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DismissalEntry {
    pub kind: DismissalKind,
    pub bowler: String,
    pub fielder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowlingEntry {
    pub name: String,
    pub balls: u32,
    pub runs: u32,
    pub wickets: u32,
    pub maidens: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizedResult {
    pub winner: Option<String>,
    pub kind: ResultKind,
    pub margin: u32,
    pub man_of_the_match: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldingEntry {
    pub name: String,
    pub catches: u32,
    pub run_outs: u32,
}
