#![allow(dead_code)]

// tests/common/mod.rs
use scorebook::config::db::{DbKind, DbProfile};
use scorebook::domain::state::{
    DismissalKind, ExtraParityRule, ExtraRule, Extras, MatchRules, MatchType, ResultKind,
    TossDecision,
};
use scorebook::entities::{CompletedMatches, Players, TeamPlayers, Teams};
use scorebook::infra::db::bootstrap_db;
use scorebook::protocol::finalized_match::{
    BattingEntry, BowlingEntry, DismissalEntry, FieldingEntry, FinalizedInnings, FinalizedMatch,
    FinalizedResult, FinalizedTeam, FinalizedToss,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    scorebook_test_support::logging::init();
}

/// Private in-memory SQLite database with the schema applied.
pub async fn fresh_db() -> DatabaseConnection {
    bootstrap_db(DbKind::SqliteMemory, DbProfile::Test)
        .await
        .expect("bootstrap in-memory sqlite")
}

#[derive(Debug, PartialEq, Eq)]
pub struct RowCounts {
    pub players: u64,
    pub teams: u64,
    pub team_players: u64,
    pub matches: u64,
}

pub const EMPTY: RowCounts = RowCounts {
    players: 0,
    teams: 0,
    team_players: 0,
    matches: 0,
};

pub async fn row_counts(db: &DatabaseConnection) -> RowCounts {
    RowCounts {
        players: Players::find().count(db).await.expect("count players"),
        teams: Teams::find().count(db).await.expect("count teams"),
        team_players: TeamPlayers::find().count(db).await.expect("count rosters"),
        matches: CompletedMatches::find().count(db).await.expect("count matches"),
    }
}

fn bat(name: &str, runs: u32, balls: u32, fours: u32, sixes: u32) -> BattingEntry {
    BattingEntry {
        name: name.into(),
        runs,
        balls,
        fours,
        sixes,
        dismissal: None,
    }
}

fn out(
    mut entry: BattingEntry,
    kind: DismissalKind,
    bowler: &str,
    fielder: Option<&str>,
) -> BattingEntry {
    entry.dismissal = Some(DismissalEntry {
        kind,
        bowler: bowler.into(),
        fielder: fielder.map(str::to_string),
    });
    entry
}

fn bowl(name: &str, balls: u32, runs: u32, wickets: u32, maidens: u32) -> BowlingEntry {
    BowlingEntry {
        name: name.into(),
        balls,
        runs,
        wickets,
        maidens,
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Lions 44/2 (5 ov) lose to Tigers 45/1 (4.3 ov).
///
/// - Asha 30 (20) c Dev b Esha; Chen 0 (1) b Farid, a duck
/// - Farid never faced in the chase
/// - Dev 25* and one catch, man of the match; Asha ran out Esha
pub fn sample_payload(season_id: i64) -> FinalizedMatch {
    let lions = ["Asha", "Bela", "Chen"];
    let tigers = ["Dev", "Esha", "Farid"];
    let rule = ExtraRule {
        extra_run: true,
        extra_ball: true,
    };
    FinalizedMatch {
        match_id: "m-sample".into(),
        season_id,
        match_type: MatchType::Overs,
        total_overs: Some(5),
        rules: MatchRules {
            wide: rule,
            no_ball: rule,
            extra_parity: ExtraParityRule::AsRecorded,
        },
        toss: Some(FinalizedToss {
            winner: "Lions".into(),
            decision: TossDecision::Bat,
        }),
        teams: vec![
            FinalizedTeam {
                name: "Lions".into(),
                players: names(&lions),
            },
            FinalizedTeam {
                name: "Tigers".into(),
                players: names(&tigers),
            },
        ],
        players: lions.iter().chain(tigers.iter()).map(|s| s.to_string()).collect(),
        innings: vec![
            FinalizedInnings {
                batting_team: "Lions".into(),
                bowling_team: "Tigers".into(),
                total_runs: 44,
                wickets: 2,
                balls: 30,
                extras: Extras {
                    wides: 2,
                    no_balls: 0,
                },
                batting: vec![
                    out(bat("Asha", 30, 20, 3, 1), DismissalKind::Caught, "Esha", Some("Dev")),
                    bat("Bela", 12, 9, 1, 0),
                    out(bat("Chen", 0, 1, 0, 0), DismissalKind::Bowled, "Farid", None),
                ],
                bowling: vec![bowl("Esha", 18, 20, 1, 0), bowl("Farid", 12, 24, 1, 0)],
            },
            FinalizedInnings {
                batting_team: "Tigers".into(),
                bowling_team: "Lions".into(),
                total_runs: 45,
                wickets: 1,
                balls: 27,
                extras: Extras::default(),
                batting: vec![
                    bat("Dev", 25, 15, 2, 1),
                    out(bat("Esha", 20, 12, 2, 0), DismissalKind::RunOut, "Bela", Some("Asha")),
                    bat("Farid", 0, 0, 0, 0),
                ],
                bowling: vec![
                    bowl("Asha", 12, 20, 0, 0),
                    bowl("Bela", 9, 25, 0, 0),
                    bowl("Chen", 6, 0, 0, 1),
                ],
            },
        ],
        result: FinalizedResult {
            winner: Some("Tigers".into()),
            kind: ResultKind::Wickets,
            margin: 1,
            man_of_the_match: Some("Dev".into()),
        },
        fielding: vec![
            FieldingEntry {
                name: "Dev".into(),
                catches: 1,
                run_outs: 0,
            },
            FieldingEntry {
                name: "Asha".into(),
                catches: 0,
                run_outs: 1,
            },
        ],
    }
}
