use serde::{Deserialize, Serialize};

use crate::domain::ledger::Ledger;
use crate::errors::domain::DomainError;

/// Stable per-match player identifier, assigned when a name joins a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

/// Which of the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamSide {
    A,
    B,
}

impl TeamSide {
    pub fn other(self) -> Self {
        match self {
            TeamSide::A => TeamSide::B,
            TeamSide::B => TeamSide::A,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchType {
    /// Limited overs.
    Overs,
    /// No over limit; innings end on wickets only.
    Test,
    /// Operator-chosen over limit.
    Custom,
}

impl MatchType {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Overs => "OVERS",
            MatchType::Test => "TEST",
            MatchType::Custom => "CUSTOM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Setup,
    Live,
    Completed,
}

/// Configuration for one kind of extra (wide or no-ball).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraRule {
    /// Award one automatic run on top of anything the batters run.
    pub extra_run: bool,
    /// The delivery is re-bowled. For no-balls this also counts a ball
    /// faced by the striker.
    pub extra_ball: bool,
}

/// How strike rotation is decided after a wide or no-ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtraParityRule {
    /// Parity of the recorded total is tested as even when the extra-run
    /// rule is on and odd when it is off.
    #[default]
    AsRecorded,
    /// Rotate iff the total including any automatic extra is odd.
    TotalRuns,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRules {
    pub wide: ExtraRule,
    pub no_ball: ExtraRule,
    #[serde(default)]
    pub extra_parity: ExtraParityRule,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            wide: ExtraRule {
                extra_run: false,
                extra_ball: true,
            },
            no_ball: ExtraRule {
                extra_run: true,
                extra_ball: true,
            },
            extra_parity: ExtraParityRule::AsRecorded,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: PlayerId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub players: Vec<RosterEntry>,
}

impl Team {
    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teams {
    pub team_a: Team,
    pub team_b: Team,
}

impl Teams {
    pub fn side(&self, side: TeamSide) -> &Team {
        match side {
            TeamSide::A => &self.team_a,
            TeamSide::B => &self.team_b,
        }
    }

    pub fn side_mut(&mut self, side: TeamSide) -> &mut Team {
        match side {
            TeamSide::A => &mut self.team_a,
            TeamSide::B => &mut self.team_b,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TossDecision {
    Bat,
    Bowl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toss {
    pub winner: TeamSide,
    pub decision: TossDecision,
}

impl Toss {
    pub fn batting_first(&self) -> TeamSide {
        match self.decision {
            TossDecision::Bat => self.winner,
            TossDecision::Bowl => self.winner.other(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DismissalKind {
    Bowled,
    Caught,
    Lbw,
    Stumped,
    RunOut,
    HitWicket,
    Special,
}

impl DismissalKind {
    /// Dismissals that count towards the bowler's wickets.
    pub fn credits_bowler(self) -> bool {
        matches!(
            self,
            DismissalKind::Bowled
                | DismissalKind::Caught
                | DismissalKind::Lbw
                | DismissalKind::Stumped
                | DismissalKind::HitWicket
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DismissalKind::Bowled => "BOWLED",
            DismissalKind::Caught => "CAUGHT",
            DismissalKind::Lbw => "LBW",
            DismissalKind::Stumped => "STUMPED",
            DismissalKind::RunOut => "RUN_OUT",
            DismissalKind::HitWicket => "HIT_WICKET",
            DismissalKind::Special => "SPECIAL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dismissal {
    pub kind: DismissalKind,
    pub bowler: PlayerId,
    pub fielder: Option<PlayerId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattingLine {
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub dismissal: Option<Dismissal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowlingLine {
    pub balls: u32,
    pub runs: u32,
    pub wickets: u32,
    pub maidens: u32,
}

/// Runs conceded as extras, not credited to any batter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extras {
    pub wides: u32,
    pub no_balls: u32,
}

impl Extras {
    pub fn total(&self) -> u32 {
        self.wides + self.no_balls
    }
}

/// Which kind of delivery the next ball is being scored as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtraMode {
    #[default]
    Normal,
    Wide,
    NoBall,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WicketDetail {
    pub kind: DismissalKind,
    pub out: PlayerId,
    pub fielder: Option<PlayerId>,
    /// Runs completed before the dismissal (0..=4).
    pub runs: u8,
    pub delivery: ExtraMode,
}

/// One delivery's outcome. For wides and no-balls `runs` excludes the
/// automatic extra.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BallEvent {
    Run { runs: u8 },
    Wide { runs: u8 },
    NoBall { runs: u8 },
    Wicket(WicketDetail),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallClass {
    Run,
    Wide,
    NoBall,
    Wicket,
}

impl BallEvent {
    pub fn class(&self) -> BallClass {
        match self {
            BallEvent::Run { .. } => BallClass::Run,
            BallEvent::Wide { .. } => BallClass::Wide,
            BallEvent::NoBall { .. } => BallClass::NoBall,
            BallEvent::Wicket(_) => BallClass::Wicket,
        }
    }

    /// Whether this delivery counts towards the over.
    pub fn is_legal(&self) -> bool {
        match self {
            BallEvent::Run { .. } => true,
            BallEvent::Wide { .. } | BallEvent::NoBall { .. } => false,
            BallEvent::Wicket(detail) => detail.delivery == ExtraMode::Normal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Innings {
    pub batting_team: TeamSide,
    pub bowling_team: TeamSide,
    pub total_runs: u32,
    pub wickets: u32,
    /// Legal deliveries only.
    pub balls: u32,
    pub batting_stats: Ledger<BattingLine>,
    pub bowling_stats: Ledger<BowlingLine>,
    /// Deliveries since the last over boundary.
    pub this_over: Vec<BallEvent>,
    pub extras: Extras,
    pub dismissals: Ledger<Dismissal>,
    pub completed: bool,
}

impl Innings {
    pub fn new(batting_team: TeamSide) -> Self {
        Self {
            batting_team,
            bowling_team: batting_team.other(),
            total_runs: 0,
            wickets: 0,
            balls: 0,
            batting_stats: Ledger::new(),
            bowling_stats: Ledger::new(),
            this_over: Vec::new(),
            extras: Extras::default(),
            dismissals: Ledger::new(),
            completed: false,
        }
    }
}

/// Action that produced a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    Run,
    Wide,
    NoBall,
    Wicket,
    StrikeSwap,
    Selection,
}

impl From<&BallEvent> for ActionKind {
    fn from(ball: &BallEvent) -> Self {
        match ball.class() {
            BallClass::Run => ActionKind::Run,
            BallClass::Wide => ActionKind::Wide,
            BallClass::NoBall => ActionKind::NoBall,
            BallClass::Wicket => ActionKind::Wicket,
        }
    }
}

/// Pre-mutation copy of everything a single action can change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    pub striker: Option<PlayerId>,
    pub non_striker: Option<PlayerId>,
    pub bowler: Option<PlayerId>,
    pub last_over_bowler: Option<PlayerId>,
    pub balls: u32,
    pub total_runs: u32,
    pub wickets: u32,
    pub extras: Extras,
    pub batting_stats: Ledger<BattingLine>,
    pub bowling_stats: Ledger<BowlingLine>,
    pub dismissals: Ledger<Dismissal>,
    pub out_batsmen: Vec<PlayerId>,
    pub this_over: Vec<BallEvent>,
    pub extra_mode: ExtraMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub action: ActionKind,
    pub snapshot: HistorySnapshot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveState {
    pub innings_index: usize,
    pub striker: Option<PlayerId>,
    pub non_striker: Option<PlayerId>,
    pub bowler: Option<PlayerId>,
    /// Bowled the previous over; not eligible for the next one.
    pub last_over_bowler: Option<PlayerId>,
    pub out_batsmen: Vec<PlayerId>,
    pub extra_mode: ExtraMode,
    pub history: Vec<HistoryEntry>,
    pub pending_next_innings: bool,
}

impl LiveState {
    pub fn for_innings(innings_index: usize) -> Self {
        Self {
            innings_index,
            striker: None,
            non_striker: None,
            bowler: None,
            last_over_bowler: None,
            out_batsmen: Vec::new(),
            extra_mode: ExtraMode::Normal,
            history: Vec::new(),
            pending_next_innings: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultKind {
    /// Defending side won; margin is the run difference.
    Runs,
    /// Chasing side won; margin is wickets in hand.
    Wickets,
    Tie,
}

impl ResultKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ResultKind::Runs => "RUNS",
            ResultKind::Wickets => "WICKETS",
            ResultKind::Tie => "TIE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: Option<TeamSide>,
    pub kind: ResultKind,
    pub margin: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldingLine {
    pub catches: u32,
    pub run_outs: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiFlags {
    pub match_result_seen: bool,
    /// One-shot guard for the finalize submission.
    pub submitted: bool,
}

/// Entire match document, owned by the scoring actor until completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub season_id: i64,
    pub match_type: MatchType,
    pub total_overs: Option<u32>,
    pub rules: MatchRules,
    pub teams: Teams,
    pub toss: Option<Toss>,
    pub innings: Vec<Innings>,
    pub live: Option<LiveState>,
    pub status: MatchStatus,
    pub result: Option<MatchResult>,
    pub ui: UiFlags,
    pub fielding: Option<Ledger<FieldingLine>>,
    pub man_of_the_match: Option<PlayerId>,
    pub next_player_id: u32,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

impl Match {
    pub fn current_innings(&self) -> Option<&Innings> {
        let live = self.live.as_ref()?;
        self.innings.get(live.innings_index)
    }

    pub fn batting_roster(&self, innings: &Innings) -> &Team {
        self.teams.side(innings.batting_team)
    }

    pub fn bowling_roster(&self, innings: &Innings) -> &Team {
        self.teams.side(innings.bowling_team)
    }

    /// Display name for a player on either roster.
    pub fn player_name(&self, id: PlayerId) -> Option<&str> {
        self.teams
            .team_a
            .players
            .iter()
            .chain(self.teams.team_b.players.iter())
            .find(|p| p.id == id)
            .map(|p| p.name.as_str())
    }

    pub fn side_of(&self, id: PlayerId) -> Option<TeamSide> {
        if self.teams.team_a.contains(id) {
            Some(TeamSide::A)
        } else if self.teams.team_b.contains(id) {
            Some(TeamSide::B)
        } else {
            None
        }
    }

    /// Scoring is open: live, an innings in progress, and no popup pending.
    pub fn scoring_open(&self) -> bool {
        self.status == MatchStatus::Live
            && self
                .live
                .as_ref()
                .is_some_and(|live| !live.pending_next_innings)
            && self.current_innings().is_some()
    }
}

/// Borrow live state and the current innings mutably at once.
pub fn live_parts_mut(m: &mut Match) -> Option<(&mut LiveState, &mut Innings)> {
    let live = m.live.as_mut()?;
    let innings = m.innings.get_mut(live.innings_index)?;
    Some((live, innings))
}

pub fn require_live<'a>(m: &'a Match, ctx: &'static str) -> Result<&'a LiveState, DomainError> {
    m.live.as_ref().ok_or_else(|| {
        DomainError::validation(format!("Invariant violated: live state must be set ({ctx})"))
    })
}

pub fn require_result<'a>(
    m: &'a Match,
    ctx: &'static str,
) -> Result<&'a MatchResult, DomainError> {
    m.result.as_ref().ok_or_else(|| {
        DomainError::validation(format!("Invariant violated: result must be set ({ctx})"))
    })
}
