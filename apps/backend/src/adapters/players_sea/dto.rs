//! DTOs for players_sea adapter.

/// Amounts added to a player's career counters in one update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterDelta {
    pub batting_innings: i32,
    pub batting_runs: i32,
    pub batting_balls: i32,
    pub batting_fours: i32,
    pub batting_sixes: i32,
    pub batting_outs: i32,
    pub batting_ducks: i32,
    pub bowling_innings: i32,
    pub bowling_balls: i32,
    pub bowling_runs: i32,
    pub bowling_wickets: i32,
    pub bowling_maidens: i32,
    pub catches: i32,
    pub run_outs: i32,
    pub man_of_match: i32,
}

/// Leaderboard selection for a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leaderboard {
    /// batting_innings > 0, runs desc
    Batting,
    /// bowling_innings > 0, wickets desc
    Bowling,
    /// man_of_match desc, then catches desc
    Misc,
}
