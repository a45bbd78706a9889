//! DTOs for matches_sea adapter.

/// DTO for inserting a completed match.
#[derive(Debug, Clone)]
pub struct CompletedMatchCreate {
    pub season_id: i64,
    pub match_type: String,
    pub total_overs: Option<i32>,
    pub team_a: String,
    pub team_b: String,
    pub winner: Option<String>,
    pub result_kind: String,
    pub margin: i32,
    pub man_of_the_match: Option<String>,
    pub document: String,
}
