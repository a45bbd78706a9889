use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "completed_matches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub season_id: i64,
    pub match_type: String,
    pub total_overs: Option<i32>,
    pub team_a: String,
    pub team_b: String,
    pub winner: Option<String>,
    pub result_kind: String,
    pub margin: i32,
    pub man_of_the_match: Option<String>,
    pub status: String,
    /// Finalized-match payload as JSON text
    #[sea_orm(column_type = "Text")]
    pub document: String,
    pub completed_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
