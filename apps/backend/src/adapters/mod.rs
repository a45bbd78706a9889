//! SeaORM adapters: free functions over `ConnectionTrait` returning `DbErr`.

pub mod matches_sea;
pub mod players_sea;
pub mod teams_sea;
