pub mod completed_matches;
pub mod players;
pub mod team_players;
pub mod teams;

pub use completed_matches::Entity as CompletedMatches;
pub use completed_matches::Model as CompletedMatch;
pub use players::Entity as Players;
pub use players::Model as Player;
pub use team_players::Entity as TeamPlayers;
pub use team_players::Model as TeamPlayer;
pub use teams::Entity as Teams;
pub use teams::Model as Team;
