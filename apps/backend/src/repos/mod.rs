//! Repository functions: adapters wrapped into domain models and `DomainError`.

pub mod matches;
pub mod players;
pub mod teams;
