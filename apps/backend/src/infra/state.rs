use crate::config::db::{DbKind, DbProfile};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
#[derive(Debug, Default)]
pub struct StateBuilder {
    db: Option<(DbKind, DbProfile)>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_db(mut self, kind: DbKind, profile: DbProfile) -> Self {
        self.db = Some((kind, profile));
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db {
            // single entrypoint: connect + migrate
            Some((kind, profile)) => Ok(AppState::new(bootstrap_db(kind, profile).await?)),
            None => Ok(AppState::without_db()),
        }
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
