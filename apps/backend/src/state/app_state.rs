use sea_orm::DatabaseConnection;

/// Application state containing shared resources
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Stats database (optional so the HTTP surface can start degraded)
    db: Option<DatabaseConnection>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Some(db) }
    }

    pub fn without_db() -> Self {
        Self { db: None }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
