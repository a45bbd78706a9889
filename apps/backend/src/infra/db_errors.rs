//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert it here so services only
//! ever see `DomainError`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::web::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// `table.column` from SQLite's "UNIQUE constraint failed: table.column" message.
fn sqlite_unique_target(error_msg: &str) -> Option<&str> {
    const MARKER: &str = "UNIQUE constraint failed: ";
    let start = error_msg.find(MARKER)? + MARKER.len();
    error_msg[start..].split([',', ' ', '\n', '"']).next()
}

fn unique_conflict_detail(error_msg: &str) -> &'static str {
    let sqlite_target = sqlite_unique_target(error_msg).unwrap_or_default();
    if sqlite_target.starts_with("players.") || error_msg.contains("ux_players_season_name") {
        "Player already exists in this season"
    } else if sqlite_target.starts_with("teams.") || error_msg.contains("ux_teams_season_name") {
        "Team already exists in this season"
    } else if sqlite_target.starts_with("team_players.")
        || error_msg.contains("ux_team_players_team_position")
    {
        "Roster position already taken"
    } else {
        "Unique constraint violation"
    }
}

/// Keep raw driver messages out of logs beyond their first line.
fn first_line(msg: &str) -> &str {
    msg.lines().next().unwrap_or_default()
}

/// Translate a `DbErr` into a `DomainError` with a sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(what) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                format!("Record not found: {what}"),
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %first_line(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %first_line(&error_msg), "Unique constraint violation");
        return DomainError::conflict(ConflictKind::Unique, unique_conflict_detail(&error_msg));
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %first_line(&error_msg), "Foreign key constraint violation");
        return DomainError::validation("Foreign key constraint violation");
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %first_line(&error_msg), "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %first_line(&error_msg), "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
