use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, Statement};
use serde::Serialize;
use time::OffsetDateTime;

use crate::db::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    migration: Option<String>,
    time: String,
}

async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let time = OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let (db, db_error, migration) = match require_db(&app_state) {
        Ok(conn) => {
            let ping = Statement::from_string(conn.get_database_backend(), "SELECT 1");
            match conn.query_one(ping).await {
                Ok(_) => {
                    let version = get_latest_migration_version(conn).await.ok().flatten();
                    ("ok", None, version)
                }
                Err(e) => ("error", Some(e.to_string()), None),
            }
        }
        Err(e) => ("unavailable", Some(e.detail()), None),
    };

    let body = HealthResponse {
        status: if db == "ok" { "ok" } else { "degraded" },
        app_version: env!("CARGO_PKG_VERSION"),
        db,
        db_error,
        migration,
        time,
    };
    let mut resp = if db == "ok" {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    Ok(resp.json(body))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(health));
}
