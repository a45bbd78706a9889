use std::future::Future;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, DbKind, DbProfile};
use crate::error::AppError;

const CONNECT_ATTEMPTS: u32 = 3;
const CONNECT_RETRY_INTERVAL_MS: u64 = 250;

fn engine(kind: DbKind) -> &'static str {
    match kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

fn connect_options(kind: DbKind, url: String) -> ConnectOptions {
    let mut opts = ConnectOptions::new(url);
    opts.sqlx_logging(false)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5));
    match kind {
        // Every in-memory connection is a separate database.
        DbKind::SqliteMemory => {
            opts.max_connections(1).min_connections(1);
        }
        DbKind::SqliteFile => {
            opts.max_connections(4);
        }
        DbKind::Postgres => {
            opts.max_connections(10);
        }
    }
    opts
}

/// Retry `connect_fn` at a fixed interval; returns the last error when all
/// attempts fail.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(conn) => {
                if attempt > 1 {
                    info!(attempts = attempt, "connection_retry=success");
                }
                return Ok(conn);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(_) => {
                warn!(attempt, max_attempts, interval_ms, "connection_retry=failed");
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

/// Open a connection pool for `kind`. Does NOT run migrations.
pub async fn connect_db(kind: DbKind, profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(kind, profile)?;
    let conn = retry_connection(
        || {
            let opts = connect_options(kind, url.clone());
            async move { Database::connect(opts).await.map_err(AppError::from) }
        },
        CONNECT_ATTEMPTS,
        CONNECT_RETRY_INTERVAL_MS,
    )
    .await?;
    info!(engine = engine(kind), ?profile, "database connected");
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(
    kind: DbKind,
    profile: DbProfile,
) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(kind, profile).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    Ok(conn)
}
