use actix_web::web;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod health;
pub mod matches;
pub mod stats;

/// Season ids are positive integers.
pub(crate) fn parse_season_id(raw: &str) -> Result<i64, AppError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::bad_request(
            ErrorCode::InvalidSeasonId,
            format!("Invalid season id: {raw}"),
        )),
    }
}

/// JSON bodies that fail to decode are answered as Problem Details.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(1 << 20)
        .error_handler(|err, _req| {
            AppError::bad_request(ErrorCode::BadRequest, format!("Invalid JSON body: {err}")).into()
        })
}

/// Register every route. `main.rs` and the route tests share this.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    // /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // /api/matches/**
    cfg.service(web::scope("/api/matches").configure(matches::configure_routes));

    // /api/stats/**
    cfg.service(web::scope("/api/stats").configure(stats::configure_routes));
}
