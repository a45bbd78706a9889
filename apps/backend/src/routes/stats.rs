use actix_web::{web, HttpResponse};

use super::parse_season_id;
use crate::db::require_db;
use crate::error::AppError;
use crate::services::season_stats;
use crate::state::app_state::AppState;

async fn batting(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let season_id = parse_season_id(&path)?;
    let rows = season_stats::batting(require_db(&app_state)?, season_id).await?;
    Ok(HttpResponse::Ok().json(rows))
}

async fn bowling(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let season_id = parse_season_id(&path)?;
    let rows = season_stats::bowling(require_db(&app_state)?, season_id).await?;
    Ok(HttpResponse::Ok().json(rows))
}

async fn misc(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let season_id = parse_season_id(&path)?;
    let rows = season_stats::misc(require_db(&app_state)?, season_id).await?;
    Ok(HttpResponse::Ok().json(rows))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/season/{season_id}/batting", web::get().to(batting))
        .route("/season/{season_id}/bowling", web::get().to(bowling))
        .route("/season/{season_id}/misc", web::get().to(misc));
}
