use actix_web::{web, HttpResponse};

use super::parse_season_id;
use crate::db::require_db;
use crate::error::AppError;
use crate::protocol::finalized_match::FinalizedMatch;
use crate::services::season_stats;
use crate::services::stats_pipeline::submit_completed_match;
use crate::state::app_state::AppState;

/// POST /api/matches/complete
async fn complete(
    app_state: web::Data<AppState>,
    body: web::Json<FinalizedMatch>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let record = submit_completed_match(db, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(record))
}

/// GET /api/matches/season/{season_id}
async fn list_for_season(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let season_id = parse_season_id(&path)?;
    let db = require_db(&app_state)?;
    let records = season_stats::completed_matches(db, season_id).await?;
    Ok(HttpResponse::Ok().json(records))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/complete", web::post().to(complete))
        .route("/season/{season_id}", web::get().to(list_for_season));
}
