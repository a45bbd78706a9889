//! Delivery of finalized matches to the stats pipeline.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::error::AppError;
use crate::protocol::finalized_match::FinalizedMatch;
use crate::repos::matches::CompletedMatchRecord;
use crate::services::stats_pipeline::submit_completed_match;

/// Hands a finalized match to the aggregation pipeline, returning the
/// archived record.
#[async_trait]
pub trait MatchSubmitter: Send + Sync {
    async fn submit(&self, payload: FinalizedMatch) -> Result<CompletedMatchRecord, AppError>;
}

/// Runs the pipeline in-process against a stats database.
#[derive(Debug, Clone)]
pub struct PipelineSubmitter {
    db: DatabaseConnection,
}

impl PipelineSubmitter {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MatchSubmitter for PipelineSubmitter {
    async fn submit(&self, payload: FinalizedMatch) -> Result<CompletedMatchRecord, AppError> {
        submit_completed_match(&self.db, payload).await
    }
}

/// Posts the payload to a remote `POST /api/matches/complete`.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmitter {
    /// `base_url` is the backend origin, e.g. `http://127.0.0.1:3001`.
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .map_err(|e| AppError::config(format!("http client: {e}")))?;
        Ok(Self {
            client,
            endpoint: format!("{}/api/matches/complete", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl MatchSubmitter for HttpSubmitter {
    async fn submit(&self, payload: FinalizedMatch) -> Result<CompletedMatchRecord, AppError> {
        debug!(endpoint = %self.endpoint, match_id = %payload.match_id, "posting finalized match");
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::upstream(format!("submission failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::upstream(format!(
                "submission rejected with {status}: {body}"
            )));
        }
        resp.json::<CompletedMatchRecord>()
            .await
            .map_err(|e| AppError::upstream(format!("unreadable submission response: {e}")))
    }
}
