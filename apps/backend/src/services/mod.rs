//! Application services: live-match orchestration and the stats pipeline.

pub mod live_match;
pub mod season_stats;
pub mod stats_pipeline;
pub mod submit;
