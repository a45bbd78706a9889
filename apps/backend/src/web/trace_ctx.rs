//! Task-local trace id for the request currently being served.
//!
//! `RequestTrace` opens the scope; error rendering and the DB error mapper
//! read it so that log lines and problem responses share one id.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

const UNKNOWN: &str = "unknown";

/// Trace id of the current task, or `"unknown"` outside a request scope.
pub fn trace_id() -> String {
    current().unwrap_or_else(|| UNKNOWN.to_string())
}

/// Trace id of the current task, if a request scope is active.
pub fn current() -> Option<String> {
    TRACE_ID.try_with(|id| id.clone()).ok()
}

/// Run `future` with `trace_id` visible to every `trace_id()` call inside it.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
