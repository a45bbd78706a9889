//! Web boundary helpers shared by middleware, error rendering and logging.

pub mod trace_ctx;
