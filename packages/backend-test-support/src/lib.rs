//! Scorebook test support utilities
//!
//! Shared helpers for the integration test binaries: one-time logging
//! initialization and Problem Details assertions that do not depend on
//! backend types.

pub mod logging;
pub mod problem_details;
