//! One-time setup for the unit-test binary.

pub mod logging;
