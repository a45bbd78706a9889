//! Unit-test logging, sharing the integration-test subscriber setup.

/// Install the test-writer subscriber once; later calls are no-ops.
pub fn init() {
    scorebook_test_support::logging::init();
}
