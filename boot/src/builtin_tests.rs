//! Built-in test execution.
//!
//! Suites are plain functions generated by `define_test_suite!` in the
//! crates under test; this module is the one place that lists them.

use mossos_lib::testing::TestSuiteResult;
use mossos_lib::{klog_error, klog_info};

type SuiteFn = fn() -> TestSuiteResult;

static SUITES: &[SuiteFn] = &[mossos_mptable::tests::run_mptable_suite];

/// Run every registered suite and log a summary. Returns `true` when
/// everything passed.
pub fn run_all() -> bool {
    let mut total = 0u32;
    let mut passed = 0u32;
    let mut failed = 0u32;

    for suite in SUITES {
        let result = suite();
        klog_info!(
            "TESTS: suite {}: {}/{} passed",
            result.name,
            result.passed,
            result.total
        );
        total += result.total;
        passed += result.passed;
        failed += result.failed;
    }

    if failed == 0 {
        klog_info!("TESTS: all {total} tests passed");
        true
    } else {
        klog_error!("TESTS: {failed} of {total} tests FAILED");
        false
    }
}
