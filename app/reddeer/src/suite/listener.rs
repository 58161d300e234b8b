//! Observers of a suite run.

use tracing::{info, warn};

use super::model::TestId;
use super::runner::{RunSummary, TestOutcome, TestResult};

/// Receives suite and test lifecycle notifications.
///
/// Every method defaults to doing nothing.
pub trait RunListener: Send + Sync {
    fn suite_started(&self, _suite: &str) {}

    fn test_started(&self, _runner: &str, _test: &TestId) {}

    fn test_finished(&self, _result: &TestResult) {}

    fn suite_finished(&self, _summary: &RunSummary) {}
}

/// Logs the run through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingListener;

impl RunListener for LoggingListener {
    fn suite_started(&self, suite: &str) {
        info!(suite, "suite started");
    }

    fn test_started(&self, runner: &str, test: &TestId) {
        info!(runner, test = %test, "test started");
    }

    fn test_finished(&self, result: &TestResult) {
        match &result.outcome {
            TestOutcome::Passed => info!(runner = %result.runner, test = %result.test, "test passed"),
            TestOutcome::Failed(reason) => {
                warn!(runner = %result.runner, test = %result.test, reason = %reason, "test failed");
            }
            TestOutcome::NotExecuted => warn!(test = %result.test, "test not executed in any configuration"),
        }
    }

    fn suite_finished(&self, summary: &RunSummary) {
        info!(
            passed = summary.passed(),
            failed = summary.failed(),
            not_executed = summary.not_executed(),
            "suite finished"
        );
    }
}
