//! Execution coverage across generated runners.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use super::model::TestId;

#[derive(Debug, Default)]
struct Coverage {
    scheduled: bool,
    runs: usize,
}

/// Records, for every declared test, whether some configuration scheduled it
/// and how often it ran.
///
/// Cloning shares the same bookkeeping, so every runner builder can mark
/// into one tracker.
#[derive(Debug, Clone, Default)]
pub struct ExecutionCoverageTracker {
    inner: Arc<Mutex<BTreeMap<TestId, Coverage>>>,
}

impl ExecutionCoverageTracker {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Registers the declared tests as not yet executed.
    pub fn register_declared<I>(&self, tests: I)
    where
        I: IntoIterator<Item = TestId>,
    {
        let mut inner = self.inner.lock();
        for test in tests {
            inner.entry(test).or_default();
        }
    }

    /// Marks a test as scheduled by some configuration's runner.
    pub fn mark_scheduled(&self, test: &TestId) {
        let mut inner = self.inner.lock();
        inner.entry(test.clone()).or_default().scheduled = true;
        debug!(test = %test, "test scheduled");
    }

    /// Counts one actual run of a test.
    pub fn mark_ran(&self, test: &TestId) {
        let mut inner = self.inner.lock();
        let coverage = inner.entry(test.clone()).or_default();
        coverage.scheduled = true;
        coverage.runs += 1;
    }

    /// Returns true if every declared test was scheduled at least once.
    #[must_use]
    pub fn all_tests_are_executed(&self) -> bool { self.inner.lock().values().all(|coverage| coverage.scheduled) }

    /// Declared tests no configuration scheduled, in `Class::method` order.
    #[must_use]
    pub fn unexecuted(&self) -> Vec<TestId> {
        self.inner
            .lock()
            .iter()
            .filter(|(_, coverage)| !coverage.scheduled)
            .map(|(test, _)| test.clone())
            .collect()
    }

    /// How often a test has run so far.
    #[must_use]
    pub fn run_count(&self, test: &TestId) -> usize { self.inner.lock().get(test).map_or(0, |coverage| coverage.runs) }
}
