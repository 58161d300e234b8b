//! Suite expansion and execution.
//!
//! [`RedDeerSuite`] replicates a declaration once per run configuration.
//! Each configuration gets a runner named by its id that holds the tests
//! the configuration can run. Declared tests no configuration picked up are
//! reported by one extra runner instead of silently vanishing.
//!
//! ```text
//! Red Deer Suite
//! ├── jre8                      (tests jre8 satisfies and accepts)
//! ├── jre11                     (tests jre11 satisfies and accepts)
//! └── Tests without execution   (only when coverage has gaps)
//! ```

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::config::{RunConfiguration, SuiteConfiguration};
use super::listener::RunListener;
use super::model::{SuiteDeclaration, TestContext, TestId, TestMethod};
use super::tracker::ExecutionCoverageTracker;
use crate::core::Result;
use crate::core::constants::suite::{SUITE_NAME, UNEXECUTED_SUITE_NAME};
use crate::core::error::panic_message;

/// Runs before every test body it applies to.
pub trait BeforeTest: Send + Sync {
    /// Whether this extension applies to `test` under `configuration`.
    fn has_to_run(&self, _test: &TestId, _configuration: &RunConfiguration) -> bool { true }

    /// Prepares the test. An error fails the test and skips its body.
    ///
    /// # Errors
    ///
    /// Implementations return an error when the test cannot be set up.
    fn run_before(&self, context: &TestContext<'_>) -> Result<()>;
}

/// Runs after every test body it applies to, even when the test failed.
pub trait AfterTest: Send + Sync {
    fn has_to_run(&self, _test: &TestId, _configuration: &RunConfiguration) -> bool { true }

    /// Cleans up after the test. An error fails a test that passed so far.
    ///
    /// # Errors
    ///
    /// Implementations return an error when cleanup fails.
    fn run_after(&self, context: &TestContext<'_>) -> Result<()>;
}

/// A test selected for one configuration.
#[derive(Debug, Clone)]
pub struct ScheduledTest {
    pub id: TestId,
    method: TestMethod,
}

/// One child runner of the suite.
#[derive(Debug, Clone)]
pub enum Runner {
    /// The tests one configuration runs.
    Named { name: String, configuration: RunConfiguration, tests: Vec<ScheduledTest> },
    /// Declared tests that no configuration scheduled.
    Unexecuted { name: String, tests: Vec<TestId> },
}

impl Runner {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Named { name, .. } | Self::Unexecuted { name, .. } => name,
        }
    }

    /// Ids of the tests this runner reports, in order.
    #[must_use]
    pub fn test_ids(&self) -> Vec<TestId> {
        match self {
            Self::Named { tests, .. } => tests.iter().map(|test| test.id.clone()).collect(),
            Self::Unexecuted { tests, .. } => tests.clone(),
        }
    }

    #[must_use]
    pub const fn is_unexecuted(&self) -> bool { matches!(self, Self::Unexecuted { .. }) }
}

/// Builds the runner of one configuration, marking what it schedules.
#[derive(Debug)]
pub struct RequirementsRunnerBuilder {
    tracker: ExecutionCoverageTracker,
}

impl RequirementsRunnerBuilder {
    #[must_use]
    pub const fn new(tracker: ExecutionCoverageTracker) -> Self { Self { tracker } }

    /// Selects the tests of `declaration` that `configuration` provides the
    /// requirements for and whose filters accept them.
    #[must_use]
    pub fn build(&self, declaration: &SuiteDeclaration, configuration: &RunConfiguration) -> Runner {
        let mut tests = Vec::new();
        for class in declaration.classes() {
            for method in class.methods() {
                let id = TestId::new(class.name(), &method.name);
                if !configuration.satisfies(method.requires.as_slice()) {
                    debug!(configuration = %configuration.id, test = %id, "missing requirements, skipping");
                    continue;
                }
                if !configuration.filters.accepts(&id) {
                    debug!(configuration = %configuration.id, test = %id, "filtered out");
                    continue;
                }
                self.tracker.mark_scheduled(&id);
                tests.push(ScheduledTest { id, method: method.clone() });
            }
        }
        Runner::Named { name: configuration.id.clone(), configuration: configuration.clone(), tests }
    }
}

/// Result of a single test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "camelCase")]
pub enum TestOutcome {
    Passed,
    Failed(String),
    NotExecuted,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    pub runner: String,
    pub test: TestId,
    pub outcome: TestOutcome,
}

/// Results of a whole run, in execution order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub results: Vec<TestResult>,
}

impl RunSummary {
    fn count(&self, predicate: impl Fn(&TestOutcome) -> bool) -> usize {
        self.results.iter().filter(|result| predicate(&result.outcome)).count()
    }

    #[must_use]
    pub fn passed(&self) -> usize { self.count(|outcome| *outcome == TestOutcome::Passed) }

    #[must_use]
    pub fn failed(&self) -> usize { self.count(|outcome| matches!(outcome, TestOutcome::Failed(_))) }

    #[must_use]
    pub fn not_executed(&self) -> usize { self.count(|outcome| *outcome == TestOutcome::NotExecuted) }

    /// True when no test failed. Unexecuted tests are reported, not failed.
    #[must_use]
    pub fn is_success(&self) -> bool { self.failed() == 0 }
}

/// Serializable view of the runner tree.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteDescription {
    pub name: String,
    pub runners: Vec<RunnerDescription>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerDescription {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<String>,
    pub tests: Vec<String>,
}

/// The umbrella suite: a name and one runner per configuration.
pub struct RedDeerSuite {
    name: String,
    runners: Vec<Runner>,
    tracker: ExecutionCoverageTracker,
    listeners: Vec<Arc<dyn RunListener>>,
    before: Vec<Arc<dyn BeforeTest>>,
    after: Vec<Arc<dyn AfterTest>>,
}

impl std::fmt::Debug for RedDeerSuite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedDeerSuite")
            .field("name", &self.name)
            .field("runners", &self.runners)
            .finish_non_exhaustive()
    }
}

impl RedDeerSuite {
    /// Expands `declaration` over every configuration of `configuration`.
    #[must_use]
    pub fn new(declaration: &SuiteDeclaration, configuration: &SuiteConfiguration) -> Self {
        let tracker = ExecutionCoverageTracker::new();
        tracker.register_declared(declaration.declared_tests());
        let runners = Self::create_suite(declaration, configuration, &tracker);
        info!(
            declaration = declaration.name(),
            runners = runners.len(),
            "created {SUITE_NAME}"
        );
        Self {
            name: SUITE_NAME.to_string(),
            runners,
            tracker,
            listeners: Vec::new(),
            before: Vec::new(),
            after: Vec::new(),
        }
    }

    /// Builds one runner per configuration, then the unexecuted-tests
    /// runner if some declared test was never scheduled.
    fn create_suite(
        declaration: &SuiteDeclaration,
        configuration: &SuiteConfiguration,
        tracker: &ExecutionCoverageTracker,
    ) -> Vec<Runner> {
        let builder = RequirementsRunnerBuilder::new(tracker.clone());
        let mut runners: Vec<Runner> = configuration
            .configurations()
            .iter()
            .map(|run_configuration| builder.build(declaration, run_configuration))
            .collect();

        if !tracker.all_tests_are_executed() {
            let tests = tracker.unexecuted();
            info!(count = tests.len(), "declared tests without execution");
            runners.push(Runner::Unexecuted { name: UNEXECUTED_SUITE_NAME.to_string(), tests });
        }
        runners
    }

    #[must_use]
    pub fn with_listener(mut self, listener: impl RunListener + 'static) -> Self {
        self.listeners.push(Arc::new(listener));
        self
    }

    #[must_use]
    pub fn with_before_test(mut self, extension: impl BeforeTest + 'static) -> Self {
        self.before.push(Arc::new(extension));
        self
    }

    #[must_use]
    pub fn with_after_test(mut self, extension: impl AfterTest + 'static) -> Self {
        self.after.push(Arc::new(extension));
        self
    }

    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    #[must_use]
    pub fn runners(&self) -> &[Runner] { &self.runners }

    #[must_use]
    pub const fn tracker(&self) -> &ExecutionCoverageTracker { &self.tracker }

    /// Describes the runner tree.
    #[must_use]
    pub fn description(&self) -> SuiteDescription {
        let runners = self
            .runners
            .iter()
            .map(|runner| RunnerDescription {
                name: runner.name().to_string(),
                configuration: match runner {
                    Runner::Named { configuration, .. } => Some(configuration.id.clone()),
                    Runner::Unexecuted { .. } => None,
                },
                tests: runner.test_ids().iter().map(ToString::to_string).collect(),
            })
            .collect();
        SuiteDescription { name: self.name.clone(), runners }
    }

    /// Runs every runner in order and reports the results.
    pub fn run(&self) -> RunSummary {
        self.listeners.iter().for_each(|listener| listener.suite_started(&self.name));

        let mut summary = RunSummary::default();
        for runner in &self.runners {
            match runner {
                Runner::Named { name, configuration, tests } => {
                    for test in tests {
                        self.listeners.iter().for_each(|listener| listener.test_started(name, &test.id));
                        let outcome = self.run_test(configuration, test);
                        self.tracker.mark_ran(&test.id);
                        self.finish(&mut summary, TestResult { runner: name.clone(), test: test.id.clone(), outcome });
                    }
                }
                Runner::Unexecuted { name, tests } => {
                    for test in tests {
                        let outcome = TestOutcome::NotExecuted;
                        self.finish(&mut summary, TestResult { runner: name.clone(), test: test.clone(), outcome });
                    }
                }
            }
        }

        self.listeners.iter().for_each(|listener| listener.suite_finished(&summary));
        summary
    }

    fn finish(&self, summary: &mut RunSummary, result: TestResult) {
        self.listeners.iter().for_each(|listener| listener.test_finished(&result));
        summary.results.push(result);
    }

    fn run_test(&self, configuration: &RunConfiguration, test: &ScheduledTest) -> TestOutcome {
        let context = TestContext::new(configuration, &test.id);

        let mut failure = None;
        for extension in self.before.iter().filter(|extension| extension.has_to_run(&test.id, configuration)) {
            if let Err(reason) = guarded(|| extension.run_before(&context)) {
                failure = Some(reason);
                break;
            }
        }
        if failure.is_none() {
            failure = guarded(|| (test.method.body)(&context)).err();
        }
        for extension in self.after.iter().filter(|extension| extension.has_to_run(&test.id, configuration)) {
            if let Err(reason) = guarded(|| extension.run_after(&context)) {
                failure.get_or_insert(reason);
            }
        }

        failure.map_or(TestOutcome::Passed, TestOutcome::Failed)
    }
}

/// Runs `f`, turning both errors and panics into a failure reason.
fn guarded(f: impl FnOnce() -> Result<()>) -> std::result::Result<(), String> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(err)) => Err(err.to_string()),
        Err(payload) => Err(format!("panicked: {}", panic_message(payload.as_ref()))),
    }
}
