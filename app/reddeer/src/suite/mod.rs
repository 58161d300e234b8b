//! Suite replication across run configurations.
//!
//! A declared test class or suite is expanded into one runner per run
//! configuration. Coverage is tracked across all of them so that declared
//! tests no configuration selects are reported as not executed.

mod config;
mod listener;
mod model;
mod runner;
mod tracker;

pub use config::{RunConfiguration, SuiteConfiguration, TestFilter};
pub use listener::{LoggingListener, RunListener};
pub use model::{SuiteDeclaration, TestBody, TestClass, TestContext, TestId, TestMethod};
pub use runner::{
    AfterTest, BeforeTest, RedDeerSuite, RequirementsRunnerBuilder, RunSummary, Runner, RunnerDescription,
    ScheduledTest, SuiteDescription, TestOutcome, TestResult,
};
pub use tracker::ExecutionCoverageTracker;
