//! Declared tests: classes, methods and suites.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::config::RunConfiguration;
use crate::core::Result;

/// Identifies one declared test method as `Class::method`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TestId {
    pub class: String,
    pub method: String,
}

impl TestId {
    #[must_use]
    pub fn new(class: impl Into<String>, method: impl Into<String>) -> Self {
        Self { class: class.into(), method: method.into() }
    }
}

impl fmt::Display for TestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}::{}", self.class, self.method) }
}

/// What a test body sees of the run it belongs to.
#[derive(Debug)]
pub struct TestContext<'a> {
    configuration: &'a RunConfiguration,
    test: &'a TestId,
}

impl<'a> TestContext<'a> {
    pub(crate) const fn new(configuration: &'a RunConfiguration, test: &'a TestId) -> Self {
        Self { configuration, test }
    }

    /// The configuration this test runs under.
    #[must_use]
    pub const fn configuration(&self) -> &RunConfiguration { self.configuration }

    #[must_use]
    pub const fn test(&self) -> &TestId { self.test }

    /// Parameters of a requirement provided by the configuration.
    #[must_use]
    pub fn requirement(&self, key: &str) -> Option<&serde_json::Value> { self.configuration.requirement(key) }
}

/// A test body. Panics are reported as failures.
pub type TestBody = Arc<dyn Fn(&TestContext<'_>) -> Result<()> + Send + Sync>;

/// One declared test method.
#[derive(Clone)]
pub struct TestMethod {
    pub name: String,
    /// Requirement keys a configuration must provide for this test to run.
    pub requires: Vec<String>,
    pub body: TestBody,
}

impl fmt::Debug for TestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestMethod").field("name", &self.name).field("requires", &self.requires).finish_non_exhaustive()
    }
}

/// A declared test class: a name and its methods in declaration order.
#[derive(Debug, Clone)]
pub struct TestClass {
    name: String,
    methods: Vec<TestMethod>,
}

impl TestClass {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self { Self { name: name.into(), methods: Vec::new() } }

    /// Declares a test without requirements.
    #[must_use]
    pub fn test<F>(self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&TestContext<'_>) -> Result<()> + Send + Sync + 'static,
    {
        self.test_requiring(name, &[], body)
    }

    /// Declares a test that only runs under configurations providing every
    /// key in `requires`.
    #[must_use]
    pub fn test_requiring<F>(mut self, name: impl Into<String>, requires: &[&str], body: F) -> Self
    where
        F: Fn(&TestContext<'_>) -> Result<()> + Send + Sync + 'static,
    {
        self.methods.push(TestMethod {
            name: name.into(),
            requires: requires.iter().map(ToString::to_string).collect(),
            body: Arc::new(body),
        });
        self
    }

    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    #[must_use]
    pub fn methods(&self) -> &[TestMethod] { &self.methods }

    /// Returns the id of every method in declaration order.
    pub fn test_ids(&self) -> impl Iterator<Item = TestId> + '_ {
        self.methods.iter().map(|method| TestId::new(&self.name, &method.name))
    }
}

/// What the suite runner is handed: a single class or a named suite of
/// classes.
#[derive(Debug, Clone)]
pub enum SuiteDeclaration {
    Class(TestClass),
    Suite { name: String, classes: Vec<TestClass> },
}

impl SuiteDeclaration {
    /// Declares a suite of classes.
    #[must_use]
    pub fn suite(name: impl Into<String>, classes: Vec<TestClass>) -> Self {
        Self::Suite { name: name.into(), classes }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Class(class) => class.name(),
            Self::Suite { name, .. } => name,
        }
    }

    #[must_use]
    pub fn classes(&self) -> &[TestClass] {
        match self {
            Self::Class(class) => std::slice::from_ref(class),
            Self::Suite { classes, .. } => classes,
        }
    }

    #[must_use]
    pub const fn is_suite(&self) -> bool { matches!(self, Self::Suite { .. }) }

    /// Every declared test across all classes, in declaration order.
    #[must_use]
    pub fn declared_tests(&self) -> Vec<TestId> { self.classes().iter().flat_map(TestClass::test_ids).collect() }
}

impl From<TestClass> for SuiteDeclaration {
    fn from(class: TestClass) -> Self { Self::Class(class) }
}
