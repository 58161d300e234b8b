//! Run configuration loading.
//!
//! A run configuration names one environment the suite is replicated for:
//! an id, the requirements it provides and the filters selecting its tests.
//!
//! Sources, in priority order:
//!
//! 1. an explicit file or directory path
//! 2. the `REDDEER_CONFIG` environment variable
//! 3. a single built-in `default` configuration
//!
//! Files are JSON with comments (JSONC). A file holds one configuration
//! object or an array of them; a directory contributes every `.json` /
//! `.jsonc` file in natural order.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::model::TestId;
use crate::core::constants::config::{CONFIG_ENV, CONFIG_EXTENSIONS};
use crate::core::constants::suite::DEFAULT_CONFIGURATION_ID;
use crate::core::{Error, Result};

/// Selects the tests a configuration runs, by regular expressions over
/// `Class::method`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct TestFilter {
    /// Patterns a test must match one of. Empty means every test.
    pub include: Vec<String>,

    /// Patterns excluding a test when any of them matches.
    pub exclude: Vec<String>,

    /// Compiled patterns (populated by [`TestFilter::prepare`]).
    #[serde(skip)]
    #[schemars(skip)]
    compiled: Option<CompiledFilter>,
}

#[derive(Debug, Clone)]
struct CompiledFilter {
    include: Vec<Regex>,
    exclude: Vec<Regex>,
}

impl TestFilter {
    /// Compiles the patterns once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for a pattern that does not compile.
    pub fn prepare(&mut self) -> Result<()> {
        let compile = |patterns: &[String]| {
            patterns
                .iter()
                .map(|pattern| {
                    Regex::new(pattern)
                        .map_err(|err| Error::config(format!("invalid test filter {pattern:?}: {err}")))
                })
                .collect::<Result<Vec<_>>>()
        };
        self.compiled = Some(CompiledFilter { include: compile(&self.include)?, exclude: compile(&self.exclude)? });
        Ok(())
    }

    /// Returns true if the filter selects `test`.
    ///
    /// Uses the compiled patterns when prepared; otherwise patterns are
    /// compiled on the fly and invalid ones never match.
    #[must_use]
    pub fn accepts(&self, test: &TestId) -> bool {
        let name = test.to_string();
        if let Some(compiled) = &self.compiled {
            let included = compiled.include.is_empty() || compiled.include.iter().any(|re| re.is_match(&name));
            return included && !compiled.exclude.iter().any(|re| re.is_match(&name));
        }

        let matches = |pattern: &String| Regex::new(pattern).is_ok_and(|re| re.is_match(&name));
        let included = self.include.is_empty() || self.include.iter().any(matches);
        included && !self.exclude.iter().any(matches)
    }
}

/// One named run configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct RunConfiguration {
    /// Unique id; the per-configuration runner is named after it. Defaults
    /// to the file stem.
    pub id: String,

    /// Requirements this configuration provides, keyed by requirement name,
    /// with free-form parameters.
    pub requirements: BTreeMap<String, serde_json::Value>,

    /// Test selection.
    pub filters: TestFilter,
}

impl RunConfiguration {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self { Self { id: id.into(), ..Self::default() } }

    /// Adds a provided requirement.
    #[must_use]
    pub fn with_requirement(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.requirements.insert(key.into(), value);
        self
    }

    /// Adds an include pattern.
    #[must_use]
    pub fn including(mut self, pattern: impl Into<String>) -> Self {
        self.filters.include.push(pattern.into());
        self
    }

    /// Adds an exclude pattern.
    #[must_use]
    pub fn excluding(mut self, pattern: impl Into<String>) -> Self {
        self.filters.exclude.push(pattern.into());
        self
    }

    /// Returns true if every key in `required` is provided.
    #[must_use]
    pub fn satisfies<S: AsRef<str>>(&self, required: &[S]) -> bool {
        required.iter().all(|key| self.requirements.contains_key(key.as_ref()))
    }

    /// Returns the parameters of a provided requirement.
    #[must_use]
    pub fn requirement(&self, key: &str) -> Option<&serde_json::Value> { self.requirements.get(key) }

    /// Prepares the configuration for use.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the id is empty or a filter is invalid.
    pub fn prepare(&mut self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::config("run configuration without an id"));
        }
        self.filters.prepare()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ConfigFile {
    Many(Vec<RunConfiguration>),
    One(Box<RunConfiguration>),
}

/// The run configurations of one suite run, loaded once.
#[derive(Debug, Clone)]
pub struct SuiteConfiguration {
    configurations: Vec<RunConfiguration>,
    source: Option<PathBuf>,
}

impl Default for SuiteConfiguration {
    fn default() -> Self { Self::default_configuration() }
}

impl SuiteConfiguration {
    /// A single configuration with no requirements and no filters.
    #[must_use]
    pub fn default_configuration() -> Self {
        Self { configurations: vec![RunConfiguration::new(DEFAULT_CONFIGURATION_ID)], source: None }
    }

    /// Builds a suite configuration from configurations in memory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an empty list, duplicate ids or invalid
    /// filters.
    pub fn from_configurations(configurations: Vec<RunConfiguration>) -> Result<Self> {
        Self::validated(configurations, None)
    }

    /// Loads configurations from `REDDEER_CONFIG`, or the default one when
    /// the variable is unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the named source cannot be loaded.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => {
                debug!("{CONFIG_ENV} not set, using the default run configuration");
                Ok(Self::default_configuration())
            }
        }
    }

    /// Loads configurations from a file or a directory of files.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be read, a file does not parse,
    /// a directory holds no configuration file, ids collide or a filter is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let configurations = if path.is_dir() {
            let files = config_files(path)?;
            if files.is_empty() {
                return Err(Error::config(format!("no run configuration files in {}", path.display())));
            }
            let mut configurations = Vec::new();
            for file in files {
                configurations.extend(load_file(&file)?);
            }
            configurations
        } else {
            load_file(path)?
        };

        let loaded = Self::validated(configurations, Some(path.to_path_buf()))?;
        info!(source = %path.display(), count = loaded.configurations.len(), "loaded run configurations");
        Ok(loaded)
    }

    fn validated(mut configurations: Vec<RunConfiguration>, source: Option<PathBuf>) -> Result<Self> {
        if configurations.is_empty() {
            return Err(Error::config("no run configurations"));
        }
        let mut seen = HashSet::new();
        for configuration in &mut configurations {
            configuration.prepare()?;
            if !seen.insert(configuration.id.clone()) {
                return Err(Error::config(format!("duplicate run configuration id '{}'", configuration.id)));
            }
        }
        Ok(Self { configurations, source })
    }

    /// Returns the configurations in load order.
    #[must_use]
    pub fn configurations(&self) -> &[RunConfiguration] { &self.configurations }

    /// Returns the file or directory the configurations came from.
    #[must_use]
    pub fn source(&self) -> Option<&Path> { self.source.as_deref() }
}

/// Lists configuration files of a directory in natural order.
fn config_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| CONFIG_EXTENSIONS.contains(&ext))
        })
        .collect();
    files.sort_by(|a, b| natord::compare(&a.to_string_lossy(), &b.to_string_lossy()));
    Ok(files)
}

fn load_file(path: &Path) -> Result<Vec<RunConfiguration>> {
    let file = fs::File::open(path)?;
    // Strip comments from JSONC before parsing
    let reader = json_comments::StripComments::new(file);
    let parsed: ConfigFile = serde_json::from_reader(reader)
        .map_err(|err| Error::config(format!("failed to parse {}: {err}", path.display())))?;

    let stem = path.file_stem().map(|stem| stem.to_string_lossy().into_owned()).unwrap_or_default();
    let configurations = match parsed {
        ConfigFile::One(configuration) => {
            let mut configuration = *configuration;
            if configuration.id.is_empty() {
                configuration.id = stem;
            }
            vec![configuration]
        }
        ConfigFile::Many(configurations) => configurations,
    };
    debug!(file = %path.display(), count = configurations.len(), "parsed run configuration file");
    Ok(configurations)
}
