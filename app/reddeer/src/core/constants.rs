//! Application constants for RedDeer.
//!
//! Names, markers and defaults shared by the lookup engine, the suite
//! runner and the CLI.

/// The application name.
pub const APP_NAME: &str = "RedDeer";

/// Application version from Cargo.toml.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the thread that owns the UI.
pub const UI_THREAD_NAME: &str = "reddeer-ui";

/// Character marking the keyboard mnemonic in a label (`&File`).
pub const MNEMONIC_MARKER: char = '&';

/// Suite naming.
pub mod suite {
    /// Display name of the umbrella suite.
    pub const SUITE_NAME: &str = "Red Deer Suite";

    /// Display name of the synthetic runner reporting never-scheduled tests.
    pub const UNEXECUTED_SUITE_NAME: &str = "Tests without execution";

    /// Id of the configuration used when no configuration source is given.
    pub const DEFAULT_CONFIGURATION_ID: &str = "default";
}

/// Run configuration loading.
pub mod config {
    /// Environment variable naming a configuration file or directory.
    pub const CONFIG_ENV: &str = "REDDEER_CONFIG";

    /// File extensions recognized as run configuration files.
    pub const CONFIG_EXTENSIONS: &[&str] = &["jsonc", "json"];
}

/// Wait utility timing.
pub mod wait {
    use std::time::Duration;

    /// Interval between two evaluations of a wait condition.
    pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

    /// Length of [`crate::wait::TimePeriod::Short`].
    pub const SHORT: Duration = Duration::from_secs(1);

    /// Length of [`crate::wait::TimePeriod::Normal`].
    pub const NORMAL: Duration = Duration::from_secs(10);

    /// Length of [`crate::wait::TimePeriod::Long`].
    pub const LONG: Duration = Duration::from_secs(60);
}
