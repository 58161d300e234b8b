//! Common test utilities and framework re-exports.
//!
//! This module re-exports the test framework for convenient use in test files.

#![allow(dead_code)]

use std::time::Duration;

pub use reddeer::prelude::*;
pub use reddeer::ui::{EventInjector, WidgetTreeReader};
pub use reddeer::wait::{ShellWithTextIsActive, wait_until, wait_while};

pub use crate::framework::*;

/// Delay before a background thread closes a transient shell.
pub const TRANSIENT_SHELL_DELAY: Duration = Duration::from_millis(200);

/// Asserts that the normalized label of `widget` equals `expected`.
#[macro_export]
macro_rules! assert_label {
    ($fixture:expr, $widget:expr, $expected:expr) => {{
        let label = $fixture.label($widget);
        assert_eq!(label, $expected, "unexpected label for widget {}", $widget);
    }};
}
