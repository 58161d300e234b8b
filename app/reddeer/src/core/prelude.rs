//! Common re-exports for convenience.
//!
//! This module provides a prelude that can be imported by test code to get
//! access to the lookup API, matchers and the suite runner in one line.
//!
//! # Usage
//!
//! ```ignore
//! use reddeer::prelude::*;
//! ```

pub use super::constants::{APP_NAME, APP_VERSION};
pub use super::error::{AnchorKind, Error, Result};
pub use crate::handler::{MenuItemHandler, ToolItemHandler, WidgetHandler};
pub use crate::lookup::{LookupOptions, MenuLookup, ShellLookup, WidgetLookup};
pub use crate::matcher::{MenuPath, Matcher};
pub use crate::suite::{RedDeerSuite, RunConfiguration, SuiteConfiguration, SuiteDeclaration, TestClass};
pub use crate::ui::{Display, EventKind, UiHandle, UiThread, WidgetId};
pub use crate::wait::{TimePeriod, TimeoutPolicy};
