//! Unified error types for RedDeer.
//!
//! Every lookup, bridge, wait and configuration failure is represented by the
//! base [`Error`] type. Lookup failures carry enough context to diagnose a
//! failed test step without inspecting the live UI.

use std::any::Any;
use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::ui::{ContributionId, WidgetId};

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// The kind of anchor a locator was trying to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorKind {
    /// The currently active top-level shell.
    ActiveShell,
    /// The menu bar of a shell.
    MenuBar,
    /// The control holding input focus.
    FocusControl,
    /// The context menu attached to a control.
    ContextMenu,
    /// Contribution items attached to a context menu.
    MenuContributions,
    /// The menu opened by a dropdown tool item.
    DropDownMenu,
    /// The active workbench part.
    ActivePart,
    /// The menu of a workbench view.
    ViewMenu,
}

impl fmt::Display for AnchorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ActiveShell => "active shell",
            Self::MenuBar => "menu bar",
            Self::FocusControl => "focused control",
            Self::ContextMenu => "context menu",
            Self::MenuContributions => "menu contribution items",
            Self::DropDownMenu => "dropdown menu",
            Self::ActivePart => "active workbench part",
            Self::ViewMenu => "view menu",
        };
        f.write_str(name)
    }
}

/// Base error type for all RedDeer errors.
#[derive(Debug, Error)]
pub enum Error {
    /// No anchor (shell, menu bar, focused control, context menu...) was found.
    #[error("Cannot find {anchor}: {context}")]
    AnchorNotFound { anchor: AnchorKind, context: String },

    /// A matcher at some level of the menu path matched nothing.
    #[error(
        "No menu item matching specified path found: [{path}] \
         (failed after {attempted} of {depth} matchers)"
    )]
    PathResolutionFailed {
        path: String,
        attempted: usize,
        depth: usize,
    },

    /// An unexpected transient shell (e.g. a progress dialog) was active.
    #[error("Unexpected shell '{observed}' is active")]
    TransientShellMismatch { observed: String },

    /// The widget was disposed or never existed.
    #[error("Widget {0} is disposed")]
    WidgetDisposed(WidgetId),

    /// The contribution item does not exist.
    #[error("Contribution item {0} does not exist")]
    UnknownContribution(ContributionId),

    /// The UI thread is not running anymore.
    #[error("UI thread is not running")]
    UiThreadGone,

    /// A task executed on the UI thread panicked.
    #[error("UI task panicked: {0}")]
    UiTaskPanicked(String),

    /// A bounded wait expired.
    #[error("Timed out after {period:?} waiting while/until {condition}")]
    WaitTimeout { condition: String, period: Duration },

    /// A matcher could not be built.
    #[error("Invalid matcher: {0}")]
    InvalidMatcher(String),

    /// Run configuration errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid arguments provided.
    #[error("{0}")]
    InvalidArguments(String),

    /// Generic error for uncategorized failures.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates an anchor-not-found error.
    pub fn anchor(anchor: AnchorKind, context: impl Into<String>) -> Self {
        Self::AnchorNotFound { anchor, context: context.into() }
    }

    /// Creates a path resolution error from the matcher descriptions.
    pub fn path_failed<I, S>(path: I, attempted: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parts: Vec<String> = path.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::PathResolutionFailed {
            depth: parts.len(),
            path: parts.join(" > "),
            attempted,
        }
    }

    /// Creates a configuration error.
    pub fn config(msg: impl Into<String>) -> Self { Self::Config(msg.into()) }

    /// Creates an invalid arguments error.
    pub fn invalid_args(msg: impl Into<String>) -> Self { Self::InvalidArguments(msg.into()) }

    /// Creates a generic error.
    pub fn other(msg: impl Into<String>) -> Self { Self::Other(msg.into()) }

    /// Returns true if this error means an anchor could not be found.
    #[must_use]
    pub const fn is_anchor_not_found(&self) -> bool { matches!(self, Self::AnchorNotFound { .. }) }

    /// Converts a recoverable transient-shell error into the anchor error
    /// reported to callers once recovery has failed.
    #[must_use]
    pub fn into_anchor_not_found(self, anchor: AnchorKind) -> Self {
        match self {
            Self::TransientShellMismatch { observed } => Self::anchor(
                anchor,
                format!("shell '{observed}' stayed active and has no menu bar"),
            ),
            other => other,
        }
    }
}

/// Extracts the message of a caught panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

impl From<String> for Error {
    fn from(msg: String) -> Self { Self::Other(msg) }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self { Self::Other(msg.to_string()) }
}
