//! Anchor discovery and menu path lookup.
//!
//! Lookups are stateless: they hold only a [`crate::ui::UiHandle`] and never
//! keep widget ids across calls. Every public operation is one (or a short,
//! fixed sequence of) blocking call(s) into the UI thread.
//!
//! - [`ShellLookup`] - active and open shells
//! - [`WidgetLookup`] - focused control and active workbench part
//! - [`MenuLookup`] - menu anchors and path resolution

mod menu;
pub mod resolver;
mod shell;
mod widget;

pub use menu::MenuLookup;
pub use shell::ShellLookup;
pub use widget::WidgetLookup;

use crate::wait::TimePeriod;

/// Tuning knobs of the lookup engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LookupOptions {
    /// How long the active-shell lookup waits for a transient shell (e.g. a
    /// progress dialog) to give activation back.
    pub transient_shell_wait: TimePeriod,
    /// When the final matcher hits a cascade item, apply it once more inside
    /// the item's submenu and return the match found there, if any.
    pub descend_into_final_submenu: bool,
}
