use tracing::info;

use crate::core::{Error, Result};
use crate::ui::{ContributionId, EventInjector, EventKind, UiHandle, WidgetId, WidgetTreeReader};

/// Operations on resolved menu items and contribution actions.
#[derive(Debug, Clone)]
pub struct MenuItemHandler {
    ui: UiHandle,
}

impl MenuItemHandler {
    #[must_use]
    pub const fn new(ui: UiHandle) -> Self { Self { ui } }

    /// Selects a menu item, running its selection listeners.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is disposed or the UI thread is gone.
    pub fn select(&self, item: WidgetId) -> Result<()> {
        self.ui.sync_try(move |display| {
            let label = display.text(item)?;
            info!(label = %label, "selecting menu item");
            display.notify(EventKind::Selection, item)
        })
    }

    /// Runs the action behind a contribution item.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is not an action or the UI thread is gone.
    pub fn run_action(&self, action: ContributionId) -> Result<()> {
        self.ui.sync_try(move |display| {
            let item = display.contribution(action)?;
            if !item.is_action() {
                return Err(Error::invalid_args(format!("contribution '{}' is not an action", item.text)));
            }
            info!(label = %item.text, "running action");
            display.run_action(action)
        })
    }
}
