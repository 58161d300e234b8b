use crate::core::Result;
use crate::ui::{Part, UiHandle, WidgetId};

/// Finds the focused control and the active workbench part.
#[derive(Debug, Clone)]
pub struct WidgetLookup {
    ui: UiHandle,
}

impl WidgetLookup {
    #[must_use]
    pub const fn new(ui: UiHandle) -> Self { Self { ui } }

    /// Returns the control holding input focus, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the UI thread is gone.
    pub fn focus_control(&self) -> Result<Option<WidgetId>> {
        self.ui.sync_exec(|display| display.focus_control())
    }

    /// Returns a snapshot of the active workbench part, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the UI thread is gone.
    pub fn active_part(&self) -> Result<Option<Part>> { self.ui.sync_exec(|display| display.active_part()) }
}
