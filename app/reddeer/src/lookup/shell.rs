use crate::core::Result;
use crate::matcher::{Matcher, select_first};
use crate::ui::{UiHandle, WidgetId, WidgetTreeReader};

/// Finds top-level shells.
#[derive(Debug, Clone)]
pub struct ShellLookup {
    ui: UiHandle,
}

impl ShellLookup {
    #[must_use]
    pub const fn new(ui: UiHandle) -> Self { Self { ui } }

    /// Returns the active shell, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the UI thread is gone.
    pub fn active_shell(&self) -> Result<Option<WidgetId>> { self.ui.sync_exec(|display| display.active_shell()) }

    /// Returns every open shell, most recently activated last.
    ///
    /// # Errors
    ///
    /// Returns an error if the UI thread is gone.
    pub fn shells(&self) -> Result<Vec<WidgetId>> { self.ui.sync_exec(|display| display.shells()) }

    /// Returns the first open shell whose title satisfies `matcher`.
    ///
    /// # Errors
    ///
    /// Returns an error if the UI thread is gone.
    pub fn shell(&self, matcher: Matcher) -> Result<Option<WidgetId>> {
        self.ui.sync_try(move |display| {
            let titled = display
                .shells()
                .into_iter()
                .map(|shell| Ok((shell, display.text(shell)?)))
                .collect::<Result<Vec<_>>>()?;
            Ok(select_first(titled, &matcher))
        })
    }
}
