//! Per-test fixture owning the UI thread.

use reddeer::prelude::*;

use super::workbench::{WorkbenchIds, build_workbench};

/// A running UI thread with the workbench built on it.
///
/// Dropping the fixture stops the UI thread.
pub struct Fixture {
    _ui: UiThread,
    pub handle: UiHandle,
    pub ids: WorkbenchIds,
}

impl Fixture {
    /// Spawns a UI thread and builds the workbench.
    pub fn workbench() -> Self {
        let ui = UiThread::spawn().unwrap();
        let handle = ui.handle();
        let ids = handle.sync_exec(build_workbench).unwrap();
        Self { _ui: ui, handle, ids }
    }

    pub fn menu_lookup(&self) -> MenuLookup { MenuLookup::new(self.handle.clone()) }

    pub fn menu_lookup_with(&self, options: LookupOptions) -> MenuLookup {
        MenuLookup::with_options(self.handle.clone(), options)
    }

    /// Normalized label of a widget.
    pub fn label(&self, widget: WidgetId) -> String {
        WidgetHandler::new(self.handle.clone()).normalized_text(widget).unwrap()
    }

    /// Gives focus to a control on the UI thread.
    pub fn focus(&self, control: WidgetId) {
        self.handle.sync_try(move |display| display.set_focus(control)).unwrap();
    }
}
