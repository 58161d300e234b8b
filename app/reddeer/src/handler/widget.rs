use tracing::trace;

use crate::core::Result;
use crate::matcher::normalize;
use crate::ui::{Event, EventInjector, EventKind, UiHandle, WidgetId, WidgetTreeReader};

/// Generic operations available on every widget.
#[derive(Debug, Clone)]
pub struct WidgetHandler {
    ui: UiHandle,
}

impl WidgetHandler {
    #[must_use]
    pub const fn new(ui: UiHandle) -> Self { Self { ui } }

    /// Returns the raw label of a widget.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is disposed or the UI thread is gone.
    pub fn text(&self, widget: WidgetId) -> Result<String> {
        self.ui.sync_try(move |display| display.text(widget))
    }

    /// Returns the label with mnemonic markers stripped.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is disposed or the UI thread is gone.
    pub fn normalized_text(&self, widget: WidgetId) -> Result<String> {
        self.text(widget).map(|text| normalize(&text))
    }

    /// Returns the toolkit class name of a widget.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is disposed or the UI thread is gone.
    pub fn class_name(&self, widget: WidgetId) -> Result<String> {
        self.ui.sync_try(move |display| display.class_name(widget))
    }

    /// Posts an event of `kind` to a widget and waits for its listeners.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is disposed or the UI thread is gone.
    pub fn notify(&self, kind: EventKind, widget: WidgetId) -> Result<()> {
        trace!(?kind, %widget, "notify");
        self.ui.sync_try(move |display| display.notify(kind, widget))
    }

    /// Posts a fully built event.
    ///
    /// # Errors
    ///
    /// Returns an error if the target is disposed or the UI thread is gone.
    pub fn notify_event(&self, event: Event) -> Result<()> {
        trace!(kind = ?event.kind, widget = %event.widget, detail = ?event.detail, "notify");
        self.ui.sync_try(move |display| display.notify_event(event))
    }
}
