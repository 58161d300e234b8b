use crate::core::Result;
use crate::handler::WidgetHandler;
use crate::ui::{Event, EventDetail, EventKind, UiHandle, WidgetId};

/// Operations on tool bar items.
#[derive(Debug, Clone)]
pub struct ToolItemHandler {
    widgets: WidgetHandler,
}

impl ToolItemHandler {
    #[must_use]
    pub const fn new(ui: UiHandle) -> Self { Self { widgets: WidgetHandler::new(ui) } }

    /// Clicks the body of a tool item.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is disposed or the UI thread is gone.
    pub fn click(&self, item: WidgetId) -> Result<()> { self.widgets.notify(EventKind::Selection, item) }

    /// Clicks the dropdown arrow of a tool item, opening its menu.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is disposed or the UI thread is gone.
    pub fn click_drop_down(&self, item: WidgetId) -> Result<()> {
        let event = Event::new(EventKind::Selection, item).with_detail(EventDetail::Arrow);
        self.widgets.notify_event(event)
    }
}
