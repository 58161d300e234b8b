//! UI events and listeners.

use std::rc::Rc;

use super::display::Display;
use super::widget::WidgetId;

/// Event types the lookup engine synthesizes or observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A menu is about to be shown; lazy menus populate themselves here.
    Show,
    /// A menu was hidden.
    Hide,
    /// A context menu was requested on a control.
    MenuDetect,
    /// A menu item, tool item or control was selected.
    Selection,
}

/// Extra information carried by an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventDetail {
    #[default]
    None,
    /// The dropdown arrow of a tool item was pressed.
    Arrow,
}

/// An event dispatched to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub widget: WidgetId,
    pub detail: EventDetail,
}

impl Event {
    /// Creates an event without detail.
    #[must_use]
    pub const fn new(kind: EventKind, widget: WidgetId) -> Self {
        Self { kind, widget, detail: EventDetail::None }
    }

    /// Sets the event detail.
    #[must_use]
    pub const fn with_detail(mut self, detail: EventDetail) -> Self {
        self.detail = detail;
        self
    }
}

/// A listener invoked on the UI thread.
///
/// Listeners receive the display so they can mutate the tree (e.g. populate
/// a dynamic menu on [`EventKind::Show`]).
pub type Listener = Rc<dyn Fn(&Display, &Event)>;

/// Handle of a display-wide event filter, used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterId(pub(crate) u64);
