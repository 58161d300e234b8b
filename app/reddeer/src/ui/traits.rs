//! Capability seams the lookup engine is written against.
//!
//! The resolver and the locators never touch the widget arena directly: they
//! read through [`WidgetTreeReader`] and mutate only through
//! [`EventInjector`]. [`super::Display`] implements both; any other toolkit
//! providing the same surface can drive the engine unchanged.

use super::contribution::{ContributionId, ContributionItem};
use super::event::EventKind;
use super::widget::{WidgetData, WidgetId};
use crate::core::Result;

/// Read-only traversal of the live widget hierarchy.
pub trait WidgetTreeReader {
    /// Returns the raw label of a widget, including mnemonic markers.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::WidgetDisposed`] if the widget is gone.
    fn text(&self, widget: WidgetId) -> Result<String>;

    /// Returns the toolkit class name of a widget.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::WidgetDisposed`] if the widget is gone.
    fn class_name(&self, widget: WidgetId) -> Result<String>;

    /// Returns the current items of a menu, in display order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::WidgetDisposed`] if the menu is gone.
    fn items(&self, menu: WidgetId) -> Result<Vec<WidgetId>>;

    /// Returns the menu attached to a widget: the submenu of a cascade item,
    /// the menu bar of a shell or the context menu of a control.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::WidgetDisposed`] if the widget is gone.
    fn menu(&self, widget: WidgetId) -> Result<Option<WidgetId>>;

    /// Returns the menu containing the cascade item that owns `menu`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::WidgetDisposed`] if the menu is gone.
    fn parent_menu(&self, menu: WidgetId) -> Result<Option<WidgetId>>;

    /// Returns the typed data slot of a widget.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::WidgetDisposed`] if the widget is gone.
    fn data(&self, widget: WidgetId) -> Result<WidgetData>;

    /// Returns a snapshot of a contribution item.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownContribution`] for an unknown id.
    fn contribution(&self, id: ContributionId) -> Result<ContributionItem>;
}

/// Synthesizes toolkit events and dispatches them synchronously.
pub trait EventInjector: WidgetTreeReader {
    /// Dispatches an event of `kind` to `target`, running filters and
    /// listeners before returning.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::WidgetDisposed`] if the target is gone.
    fn notify(&self, kind: EventKind, target: WidgetId) -> Result<()>;

    /// Shows or hides a popup menu. Menu bars ignore the request.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::WidgetDisposed`] if the menu is gone.
    fn set_visible(&self, menu: WidgetId, visible: bool) -> Result<()>;

    /// Sends [`EventKind::Show`] to a menu so lazy contributions populate it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::WidgetDisposed`] if the menu is gone.
    fn show(&self, menu: WidgetId) -> Result<()> { self.notify(EventKind::Show, menu) }

    /// Sends [`EventKind::Hide`] to a menu.
    ///
    /// With `recursive`, every ancestor menu is hidden as well and the
    /// top-most one is made invisible, resetting the "currently open" state
    /// left behind by a previous lookup.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::WidgetDisposed`] if a menu of the chain is gone.
    fn hide(&self, menu: WidgetId, recursive: bool) -> Result<()> {
        self.notify(EventKind::Hide, menu)?;
        if recursive {
            match self.parent_menu(menu)? {
                Some(parent) => self.hide(parent, true)?,
                None => self.set_visible(menu, false)?,
            }
        }
        Ok(())
    }
}
