//! Widget arena types.
//!
//! Widgets live in an append-only arena owned by the [`super::Display`] and
//! are addressed by [`WidgetId`]. Parent/child relations and attached menus
//! are stored as id links; ids are never reused, so a stale id can always be
//! detected as disposed.

use std::fmt;

use super::contribution::ContributionId;

/// Identifier of a widget in the display's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub(crate) u32);

impl WidgetId {
    /// Returns the arena index of this widget.
    #[must_use]
    pub const fn index(self) -> usize { self.0 as usize }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "#{}", self.0) }
}

/// The kind of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    /// A top-level window.
    Shell,
    /// A menu (bar, popup or dropdown).
    Menu(MenuStyle),
    /// An entry of a menu; cascade items carry a submenu.
    MenuItem,
    /// A focusable control (tree, text, table...).
    Control,
    /// An item of a tool bar.
    ToolItem,
}

/// How a menu is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuStyle {
    /// The menu bar of a shell; never shown or hidden.
    Bar,
    /// A context menu of a control or a free-standing popup.
    PopUp,
    /// A cascade submenu of a menu item.
    DropDown,
}

/// Typed payload attached to a widget.
///
/// Replaces an untyped data slot: a menu realized from a menu manager points
/// back at it, a menu item realized from an action points at the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetData {
    /// Nothing attached (or not yet populated).
    #[default]
    Empty,
    /// The widget renders a leaf action.
    Action(ContributionId),
    /// The widget renders a menu manager.
    Manager(ContributionId),
}

/// A node of the widget arena.
#[derive(Debug, Clone)]
pub struct Widget {
    pub(crate) kind: WidgetKind,
    pub(crate) class_name: String,
    pub(crate) text: String,
    pub(crate) parent: Option<WidgetId>,
    pub(crate) children: Vec<WidgetId>,
    /// Menu bar of a shell, context menu of a control, submenu of an item.
    pub(crate) menu: Option<WidgetId>,
    pub(crate) data: WidgetData,
    pub(crate) visible: bool,
    pub(crate) disposed: bool,
}

impl Widget {
    pub(crate) fn new(kind: WidgetKind, class_name: &str, text: &str, parent: Option<WidgetId>) -> Self {
        Self {
            kind,
            class_name: class_name.to_string(),
            text: text.to_string(),
            parent,
            children: Vec::new(),
            menu: None,
            data: WidgetData::Empty,
            visible: !matches!(kind, WidgetKind::Menu(MenuStyle::PopUp | MenuStyle::DropDown)),
            disposed: false,
        }
    }

    /// Returns the widget kind.
    #[must_use]
    pub const fn kind(&self) -> WidgetKind { self.kind }

    /// Returns the raw label, including mnemonic markers.
    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    /// Returns the toolkit class name (e.g. `Tree`, `StyledText`).
    #[must_use]
    pub fn class_name(&self) -> &str { &self.class_name }

    /// Returns true if this widget is a menu.
    #[must_use]
    pub const fn is_menu(&self) -> bool { matches!(self.kind, WidgetKind::Menu(_)) }
}
