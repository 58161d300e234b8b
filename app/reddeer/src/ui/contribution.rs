//! Contribution items: the logical menu model layered above raw widgets.
//!
//! A contribution is either a leaf action or a menu manager holding further
//! contributions. Menu managers may be realized as a widget menu, in which
//! case the menu's data slot points back at the manager.

use std::fmt;

use super::widget::WidgetId;

/// Identifier of a contribution item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContributionId(pub(crate) u32);

impl fmt::Display for ContributionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "@{}", self.0) }
}

/// The variant of a contribution item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContributionKind {
    /// A leaf action.
    Action,
    /// A menu manager (submenu container).
    Submenu {
        /// Child contributions, in display order.
        items: Vec<ContributionId>,
        /// The widget menu realizing this manager, once created.
        menu: Option<WidgetId>,
    },
    /// A separator or any other non-selectable entry.
    Separator,
}

/// A snapshot of a contribution item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionItem {
    pub id: ContributionId,
    /// Raw label, including mnemonic markers.
    pub text: String,
    pub kind: ContributionKind,
}

impl ContributionItem {
    /// Returns true if this item is a leaf action.
    #[must_use]
    pub const fn is_action(&self) -> bool { matches!(self.kind, ContributionKind::Action) }

    /// Returns the child ids of a menu manager, or an empty slice.
    #[must_use]
    pub fn items(&self) -> &[ContributionId] {
        match &self.kind {
            ContributionKind::Submenu { items, .. } => items,
            ContributionKind::Action | ContributionKind::Separator => &[],
        }
    }
}

/// Identifier of a workbench part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PartId(pub(crate) u32);

/// A workbench part (view or editor).
#[derive(Debug, Clone)]
pub struct Part {
    pub(crate) title: String,
    /// Menu manager of the part's view menu, if it has one.
    pub(crate) menu_manager: Option<ContributionId>,
}

impl Part {
    /// Returns the part title.
    #[must_use]
    pub fn title(&self) -> &str { &self.title }

    /// Returns the view menu manager, if any.
    #[must_use]
    pub const fn menu_manager(&self) -> Option<ContributionId> { self.menu_manager }
}
