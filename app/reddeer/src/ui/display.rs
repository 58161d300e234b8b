//! In-process toolkit model.
//!
//! The [`Display`] owns the widget arena, the contribution model, the
//! workbench parts and every registered listener. It is confined to the UI
//! thread (it is neither `Send` nor `Sync`); test threads reach it only
//! through [`super::UiHandle::sync_exec`].
//!
//! Interior mutability lets listeners mutate the tree while an event is being
//! dispatched: no borrow is held while a listener runs.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use tracing::{trace, warn};

use super::contribution::{ContributionId, ContributionItem, ContributionKind, Part, PartId};
use super::event::{Event, EventKind, FilterId, Listener};
use super::traits::{EventInjector, WidgetTreeReader};
use super::widget::{MenuStyle, Widget, WidgetData, WidgetId, WidgetKind};
use crate::core::{Error, Result};

type ActionHandler = Rc<dyn Fn(&Display)>;

/// Arena state of the display.
#[derive(Debug, Default)]
struct WidgetTree {
    widgets: Vec<Widget>,
    contributions: Vec<ContributionItem>,
    parts: Vec<Part>,
    /// Open shells in activation order, most recently activated last.
    shells: Vec<WidgetId>,
    active_shell: Option<WidgetId>,
    focus_control: Option<WidgetId>,
    active_part: Option<PartId>,
}

impl WidgetTree {
    fn get(&self, id: WidgetId) -> Result<&Widget> {
        self.widgets
            .get(id.index())
            .filter(|widget| !widget.disposed)
            .ok_or(Error::WidgetDisposed(id))
    }

    fn get_mut(&mut self, id: WidgetId) -> Result<&mut Widget> {
        self.widgets
            .get_mut(id.index())
            .filter(|widget| !widget.disposed)
            .ok_or(Error::WidgetDisposed(id))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn insert(&mut self, widget: Widget) -> WidgetId {
        let id = WidgetId(self.widgets.len() as u32);
        if let Some(parent) = widget.parent
            && let Ok(parent) = self.get_mut(parent)
        {
            parent.children.push(id);
        }
        self.widgets.push(widget);
        id
    }

    fn contribution(&self, id: ContributionId) -> Result<&ContributionItem> {
        self.contributions.get(id.0 as usize).ok_or(Error::UnknownContribution(id))
    }

    fn contribution_mut(&mut self, id: ContributionId) -> Result<&mut ContributionItem> {
        self.contributions.get_mut(id.0 as usize).ok_or(Error::UnknownContribution(id))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn insert_contribution(&mut self, text: &str, kind: ContributionKind) -> ContributionId {
        let id = ContributionId(self.contributions.len() as u32);
        self.contributions.push(ContributionItem { id, text: text.to_string(), kind });
        id
    }

    fn require_menu(&self, id: WidgetId) -> Result<&Widget> {
        let widget = self.get(id)?;
        if widget.is_menu() {
            Ok(widget)
        } else {
            Err(Error::other(format!("widget {id} ({}) is not a menu", widget.class_name)))
        }
    }

    /// Marks a widget and everything below it as disposed.
    fn dispose(&mut self, id: WidgetId) -> Result<()> {
        let parent = self.get(id)?.parent;
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            let Some(widget) = self.widgets.get_mut(current.index()) else {
                continue;
            };
            if widget.disposed {
                continue;
            }
            widget.disposed = true;
            pending.extend(widget.children.iter().copied());
            pending.extend(widget.menu);
        }

        if let Some(parent) = parent
            && let Some(parent) = self.widgets.get_mut(parent.index())
        {
            parent.children.retain(|child| *child != id);
            if parent.menu == Some(id) {
                parent.menu = None;
            }
        }

        self.shells.retain(|shell| !self.widgets[shell.index()].disposed);
        if self.active_shell.is_some_and(|shell| self.widgets[shell.index()].disposed) {
            self.active_shell = self.shells.last().copied();
        }
        if self.focus_control.is_some_and(|control| self.widgets[control.index()].disposed) {
            self.focus_control = None;
        }
        Ok(())
    }
}

/// The UI-thread-confined toolkit model.
#[derive(Default)]
pub struct Display {
    tree: RefCell<WidgetTree>,
    listeners: RefCell<HashMap<(WidgetId, EventKind), Vec<Listener>>>,
    filters: RefCell<Vec<(FilterId, EventKind, Listener)>>,
    actions: RefCell<HashMap<ContributionId, ActionHandler>>,
    next_filter: Cell<u64>,
}

impl std::fmt::Debug for Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tree = self.tree.borrow();
        f.debug_struct("Display")
            .field("widgets", &tree.widgets.len())
            .field("contributions", &tree.contributions.len())
            .field("active_shell", &tree.active_shell)
            .field("focus_control", &tree.focus_control)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Building the widget tree
// ============================================================================

impl Display {
    /// Creates an empty display.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Opens a new top-level shell; it becomes the active shell.
    pub fn create_shell(&self, text: &str) -> WidgetId {
        let mut tree = self.tree.borrow_mut();
        let id = tree.insert(Widget::new(WidgetKind::Shell, "Shell", text, None));
        tree.shells.push(id);
        tree.active_shell = Some(id);
        id
    }

    /// Creates a focusable control inside a shell.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell is disposed.
    pub fn create_control(&self, shell: WidgetId, class_name: &str, text: &str) -> Result<WidgetId> {
        let mut tree = self.tree.borrow_mut();
        tree.get(shell)?;
        Ok(tree.insert(Widget::new(WidgetKind::Control, class_name, text, Some(shell))))
    }

    /// Creates a tool item inside a shell's tool bar.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell is disposed.
    pub fn create_tool_item(&self, shell: WidgetId, text: &str) -> Result<WidgetId> {
        let mut tree = self.tree.borrow_mut();
        tree.get(shell)?;
        Ok(tree.insert(Widget::new(WidgetKind::ToolItem, "ToolItem", text, Some(shell))))
    }

    /// Creates a menu owned by `parent`.
    ///
    /// The menu is not attached anywhere; see [`Self::set_menu_bar`],
    /// [`Self::set_control_menu`] and [`Self::create_cascade_item`].
    ///
    /// # Errors
    ///
    /// Returns an error if the parent is disposed.
    pub fn create_menu(&self, parent: WidgetId, style: MenuStyle) -> Result<WidgetId> {
        let mut tree = self.tree.borrow_mut();
        tree.get(parent)?;
        Ok(tree.insert(Widget::new(WidgetKind::Menu(style), "Menu", "", Some(parent))))
    }

    /// Appends a leaf item to a menu.
    ///
    /// # Errors
    ///
    /// Returns an error if `menu` is disposed or is not a menu.
    pub fn create_menu_item(&self, menu: WidgetId, text: &str) -> Result<WidgetId> {
        let mut tree = self.tree.borrow_mut();
        tree.require_menu(menu)?;
        Ok(tree.insert(Widget::new(WidgetKind::MenuItem, "MenuItem", text, Some(menu))))
    }

    /// Appends a cascade item with an empty dropdown submenu.
    ///
    /// Returns `(item, submenu)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `menu` is disposed or is not a menu.
    pub fn create_cascade_item(&self, menu: WidgetId, text: &str) -> Result<(WidgetId, WidgetId)> {
        let item = self.create_menu_item(menu, text)?;
        let submenu = self.create_menu(item, MenuStyle::DropDown)?;
        self.tree.borrow_mut().get_mut(item)?.menu = Some(submenu);
        Ok((item, submenu))
    }

    /// Installs `menu` as the menu bar of `shell`.
    ///
    /// # Errors
    ///
    /// Returns an error if either widget is disposed.
    pub fn set_menu_bar(&self, shell: WidgetId, menu: WidgetId) -> Result<()> {
        let mut tree = self.tree.borrow_mut();
        tree.require_menu(menu)?;
        tree.get_mut(shell)?.menu = Some(menu);
        Ok(())
    }

    /// Installs `menu` as the context menu of `control`.
    ///
    /// # Errors
    ///
    /// Returns an error if either widget is disposed.
    pub fn set_control_menu(&self, control: WidgetId, menu: WidgetId) -> Result<()> {
        let mut tree = self.tree.borrow_mut();
        tree.require_menu(menu)?;
        tree.get_mut(control)?.menu = Some(menu);
        Ok(())
    }

    /// Sets the typed data slot of a widget.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is disposed.
    pub fn set_data(&self, widget: WidgetId, data: WidgetData) -> Result<()> {
        self.tree.borrow_mut().get_mut(widget)?.data = data;
        Ok(())
    }

    /// Changes the label of a widget.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is disposed.
    pub fn set_text(&self, widget: WidgetId, text: &str) -> Result<()> {
        text.clone_into(&mut self.tree.borrow_mut().get_mut(widget)?.text);
        Ok(())
    }

    /// Disposes every item of a menu, typically before repopulating it.
    ///
    /// # Errors
    ///
    /// Returns an error if `menu` is disposed or is not a menu.
    pub fn remove_all_items(&self, menu: WidgetId) -> Result<()> {
        let mut tree = self.tree.borrow_mut();
        let items = tree.require_menu(menu)?.children.clone();
        for item in items {
            tree.dispose(item)?;
        }
        Ok(())
    }

    /// Disposes a widget and everything it owns.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is already disposed.
    pub fn dispose(&self, widget: WidgetId) -> Result<()> { self.tree.borrow_mut().dispose(widget) }

    /// Activates a shell (brings it to the top of the activation order).
    ///
    /// # Errors
    ///
    /// Returns an error if the shell is disposed.
    pub fn activate_shell(&self, shell: WidgetId) -> Result<()> {
        let mut tree = self.tree.borrow_mut();
        tree.get(shell)?;
        tree.shells.retain(|open| *open != shell);
        tree.shells.push(shell);
        tree.active_shell = Some(shell);
        Ok(())
    }

    /// Closes a shell; the previously active shell becomes active again.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell is already disposed.
    pub fn close_shell(&self, shell: WidgetId) -> Result<()> { self.dispose(shell) }

    /// Gives input focus to a control.
    ///
    /// # Errors
    ///
    /// Returns an error if the control is disposed.
    pub fn set_focus(&self, control: WidgetId) -> Result<()> {
        let mut tree = self.tree.borrow_mut();
        tree.get(control)?;
        tree.focus_control = Some(control);
        Ok(())
    }
}

// ============================================================================
// Contribution model and workbench parts
// ============================================================================

impl Display {
    /// Creates an action contribution running `handler` when selected.
    pub fn create_action(&self, text: &str, handler: impl Fn(&Self) + 'static) -> ContributionId {
        let id = self.tree.borrow_mut().insert_contribution(text, ContributionKind::Action);
        self.actions.borrow_mut().insert(id, Rc::new(handler));
        id
    }

    /// Creates an empty menu manager.
    pub fn create_menu_manager(&self, text: &str) -> ContributionId {
        self.tree.borrow_mut().insert_contribution(text, ContributionKind::Submenu {
            items: Vec::new(),
            menu: None,
        })
    }

    /// Creates a separator contribution.
    pub fn create_separator(&self) -> ContributionId {
        self.tree.borrow_mut().insert_contribution("", ContributionKind::Separator)
    }

    /// Appends `item` to a menu manager.
    ///
    /// # Errors
    ///
    /// Returns an error if either id is unknown or `manager` is not a menu
    /// manager.
    pub fn add_contribution(&self, manager: ContributionId, item: ContributionId) -> Result<()> {
        let mut tree = self.tree.borrow_mut();
        tree.contribution(item)?;
        match &mut tree.contribution_mut(manager)?.kind {
            ContributionKind::Submenu { items, .. } => {
                items.push(item);
                Ok(())
            }
            ContributionKind::Action | ContributionKind::Separator => {
                Err(Error::invalid_args(format!("contribution {manager} is not a menu manager")))
            }
        }
    }

    /// Realizes a menu manager as a widget menu under `parent`.
    ///
    /// Actions become menu items running the action on selection, nested
    /// managers become cascade items. The menu's data slot points back at the
    /// manager.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent is disposed or the manager is unknown.
    pub fn realize_manager(
        &self,
        manager: ContributionId,
        parent: WidgetId,
        style: MenuStyle,
    ) -> Result<WidgetId> {
        let menu = self.create_menu(parent, style)?;
        self.fill_menu(menu, manager)?;
        Ok(menu)
    }

    fn fill_menu(&self, menu: WidgetId, manager: ContributionId) -> Result<()> {
        let children = {
            let mut tree = self.tree.borrow_mut();
            tree.get_mut(menu)?.data = WidgetData::Manager(manager);
            match &mut tree.contribution_mut(manager)?.kind {
                ContributionKind::Submenu { items, menu: realized } => {
                    *realized = Some(menu);
                    items.clone()
                }
                ContributionKind::Action | ContributionKind::Separator => {
                    return Err(Error::other(format!(
                        "contribution {manager} is not a menu manager"
                    )));
                }
            }
        };

        for child in children {
            let item = self.contribution(child)?;
            match item.kind {
                ContributionKind::Action => {
                    let widget = self.create_menu_item(menu, &item.text)?;
                    self.set_data(widget, WidgetData::Action(child))?;
                    self.add_listener(widget, EventKind::Selection, move |display, _| {
                        if let Err(err) = display.run_action(child) {
                            warn!(%child, %err, "contribution action failed");
                        }
                    });
                }
                ContributionKind::Submenu { .. } => {
                    let (_, submenu) = self.create_cascade_item(menu, &item.text)?;
                    self.fill_menu(submenu, child)?;
                }
                ContributionKind::Separator => {}
            }
        }
        Ok(())
    }

    /// Runs the handler of an action contribution.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is unknown or not an action.
    pub fn run_action(&self, action: ContributionId) -> Result<()> {
        let handler = self.actions.borrow().get(&action).cloned();
        let handler = handler.ok_or_else(|| Error::invalid_args(format!("{action} is not an action")))?;
        handler(self);
        Ok(())
    }

    /// Creates a workbench part.
    #[allow(clippy::cast_possible_truncation)]
    pub fn create_part(&self, title: &str) -> PartId {
        let mut tree = self.tree.borrow_mut();
        let id = PartId(tree.parts.len() as u32);
        tree.parts.push(Part { title: title.to_string(), menu_manager: None });
        id
    }

    /// Attaches a view menu manager to a part.
    ///
    /// # Errors
    ///
    /// Returns an error if the part or the manager is unknown.
    pub fn set_part_menu_manager(&self, part: PartId, manager: ContributionId) -> Result<()> {
        let mut tree = self.tree.borrow_mut();
        tree.contribution(manager)?;
        let part = tree
            .parts
            .get_mut(part.0 as usize)
            .ok_or_else(|| Error::other("unknown workbench part"))?;
        part.menu_manager = Some(manager);
        Ok(())
    }

    /// Activates a workbench part.
    pub fn activate_part(&self, part: PartId) { self.tree.borrow_mut().active_part = Some(part); }
}

// ============================================================================
// Reading state
// ============================================================================

impl Display {
    /// Returns a snapshot of a widget.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is disposed.
    pub fn widget(&self, id: WidgetId) -> Result<Widget> { self.tree.borrow().get(id).cloned() }

    /// Returns true if the widget has been disposed (or never existed).
    #[must_use]
    pub fn is_disposed(&self, id: WidgetId) -> bool { self.tree.borrow().get(id).is_err() }

    /// Returns true if a menu is currently shown.
    ///
    /// # Errors
    ///
    /// Returns an error if the menu is disposed.
    pub fn is_visible(&self, menu: WidgetId) -> Result<bool> {
        Ok(self.tree.borrow().get(menu)?.visible)
    }

    /// Returns the owner of a widget.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is disposed.
    pub fn parent(&self, widget: WidgetId) -> Result<Option<WidgetId>> {
        Ok(self.tree.borrow().get(widget)?.parent)
    }

    /// Returns the active shell, if any.
    #[must_use]
    pub fn active_shell(&self) -> Option<WidgetId> { self.tree.borrow().active_shell }

    /// Returns all open shells in activation order.
    #[must_use]
    pub fn shells(&self) -> Vec<WidgetId> { self.tree.borrow().shells.clone() }

    /// Returns the control holding input focus, if any.
    #[must_use]
    pub fn focus_control(&self) -> Option<WidgetId> { self.tree.borrow().focus_control }

    /// Returns the active workbench part, if any.
    #[must_use]
    pub fn active_part(&self) -> Option<Part> {
        let tree = self.tree.borrow();
        tree.active_part.and_then(|id| tree.parts.get(id.0 as usize).cloned())
    }
}

impl WidgetTreeReader for Display {
    fn text(&self, widget: WidgetId) -> Result<String> {
        Ok(self.tree.borrow().get(widget)?.text.clone())
    }

    fn class_name(&self, widget: WidgetId) -> Result<String> {
        Ok(self.tree.borrow().get(widget)?.class_name.clone())
    }

    fn items(&self, menu: WidgetId) -> Result<Vec<WidgetId>> {
        let tree = self.tree.borrow();
        let menu = tree.require_menu(menu)?;
        Ok(menu
            .children
            .iter()
            .copied()
            .filter(|child| tree.get(*child).is_ok_and(|w| w.kind == WidgetKind::MenuItem))
            .collect())
    }

    fn menu(&self, widget: WidgetId) -> Result<Option<WidgetId>> {
        let tree = self.tree.borrow();
        Ok(tree.get(widget)?.menu.filter(|menu| tree.get(*menu).is_ok()))
    }

    fn parent_menu(&self, menu: WidgetId) -> Result<Option<WidgetId>> {
        let tree = self.tree.borrow();
        let Some(owner) = tree.require_menu(menu)?.parent else {
            return Ok(None);
        };
        let owner = tree.get(owner)?;
        if owner.kind == WidgetKind::MenuItem {
            Ok(owner.parent)
        } else {
            Ok(None)
        }
    }

    fn data(&self, widget: WidgetId) -> Result<WidgetData> { Ok(self.tree.borrow().get(widget)?.data) }

    fn contribution(&self, id: ContributionId) -> Result<ContributionItem> {
        self.tree.borrow().contribution(id).cloned()
    }
}

// ============================================================================
// Events
// ============================================================================

impl Display {
    /// Registers a listener for events of `kind` sent to `widget`.
    pub fn add_listener(&self, widget: WidgetId, kind: EventKind, listener: impl Fn(&Self, &Event) + 'static) {
        self.listeners.borrow_mut().entry((widget, kind)).or_default().push(Rc::new(listener));
    }

    /// Registers a display-wide filter seeing every event of `kind` before
    /// the target's own listeners.
    pub fn add_filter(&self, kind: EventKind, filter: impl Fn(&Self, &Event) + 'static) -> FilterId {
        let id = FilterId(self.next_filter.get());
        self.next_filter.set(id.0 + 1);
        self.filters.borrow_mut().push((id, kind, Rc::new(filter)));
        id
    }

    /// Removes a filter registered with [`Self::add_filter`].
    pub fn remove_filter(&self, id: FilterId) {
        self.filters.borrow_mut().retain(|(filter, _, _)| *filter != id);
    }

    /// Dispatches a fully built event.
    ///
    /// # Errors
    ///
    /// Returns an error if the target widget is disposed.
    pub fn notify_event(&self, event: Event) -> Result<()> {
        self.tree.borrow().get(event.widget)?;
        trace!(kind = ?event.kind, widget = %event.widget, "dispatching event");

        let mut targets: Vec<Listener> = self
            .filters
            .borrow()
            .iter()
            .filter(|(_, kind, _)| *kind == event.kind)
            .map(|(_, _, filter)| Rc::clone(filter))
            .collect();
        if let Some(listeners) = self.listeners.borrow().get(&(event.widget, event.kind)) {
            targets.extend(listeners.iter().cloned());
        }

        for listener in targets {
            listener(self, &event);
        }
        Ok(())
    }
}

impl EventInjector for Display {
    fn notify(&self, kind: EventKind, target: WidgetId) -> Result<()> {
        self.notify_event(Event::new(kind, target))
    }

    fn set_visible(&self, menu: WidgetId, visible: bool) -> Result<()> {
        let changed = {
            let mut tree = self.tree.borrow_mut();
            tree.require_menu(menu)?;
            let widget = tree.get_mut(menu)?;
            if matches!(widget.kind, WidgetKind::Menu(MenuStyle::Bar)) || widget.visible == visible {
                false
            } else {
                widget.visible = visible;
                true
            }
        };
        if changed {
            let kind = if visible { EventKind::Show } else { EventKind::Hide };
            self.notify(kind, menu)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_new_shell_becomes_active() {
        let display = Display::new();
        let first = display.create_shell("First");
        assert_eq!(display.active_shell(), Some(first));
        let second = display.create_shell("Second");
        assert_eq!(display.active_shell(), Some(second));
        assert_eq!(display.shells(), vec![first, second]);
    }

    #[test]
    fn test_closing_shell_reactivates_previous() {
        let display = Display::new();
        let main = display.create_shell("Main");
        let progress = display.create_shell("Progress Information");
        display.close_shell(progress).unwrap();
        assert_eq!(display.active_shell(), Some(main));
        assert!(display.is_disposed(progress));
    }

    #[test]
    fn test_cascade_items_link_submenu_and_parent_menu() {
        let display = Display::new();
        let shell = display.create_shell("Main");
        let bar = display.create_menu(shell, MenuStyle::Bar).unwrap();
        display.set_menu_bar(shell, bar).unwrap();
        let (file, file_menu) = display.create_cascade_item(bar, "&File").unwrap();

        assert_eq!(display.menu(shell).unwrap(), Some(bar));
        assert_eq!(display.menu(file).unwrap(), Some(file_menu));
        assert_eq!(display.parent_menu(file_menu).unwrap(), Some(bar));
        assert_eq!(display.parent_menu(bar).unwrap(), None);
        assert_eq!(display.items(bar).unwrap(), vec![file]);
    }

    #[test]
    fn test_remove_all_items_disposes_items() {
        let display = Display::new();
        let shell = display.create_shell("Main");
        let menu = display.create_menu(shell, MenuStyle::PopUp).unwrap();
        let item = display.create_menu_item(menu, "Copy").unwrap();
        display.remove_all_items(menu).unwrap();
        assert!(display.items(menu).unwrap().is_empty());
        assert!(matches!(display.text(item), Err(Error::WidgetDisposed(_))));
    }

    #[test]
    fn test_filters_run_before_listeners() {
        let display = Display::new();
        let shell = display.create_shell("Main");
        let menu = display.create_menu(shell, MenuStyle::PopUp).unwrap();
        let order = Rc::new(RefCell::new(Vec::new()));

        let seen = Rc::clone(&order);
        display.add_listener(menu, EventKind::Show, move |_, _| seen.borrow_mut().push("listener"));
        let seen = Rc::clone(&order);
        let filter = display.add_filter(EventKind::Show, move |_, _| seen.borrow_mut().push("filter"));

        display.show(menu).unwrap();
        assert_eq!(*order.borrow(), vec!["filter", "listener"]);

        display.remove_filter(filter);
        display.show(menu).unwrap();
        assert_eq!(*order.borrow(), vec!["filter", "listener", "listener"]);
    }

    #[test]
    fn test_listener_can_populate_menu_during_dispatch() {
        let display = Display::new();
        let shell = display.create_shell("Main");
        let menu = display.create_menu(shell, MenuStyle::PopUp).unwrap();
        display.add_listener(menu, EventKind::Show, move |d, _| {
            d.remove_all_items(menu).unwrap();
            d.create_menu_item(menu, "Generated").unwrap();
        });

        display.show(menu).unwrap();
        display.show(menu).unwrap();
        let items = display.items(menu).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(display.text(items[0]).unwrap(), "Generated");
    }

    #[test]
    fn test_set_visible_emits_only_on_change() {
        let display = Display::new();
        let shell = display.create_shell("Main");
        let menu = display.create_menu(shell, MenuStyle::PopUp).unwrap();
        let hides = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hides);
        display.add_listener(menu, EventKind::Hide, move |_, _| counter.set(counter.get() + 1));

        display.set_visible(menu, false).unwrap();
        assert_eq!(hides.get(), 0);
        display.set_visible(menu, true).unwrap();
        display.set_visible(menu, false).unwrap();
        assert_eq!(hides.get(), 1);
        assert!(!display.is_visible(menu).unwrap());
    }

    #[test]
    fn test_recursive_hide_walks_parent_chain() {
        let display = Display::new();
        let shell = display.create_shell("Main");
        let control = display.create_control(shell, "Tree", "").unwrap();
        let popup = display.create_menu(control, MenuStyle::PopUp).unwrap();
        let (_, submenu) = display.create_cascade_item(popup, "New").unwrap();
        display.set_visible(popup, true).unwrap();

        let hidden = Rc::new(RefCell::new(Vec::new()));
        for menu in [popup, submenu] {
            let log = Rc::clone(&hidden);
            display.add_listener(menu, EventKind::Hide, move |_, event| log.borrow_mut().push(event.widget));
        }

        display.hide(submenu, true).unwrap();
        assert_eq!(hidden.borrow()[0], submenu);
        assert!(hidden.borrow().contains(&popup));
        assert!(!display.is_visible(popup).unwrap());
    }

    #[test]
    fn test_realized_manager_runs_actions() {
        let display = Display::new();
        let shell = display.create_shell("Main");
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        let manager = display.create_menu_manager("");
        let action = display.create_action("&Refresh", move |_| flag.set(true));
        display.add_contribution(manager, action).unwrap();

        let menu = display.realize_manager(manager, shell, MenuStyle::PopUp).unwrap();
        assert_eq!(display.data(menu).unwrap(), WidgetData::Manager(manager));
        let items = display.items(menu).unwrap();
        assert_eq!(display.data(items[0]).unwrap(), WidgetData::Action(action));

        display.notify(EventKind::Selection, items[0]).unwrap();
        assert!(ran.get());
    }

    #[test]
    fn test_add_contribution_rejects_non_manager() {
        let display = Display::new();
        let action = display.create_action("Run", |_| {});
        let other = display.create_action("Debug", |_| {});
        let err = display.add_contribution(action, other).unwrap_err();
        assert!(matches!(err, Error::InvalidArguments(_)), "{err:?}");
    }
}
