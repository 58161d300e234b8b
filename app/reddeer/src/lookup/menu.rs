//! Menu anchors and menu path lookups.
//!
//! Anchor strategies, each independent:
//!
//! - active shell menu bar, with one transient-shell fallback
//! - focused control context menu (`MenuDetect` first)
//! - contribution items of the focused control's context menu
//! - dropdown tool item menu, captured by observing `Show`
//! - view menu of the active workbench part

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use super::resolver::{resolve_contribution_path, resolve_menu_path, resolve_view_menu_path};
use super::{LookupOptions, ShellLookup, WidgetLookup};
use crate::core::{AnchorKind, Error, Result};
use crate::handler::{ToolItemHandler, WidgetHandler};
use crate::matcher::MenuPath;
use crate::ui::{
    ContributionId, ContributionKind, Display, EventInjector, EventKind, MenuStyle, UiHandle, WidgetData,
    WidgetId, WidgetTreeReader,
};
use crate::wait::{ShellWithTextIsActive, TimeoutPolicy, wait_while};

/// Finds menus and menu items, including lazily populated ones.
#[derive(Debug, Clone)]
pub struct MenuLookup {
    ui: UiHandle,
    options: LookupOptions,
}

impl MenuLookup {
    /// Creates a lookup with default options.
    #[must_use]
    pub fn new(ui: UiHandle) -> Self { Self { ui, options: LookupOptions::default() } }

    /// Creates a lookup with explicit options.
    #[must_use]
    pub const fn with_options(ui: UiHandle, options: LookupOptions) -> Self { Self { ui, options } }

    /// Options applied to every lookup.
    #[must_use]
    pub const fn options(&self) -> &LookupOptions { &self.options }

    // ========================================================================
    // Anchors
    // ========================================================================

    /// Returns the menu bar items of the active shell.
    ///
    /// If the active shell has no menu bar, an unexpected shell (e.g. a
    /// progress dialog) may have stolen activation. The lookup then waits,
    /// bounded and without raising, while that shell stays active and retries
    /// once if a differently titled shell took over.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AnchorNotFound`] if there is no active shell or no
    /// menu bar could be found after the fallback.
    pub fn active_shell_top_menu_items(&self) -> Result<Vec<WidgetId>> {
        let shells = ShellLookup::new(self.ui.clone());
        let widgets = WidgetHandler::new(self.ui.clone());

        let shell = shells.active_shell()?.ok_or_else(no_active_shell)?;
        let title = widgets.text(shell)?;

        match self.menu_bar_items(shell) {
            Err(err) if err.is_anchor_not_found() => {
                let mismatch = Error::TransientShellMismatch { observed: title.clone() };
                warn!(error = %mismatch, "no menu bar, waiting for the shell to lose activation");
                let condition = ShellWithTextIsActive::new(self.ui.clone(), title.clone());
                wait_while(&condition, self.options.transient_shell_wait, TimeoutPolicy::Ignore)?;

                let resampled = shells.active_shell()?.ok_or_else(no_active_shell)?;
                if widgets.text(resampled)? == title {
                    Err(mismatch.into_anchor_not_found(AnchorKind::MenuBar))
                } else {
                    self.menu_bar_items(resampled)
                }
            }
            other => other,
        }
    }

    /// Returns the items of the focused control's context menu.
    ///
    /// Sends `MenuDetect` to the control first, since many context menus are
    /// only built on request, then hides and shows the menu to populate it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AnchorNotFound`] if no control has focus or the
    /// control has no menu.
    pub fn top_menu_items_from_focus(&self) -> Result<Vec<WidgetId>> {
        let control = self.focus_control()?;
        WidgetHandler::new(self.ui.clone()).notify(EventKind::MenuDetect, control)?;
        let menu = self.control_menu(control)?;

        self.ui.sync_try(move |display| {
            display.hide(menu, true)?;
            display.show(menu)?;
            display.items(menu)
        })
    }

    /// Returns the contribution items behind the focused control's context
    /// menu.
    ///
    /// The result is empty when the menu's data slot holds no menu manager.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AnchorNotFound`] if no control has focus or the
    /// control has no menu to read contributions from.
    pub fn menu_contribution_items(&self) -> Result<Vec<ContributionId>> {
        let control = self.focus_control()?;
        let menu = self.control_menu(control).map_err(|err| match err {
            Error::AnchorNotFound { context, .. } => Error::anchor(AnchorKind::MenuContributions, context),
            other => other,
        })?;

        self.ui.sync_try(move |display| {
            display.hide(menu, true)?;
            display.show(menu)?;
            match display.data(menu)? {
                WidgetData::Manager(manager) => {
                    debug!("menu manager found");
                    Ok(display.contribution(manager)?.items().to_vec())
                }
                WidgetData::Empty | WidgetData::Action(_) => {
                    debug!("menu manager not found");
                    Ok(Vec::new())
                }
            }
        })
    }

    /// Returns the first-level items of a dropdown tool item's menu.
    ///
    /// The menu instance is unknown before the click, so a display filter
    /// records whichever menu is shown while the dropdown arrow is pressed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AnchorNotFound`] if the click showed no menu.
    pub fn tool_item_menu_items(&self, item: WidgetId) -> Result<Vec<WidgetId>> {
        let captured = Arc::new(Mutex::new(None::<WidgetId>));

        let observer = Arc::clone(&captured);
        let filters = self.ui.sync_exec(move |display| {
            [EventKind::Show, EventKind::Hide].map(|kind| {
                let observer = Arc::clone(&observer);
                display.add_filter(kind, move |display: &Display, event| {
                    if !display.widget(event.widget).is_ok_and(|widget| widget.is_menu()) {
                        return;
                    }
                    match event.kind {
                        EventKind::Show => *observer.lock() = Some(event.widget),
                        EventKind::Hide => *observer.lock() = None,
                        EventKind::MenuDetect | EventKind::Selection => {}
                    }
                })
            })
        })?;

        let clicked = ToolItemHandler::new(self.ui.clone()).click_drop_down(item);
        self.ui.sync_exec(move |display| filters.into_iter().for_each(|filter| display.remove_filter(filter)))?;
        clicked?;

        let Some(menu) = captured.lock().take() else {
            let text = WidgetHandler::new(self.ui.clone()).text(item)?;
            return Err(Error::anchor(AnchorKind::DropDownMenu, format!("tool item '{text}' showed no menu")));
        };

        self.ui.sync_try(move |display| {
            display.set_visible(menu, false)?;
            display.items(menu)
        })
    }

    /// Returns the contribution items of the active part's view menu.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AnchorNotFound`] if there is no active part or its
    /// view menu is empty.
    pub fn view_menus(&self) -> Result<Vec<ContributionId>> {
        self.ui.sync_try(|display| {
            let part = display.active_part().ok_or_else(no_active_part)?;
            let items = match part.menu_manager() {
                Some(manager) => display.contribution(manager)?.items().to_vec(),
                None => Vec::new(),
            };
            if items.is_empty() {
                return Err(Error::anchor(
                    AnchorKind::ViewMenu,
                    format!("No Menu found in active part: {}", part.title()),
                ));
            }
            Ok(items)
        })
    }

    // ========================================================================
    // Path lookups
    // ========================================================================

    /// Resolves `path` starting at the given top-level menu items.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathResolutionFailed`] if any level has no match.
    pub fn look_for(&self, top: &[WidgetId], path: impl Into<MenuPath>) -> Result<WidgetId> {
        let top = top.to_vec();
        let path = path.into();
        let options = self.options;
        self.ui.sync_try(move |display| resolve_menu_path(display, &top, &path, &options))
    }

    /// Resolves `path` against contribution items and returns the action.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathResolutionFailed`] if no action matched the final
    /// matcher.
    pub fn look_for_contribution(&self, items: &[ContributionId], path: impl Into<MenuPath>) -> Result<ContributionId> {
        let items = items.to_vec();
        let path = path.into();
        self.ui.sync_try(move |display| resolve_contribution_path(display, &items, &path))
    }

    /// Resolves `path` inside the active part's view menu.
    ///
    /// The view menu is realized under the active shell on first use.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AnchorNotFound`] if the active part has no view menu
    /// and [`Error::PathResolutionFailed`] if no leaf matched.
    pub fn look_for_view_menu(&self, path: impl Into<MenuPath>) -> Result<WidgetId> {
        let path = path.into();
        self.ui.sync_try(move |display| {
            let part = display.active_part().ok_or_else(no_active_part)?;
            let manager = part.menu_manager().ok_or_else(|| {
                Error::anchor(AnchorKind::ViewMenu, format!("No Menu found in active part: {}", part.title()))
            })?;

            let realized = match display.contribution(manager)?.kind {
                ContributionKind::Submenu { menu, .. } => menu.filter(|menu| !display.is_disposed(*menu)),
                ContributionKind::Action | ContributionKind::Separator => None,
            };
            let menu = match realized {
                Some(menu) => menu,
                None => {
                    let shell = display.active_shell().ok_or_else(no_active_shell)?;
                    display.realize_manager(manager, shell, MenuStyle::PopUp)?
                }
            };
            resolve_view_menu_path(display, menu, &path)
        })
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn menu_bar_items(&self, shell: WidgetId) -> Result<Vec<WidgetId>> {
        self.ui.sync_try(move |display| {
            let title = display.text(shell)?;
            info!(shell = %title, "getting menu bar");
            match display.menu(shell)? {
                Some(bar) => display.items(bar),
                None => Err(Error::anchor(AnchorKind::MenuBar, format!("Cannot find a menu bar of shell {title}"))),
            }
        })
    }

    fn focus_control(&self) -> Result<WidgetId> {
        WidgetLookup::new(self.ui.clone()).focus_control()?.ok_or_else(|| {
            Error::anchor(
                AnchorKind::FocusControl,
                "No control has focus. Perhaps something has stolen it? \
                 Try to regain focus by activating a shell.",
            )
        })
    }

    fn control_menu(&self, control: WidgetId) -> Result<WidgetId> {
        self.ui.sync_try(move |display| match display.menu(control)? {
            Some(menu) => Ok(menu),
            None => {
                let class = display.class_name(control)?;
                Err(Error::anchor(AnchorKind::ContextMenu, format!("{class} has no menu")))
            }
        })
    }
}

fn no_active_shell() -> Error {
    Error::anchor(AnchorKind::ActiveShell, "Cannot find menu bar because there's no active shell")
}

fn no_active_part() -> Error { Error::anchor(AnchorKind::ActivePart, "no workbench part is active") }
