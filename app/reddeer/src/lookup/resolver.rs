//! Level-by-level menu path resolution.
//!
//! These functions run on the UI thread, inside one bridged closure, so the
//! tree they observe cannot change between two levels except through the
//! events they inject themselves.
//!
//! # State Machine
//!
//! ```text
//!              ┌──────── match, matchers remain: populate submenu ───────┐
//!              ▼                                                         │
//!   AtLevel(top items) ── match on final matcher ──▶ Matched(leaf)       │
//!              │   └─────────────────────────────────────────────────────┘
//!              └── no match / no submenu to descend ──▶ Failed
//! ```

use tracing::{debug, info};

use super::LookupOptions;
use crate::core::Result;
use crate::matcher::{Matcher, MenuPath, scan_contributions, select_first};
use crate::ui::{ContributionId, EventInjector, WidgetId, WidgetTreeReader};

enum State {
    AtLevel { depth: usize, items: Vec<WidgetId> },
    Matched(WidgetId),
    Failed { attempted: usize },
}

/// Resolves `path` against menu items, starting at the anchor level `top`.
///
/// The anchor level is used as given; every deeper level is hidden
/// recursively and shown again before its items are read, so lazily
/// populated submenus are current.
///
/// # Errors
///
/// Returns [`crate::Error::PathResolutionFailed`] if the path is empty, a
/// level has no matching item, or an intermediate match has no submenu.
pub fn resolve_menu_path<D>(ui: &D, top: &[WidgetId], path: &MenuPath, options: &LookupOptions) -> Result<WidgetId>
where
    D: EventInjector + ?Sized,
{
    let matchers: Vec<&Matcher> = path.iter().collect();
    let Some(last) = matchers.len().checked_sub(1) else {
        return Err(path.failure(0));
    };

    let mut state = State::AtLevel { depth: 0, items: top.to_vec() };
    loop {
        state = match state {
            State::AtLevel { depth, items } => {
                let matcher = matchers[depth];
                match select_first(labelled(ui, &items)?, matcher) {
                    None => State::Failed { attempted: depth + 1 },
                    Some(item) if depth == last => {
                        if options.descend_into_final_submenu {
                            State::Matched(descend_final(ui, item, matcher)?)
                        } else {
                            State::Matched(item)
                        }
                    }
                    Some(item) => match ui.menu(item)? {
                        Some(submenu) => State::AtLevel { depth: depth + 1, items: populate(ui, submenu)? },
                        None => {
                            debug!(item = %item, "matched item has no submenu to descend into");
                            State::Failed { attempted: depth + 1 }
                        }
                    },
                }
            }
            State::Matched(leaf) => {
                info!(path = %path, leaf = %leaf, "menu path resolved");
                return Ok(leaf);
            }
            State::Failed { attempted } => return Err(path.failure(attempted)),
        };
    }
}

/// Resolves `path` against contribution items in dual mode.
///
/// Each matcher scans the current level: a matching action becomes the
/// candidate result, a matching menu manager switches the next level to its
/// children. The result is the action matched by the final matcher.
///
/// # Errors
///
/// Returns [`crate::Error::PathResolutionFailed`] if the path is empty or
/// the final matcher matched no action.
pub fn resolve_contribution_path<D>(ui: &D, items: &[ContributionId], path: &MenuPath) -> Result<ContributionId>
where
    D: WidgetTreeReader + ?Sized,
{
    if path.is_empty() {
        return Err(path.failure(0));
    }

    let mut level = items.to_vec();
    let mut current = None;
    for matcher in path {
        let snapshot = level.iter().map(|id| ui.contribution(*id)).collect::<Result<Vec<_>>>()?;
        let scan = scan_contributions(&snapshot, matcher);
        current = scan.action;
        if let Some(children) = scan.descend_into {
            level = children;
        }
    }

    current.ok_or_else(|| path.failure(path.len()))
}

/// Resolves `path` inside a realized view menu.
///
/// A match with a submenu is populated and becomes the next level; a match
/// without one becomes the current leaf. Matchers that find nothing leave
/// the walk where it is.
///
/// # Errors
///
/// Returns [`crate::Error::PathResolutionFailed`] if the path is empty or no
/// leaf was matched.
pub fn resolve_view_menu_path<D>(ui: &D, menu: WidgetId, path: &MenuPath) -> Result<WidgetId>
where
    D: EventInjector + ?Sized,
{
    if path.is_empty() {
        return Err(path.failure(0));
    }

    let mut current_menu = menu;
    let mut current = None;
    for matcher in path {
        let items = ui.items(current_menu)?;
        let Some(item) = select_first(labelled(ui, &items)?, matcher) else {
            continue;
        };
        match ui.menu(item)? {
            Some(submenu) => {
                populate(ui, submenu)?;
                current_menu = submenu;
            }
            None => current = Some(item),
        }
    }

    current.ok_or_else(|| path.failure(path.len()))
}

/// Resets and repopulates a submenu, returning its items.
fn populate<D>(ui: &D, submenu: WidgetId) -> Result<Vec<WidgetId>>
where
    D: EventInjector + ?Sized,
{
    ui.hide(submenu, true)?;
    ui.show(submenu)?;
    ui.items(submenu)
}

/// Applies the final matcher once more inside the final item's submenu.
fn descend_final<D>(ui: &D, item: WidgetId, matcher: &Matcher) -> Result<WidgetId>
where
    D: EventInjector + ?Sized,
{
    let Some(submenu) = ui.menu(item)? else {
        return Ok(item);
    };
    let items = populate(ui, submenu)?;
    Ok(select_first(labelled(ui, &items)?, matcher).unwrap_or(item))
}

fn labelled<D>(ui: &D, items: &[WidgetId]) -> Result<Vec<(WidgetId, String)>>
where
    D: WidgetTreeReader + ?Sized,
{
    items.iter().map(|item| Ok((*item, ui.text(*item)?))).collect()
}
