//! Test fixtures: a small workbench built on the in-process display.
//!
//! This module is only compiled for tests.

#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

use super::{
    ContributionId, Display, EventDetail, EventInjector, EventKind, MenuStyle, PartId, UiHandle, UiThread,
    WidgetId,
};

// ============================================================================
// Workbench Fixture
// ============================================================================

/// Ids of the fixture widgets. All ids are plain data and cross threads.
#[derive(Debug, Clone, Copy)]
pub struct Workbench {
    pub shell: WidgetId,
    pub menu_bar: WidgetId,
    pub file: WidgetId,
    pub file_menu: WidgetId,
    pub new: WidgetId,
    pub new_menu: WidgetId,
    pub project: WidgetId,
    pub save: WidgetId,
    pub exit: WidgetId,
    /// A tree whose context menu is realized from a menu manager.
    pub explorer: WidgetId,
    pub explorer_manager: ContributionId,
    /// A text control whose context menu is rebuilt on every Show.
    pub console: WidgetId,
    /// A tool item opening a dropdown menu on its arrow.
    pub run_item: WidgetId,
    pub run_menu: WidgetId,
    pub part: PartId,
}

/// Builds the fixture on `display`.
///
/// Menu bar: `&File` (`&New` > `&Project...`, `&Save`, `E&xit`), `&Edit`.
pub fn build_workbench(display: &Display) -> Workbench {
    let shell = display.create_shell("RedDeer Workbench");
    let menu_bar = display.create_menu(shell, MenuStyle::Bar).unwrap();
    display.set_menu_bar(shell, menu_bar).unwrap();

    let (file, file_menu) = display.create_cascade_item(menu_bar, "&File").unwrap();
    let (new, new_menu) = display.create_cascade_item(file_menu, "&New").unwrap();
    let project = display.create_menu_item(new_menu, "&Project...").unwrap();
    let save = display.create_menu_item(file_menu, "&Save").unwrap();
    let exit = display.create_menu_item(file_menu, "E&xit").unwrap();
    let (_, edit_menu) = display.create_cascade_item(menu_bar, "&Edit").unwrap();
    display.create_menu_item(edit_menu, "&Undo").unwrap();

    let explorer = display.create_control(shell, "Tree", "").unwrap();
    let explorer_manager = display.create_menu_manager("");
    let copy = display.create_action("&Copy", |_| {});
    let team = display.create_menu_manager("&Team");
    let commit = display.create_action("&Commit...", |_| {});
    let separator = display.create_separator();
    let refresh = display.create_action("Re&fresh", |_| {});
    display.add_contribution(team, commit).unwrap();
    for item in [copy, team, separator, refresh] {
        display.add_contribution(explorer_manager, item).unwrap();
    }
    let explorer_menu = display.realize_manager(explorer_manager, explorer, MenuStyle::PopUp).unwrap();
    display.set_control_menu(explorer, explorer_menu).unwrap();

    let console = display.create_control(shell, "StyledText", "").unwrap();
    let console_menu = display.create_menu(console, MenuStyle::PopUp).unwrap();
    display.set_control_menu(console, console_menu).unwrap();
    let shown = Rc::new(Cell::new(0_u32));
    display.add_listener(console_menu, EventKind::Show, move |d, _| {
        shown.set(shown.get() + 1);
        d.remove_all_items(console_menu).unwrap();
        d.create_menu_item(console_menu, "&Clear").unwrap();
        d.create_menu_item(console_menu, &format!("Shown {}", shown.get())).unwrap();
    });

    let run_item = display.create_tool_item(shell, "Run").unwrap();
    let run_menu = display.create_menu(run_item, MenuStyle::DropDown).unwrap();
    display.create_menu_item(run_menu, "Run &Configurations...").unwrap();
    display.create_menu_item(run_menu, "&Organize Favorites...").unwrap();
    display.add_listener(run_item, EventKind::Selection, move |d, event| {
        if event.detail == EventDetail::Arrow {
            d.set_visible(run_menu, true).unwrap();
        }
    });

    let part = display.create_part("Project Explorer");
    let view_manager = display.create_menu_manager("");
    let top = display.create_action("&Top Level Elements", |_| {});
    let filters = display.create_menu_manager("&Filters");
    let customize = display.create_action("&Customize View...", |_| {});
    display.add_contribution(filters, customize).unwrap();
    display.add_contribution(view_manager, top).unwrap();
    display.add_contribution(view_manager, filters).unwrap();
    display.set_part_menu_manager(part, view_manager).unwrap();
    display.activate_part(part);

    display.activate_shell(shell).unwrap();
    display.set_focus(explorer).unwrap();

    Workbench {
        shell,
        menu_bar,
        file,
        file_menu,
        new,
        new_menu,
        project,
        save,
        exit,
        explorer,
        explorer_manager,
        console,
        run_item,
        run_menu,
        part,
    }
}

/// Starts a UI thread and builds the workbench on it.
pub fn spawn_workbench() -> (UiThread, UiHandle, Workbench) {
    let ui = UiThread::spawn().unwrap();
    let handle = ui.handle();
    let workbench = handle.sync_exec(build_workbench).unwrap();
    (ui, handle, workbench)
}
