//! Workbench built through the public display API.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use reddeer::ui::{ContributionId, Display, EventDetail, EventInjector, EventKind, MenuStyle, PartId, WidgetId};

/// Ids of the workbench widgets, plus counters bumped by its actions.
#[derive(Debug, Clone)]
pub struct WorkbenchIds {
    pub shell: WidgetId,
    pub menu_bar: WidgetId,
    pub file: WidgetId,
    pub save: WidgetId,
    pub project: WidgetId,
    pub show_view: WidgetId,
    pub explorer: WidgetId,
    pub explorer_manager: ContributionId,
    pub console: WidgetId,
    pub run_item: WidgetId,
    pub run_menu: WidgetId,
    pub part: PartId,
    /// Times `File > Save` was selected.
    pub saves: Arc<AtomicUsize>,
    /// Times `Team > Commit...` ran.
    pub commits: Arc<AtomicUsize>,
}

impl WorkbenchIds {
    pub fn save_count(&self) -> usize { self.saves.load(Ordering::SeqCst) }

    pub fn commit_count(&self) -> usize { self.commits.load(Ordering::SeqCst) }
}

/// Builds the workbench on `display` and activates its shell.
///
/// - Menu bar: `&File` (`&New` > `&Project...`, `&Save`), `&Window` (`Show &View` > `&Other...`)
/// - Explorer tree: context menu from a menu manager (`&Copy`, `&Team` > `&Commit...`)
/// - Console: context menu rebuilt on every Show
/// - Run tool item: dropdown menu opened by its arrow
/// - Project Explorer part: view menu (`&Filters` > `&Customize View...`)
pub fn build_workbench(display: &Display) -> WorkbenchIds {
    let saves = Arc::new(AtomicUsize::new(0));
    let commits = Arc::new(AtomicUsize::new(0));

    let shell = display.create_shell("RedDeer Workbench");
    let menu_bar = display.create_menu(shell, MenuStyle::Bar).unwrap();
    display.set_menu_bar(shell, menu_bar).unwrap();

    let (file, file_menu) = display.create_cascade_item(menu_bar, "&File").unwrap();
    let (_, new_menu) = display.create_cascade_item(file_menu, "&New").unwrap();
    let project = display.create_menu_item(new_menu, "&Project...").unwrap();
    let save = display.create_menu_item(file_menu, "&Save").unwrap();
    let counter = Arc::clone(&saves);
    display.add_listener(save, EventKind::Selection, move |_, _| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let (_, window_menu) = display.create_cascade_item(menu_bar, "&Window").unwrap();
    let (show_view, show_view_menu) = display.create_cascade_item(window_menu, "Show &View").unwrap();
    display.create_menu_item(show_view_menu, "&Other...").unwrap();

    let explorer = display.create_control(shell, "Tree", "").unwrap();
    let explorer_manager = display.create_menu_manager("");
    let copy = display.create_action("&Copy", |_| {});
    let team = display.create_menu_manager("&Team");
    let counter = Arc::clone(&commits);
    let commit = display.create_action("&Commit...", move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    display.add_contribution(team, commit).unwrap();
    display.add_contribution(explorer_manager, copy).unwrap();
    display.add_contribution(explorer_manager, team).unwrap();
    let explorer_menu = display.realize_manager(explorer_manager, explorer, MenuStyle::PopUp).unwrap();
    display.set_control_menu(explorer, explorer_menu).unwrap();

    let console = display.create_control(shell, "StyledText", "").unwrap();
    let console_menu = display.create_menu(console, MenuStyle::PopUp).unwrap();
    display.set_control_menu(console, console_menu).unwrap();
    let shown = Arc::new(AtomicUsize::new(0));
    display.add_listener(console_menu, EventKind::Show, move |d, _| {
        let count = shown.fetch_add(1, Ordering::SeqCst) + 1;
        d.remove_all_items(console_menu).unwrap();
        d.create_menu_item(console_menu, "&Clear").unwrap();
        d.create_menu_item(console_menu, &format!("Shown {count}")).unwrap();
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
    let filters = display.create_menu_manager("&Filters");
    let customize = display.create_action("&Customize View...", |_| {});
    display.add_contribution(filters, customize).unwrap();
    display.add_contribution(view_manager, filters).unwrap();
    display.set_part_menu_manager(part, view_manager).unwrap();
    display.activate_part(part);

    display.activate_shell(shell).unwrap();
    display.set_focus(explorer).unwrap();

    WorkbenchIds {
        shell,
        menu_bar,
        file,
        save,
        project,
        show_view,
        explorer,
        explorer_manager,
        console,
        run_item,
        run_menu,
        part,
        saves,
        commits,
    }
}
