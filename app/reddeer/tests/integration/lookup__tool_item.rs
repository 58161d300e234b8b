//! Integration tests for dropdown tool item menus.

use crate::common::*;

#[test]
fn test_dropdown_items() {
    let fixture = Fixture::workbench();
    let lookup = fixture.menu_lookup();

    let items = lookup.tool_item_menu_items(fixture.ids.run_item).unwrap();
    let labels: Vec<String> = items.iter().map(|item| fixture.label(*item)).collect();
    assert_eq!(labels, vec!["Run Configurations...", "Organize Favorites..."]);

    let run_menu = fixture.ids.run_menu;
    let visible = fixture.handle.sync_try(move |display| display.is_visible(run_menu)).unwrap();
    assert!(!visible, "dropdown is hidden again after capture");

    let organize = lookup.look_for(&items, ["Organize Favorites..."]).unwrap();
    assert_eq!(organize, items[1]);
}

#[test]
fn test_repeated_dropdown_lookups() {
    let fixture = Fixture::workbench();
    let lookup = fixture.menu_lookup();

    let first = lookup.tool_item_menu_items(fixture.ids.run_item).unwrap();
    let second = lookup.tool_item_menu_items(fixture.ids.run_item).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_tool_item_without_menu() {
    let fixture = Fixture::workbench();
    let shell = fixture.ids.shell;
    let stop = fixture.handle.sync_try(move |display| display.create_tool_item(shell, "Stop")).unwrap();

    let err = fixture.menu_lookup().tool_item_menu_items(stop).unwrap_err();
    match err {
        Error::AnchorNotFound { anchor, context } => {
            assert_eq!(anchor, AnchorKind::DropDownMenu);
            assert!(context.contains("Stop"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
