//! Integration tests for context menu lookups anchored at the focus control.
//!
//! ## Test Coverage
//! - Context menu items of the focused control
//! - Menus rebuilt every time they are shown
//! - Contribution items behind a realized menu manager

use crate::common::*;

#[test]
fn test_context_menu_of_explorer() {
    let fixture = Fixture::workbench();
    let lookup = fixture.menu_lookup();

    let top = lookup.top_menu_items_from_focus().unwrap();
    let labels: Vec<String> = top.iter().map(|item| fixture.label(*item)).collect();
    assert_eq!(labels, vec!["Copy", "Team"]);

    let commit = lookup.look_for(&top, ["Team", "Commit..."]).unwrap();
    MenuItemHandler::new(fixture.handle.clone()).select(commit).unwrap();
    assert_eq!(fixture.ids.commit_count(), 1);
}

#[test]
fn test_dynamic_menu_is_rebuilt_per_lookup() {
    let fixture = Fixture::workbench();
    fixture.focus(fixture.ids.console);
    let lookup = fixture.menu_lookup();

    let first = lookup.top_menu_items_from_focus().unwrap();
    assert_label!(fixture, first[1], "Shown 1");

    let second = lookup.top_menu_items_from_focus().unwrap();
    assert_label!(fixture, second[1], "Shown 2");
    assert!(lookup.look_for(&first, ["Clear"]).is_err(), "stale items are disposed");
    lookup.look_for(&second, ["Clear"]).unwrap();
}

#[test]
fn test_contribution_action_runs() {
    let fixture = Fixture::workbench();
    let lookup = fixture.menu_lookup();

    let items = lookup.menu_contribution_items().unwrap();
    let commit = lookup.look_for_contribution(&items, ["Team", "Commit..."]).unwrap();
    MenuItemHandler::new(fixture.handle.clone()).run_action(commit).unwrap();
    assert_eq!(fixture.ids.commit_count(), 1);

    let err = lookup.look_for_contribution(&items, ["Team"]).unwrap_err();
    assert!(matches!(err, Error::PathResolutionFailed { .. }));
}

#[test]
fn test_no_focus_control() {
    let fixture = Fixture::workbench();
    let explorer = fixture.ids.explorer;
    fixture.handle.sync_try(move |display| display.dispose(explorer)).unwrap();

    let err = fixture.menu_lookup().top_menu_items_from_focus().unwrap_err();
    assert!(err.is_anchor_not_found(), "{err}");
}
