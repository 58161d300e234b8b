//! Integration tests for workbench view menus.

use crate::common::*;

#[test]
fn test_view_menu_leaf() {
    let fixture = Fixture::workbench();
    let lookup = fixture.menu_lookup();

    assert_eq!(lookup.view_menus().unwrap().len(), 1);
    let customize = lookup.look_for_view_menu(["Filters", "Customize View..."]).unwrap();
    assert_label!(fixture, customize, "Customize View...");
}

#[test]
fn test_view_menu_without_leaf_fails() {
    let fixture = Fixture::workbench();
    let err = fixture.menu_lookup().look_for_view_menu(["Filters"]).unwrap_err();
    assert!(matches!(err, Error::PathResolutionFailed { .. }), "{err}");
}

#[test]
fn test_part_without_view_menu() {
    let fixture = Fixture::workbench();
    fixture
        .handle
        .sync_exec(|display| {
            let outline = display.create_part("Outline");
            display.activate_part(outline);
        })
        .unwrap();

    let part = WidgetLookup::new(fixture.handle.clone()).active_part().unwrap().unwrap();
    assert_eq!(part.title(), "Outline");

    let err = fixture.menu_lookup().view_menus().unwrap_err();
    assert!(err.to_string().contains("No Menu found in active part: Outline"));
}
