//! Integration tests for menu bar lookups.
//!
//! ## Test Coverage
//! - Resolving and selecting items of the active shell's menu bar
//! - Nested cascades and prefix paths
//! - Matcher kinds (exact, regex, predicate)
//! - Failure reporting

use crate::common::*;

#[test]
fn test_select_file_save() {
    let fixture = Fixture::workbench();
    let lookup = fixture.menu_lookup();

    let top = lookup.active_shell_top_menu_items().unwrap();
    let save = lookup.look_for(&top, ["File", "Save"]).unwrap();
    assert_eq!(save, fixture.ids.save);

    MenuItemHandler::new(fixture.handle.clone()).select(save).unwrap();
    assert_eq!(fixture.ids.save_count(), 1);
}

#[test]
fn test_nested_cascade() {
    let fixture = Fixture::workbench();
    let lookup = fixture.menu_lookup();

    let top = lookup.active_shell_top_menu_items().unwrap();
    let project = lookup.look_for(&top, ["File", "New", "Project..."]).unwrap();
    assert_eq!(project, fixture.ids.project);
    assert_label!(fixture, project, "Project...");
}

#[test]
fn test_prefix_resolves_to_cascade_item() {
    let fixture = Fixture::workbench();
    let lookup = fixture.menu_lookup();

    let top = lookup.active_shell_top_menu_items().unwrap();
    assert_eq!(lookup.look_for(&top, ["File"]).unwrap(), fixture.ids.file);
    assert_eq!(lookup.look_for(&top, ["Window", "Show View"]).unwrap(), fixture.ids.show_view);
}

#[test]
fn test_mixed_matchers() {
    let fixture = Fixture::workbench();
    let lookup = fixture.menu_lookup();

    let top = lookup.active_shell_top_menu_items().unwrap();
    let path = MenuPath::default()
        .then(Matcher::starts_with("Fi"))
        .then(Matcher::regex("^Sa.e$").unwrap());
    assert_eq!(lookup.look_for(&top, path).unwrap(), fixture.ids.save);

    let path = MenuPath::default()
        .then("File")
        .then(Matcher::with_predicate("ends with dots", |label| label.ends_with("...")));
    assert!(lookup.look_for(&top, path).is_err());
}

#[test]
fn test_missing_item_reports_path() {
    let fixture = Fixture::workbench();
    let lookup = fixture.menu_lookup();

    let top = lookup.active_shell_top_menu_items().unwrap();
    let err = lookup.look_for(&top, ["File", "Nonexistent"]).unwrap_err();
    match &err {
        Error::PathResolutionFailed { attempted, depth, .. } => {
            assert_eq!(*attempted, 2);
            assert_eq!(*depth, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("No menu item matching specified path found"));
}

#[test]
fn test_lookups_from_many_threads_serialize() {
    let fixture = Fixture::workbench();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let lookup = fixture.menu_lookup();
            std::thread::spawn(move || {
                let top = lookup.active_shell_top_menu_items().unwrap();
                lookup.look_for(&top, ["File", "Save"]).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), fixture.ids.save);
    }
}
