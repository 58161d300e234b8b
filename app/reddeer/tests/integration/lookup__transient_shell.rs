//! Integration tests for the active-shell fallback.
//!
//! A progress dialog without a menu bar may hold activation for a moment.
//! The menu bar lookup waits for it to go away and retries once.

use std::thread;
use std::time::Duration;

use crate::common::*;

fn open_progress(fixture: &Fixture) -> WidgetId {
    fixture.handle.sync_exec(|display| display.create_shell("Progress Information")).unwrap()
}

#[test]
fn test_waits_for_transient_shell_to_close() {
    let fixture = Fixture::workbench();
    let progress = open_progress(&fixture);

    let handle = fixture.handle.clone();
    let closer = thread::spawn(move || {
        thread::sleep(TRANSIENT_SHELL_DELAY);
        handle.sync_try(move |display| display.close_shell(progress)).unwrap();
    });

    let options =
        LookupOptions { transient_shell_wait: TimePeriod::Custom(Duration::from_secs(2)), ..LookupOptions::default() };
    let top = fixture.menu_lookup_with(options).active_shell_top_menu_items().unwrap();
    closer.join().unwrap();

    assert_eq!(top.first(), Some(&fixture.ids.file));
}

#[test]
fn test_transient_shell_that_stays_fails() {
    let fixture = Fixture::workbench();
    open_progress(&fixture);

    let options = LookupOptions {
        transient_shell_wait: TimePeriod::Custom(Duration::from_millis(100)),
        ..LookupOptions::default()
    };
    let err = fixture.menu_lookup_with(options).active_shell_top_menu_items().unwrap_err();
    match err {
        Error::AnchorNotFound { anchor, context } => {
            assert_eq!(anchor, AnchorKind::MenuBar);
            assert!(context.contains("Progress Information"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_condition_tracks_active_shell() {
    let fixture = Fixture::workbench();
    let progress = open_progress(&fixture);
    let condition = ShellWithTextIsActive::new(fixture.handle.clone(), "Progress Information");

    assert!(wait_until(&condition, TimePeriod::None, TimeoutPolicy::Raise).unwrap());
    fixture.handle.sync_try(move |display| display.close_shell(progress)).unwrap();
    assert!(wait_while(&condition, TimePeriod::Short, TimeoutPolicy::Raise).unwrap());
}
