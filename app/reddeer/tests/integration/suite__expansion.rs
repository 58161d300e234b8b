//! Integration tests for suite replication across run configurations.
//!
//! ## Test Coverage
//! - Configurations loaded from a directory of JSONC files
//! - Requirements and filters selecting tests per configuration
//! - Coverage gaps reported as tests without execution
//! - UI lookups running as test bodies

use std::fs;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use reddeer::suite::{LoggingListener, Runner, TestOutcome};

use crate::common::*;

fn declaration() -> SuiteDeclaration {
    SuiteDeclaration::suite(
        "All",
        vec![
            TestClass::new("MenuTest").test("t1", |_| Ok(())).test("t2", |_| Ok(())),
            TestClass::new("ServerTest").test_requiring("t3", &["server"], |context| {
                let port = context.requirement("server").and_then(|server| server["port"].as_u64());
                assert_eq!(port, Some(8080));
                Ok(())
            }),
        ],
    )
}

fn configurations(files: &[(&str, &str)]) -> (tempfile::TempDir, SuiteConfiguration) {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    let configuration = SuiteConfiguration::load(dir.path()).unwrap();
    (dir, configuration)
}

#[test]
fn test_every_declared_test_covered() {
    let (_dir, configuration) = configurations(&[
        ("a.jsonc", r#"{ /* menus only */ "filters": { "include": ["^MenuTest::"] } }"#),
        ("b.json", r#"{ "requirements": { "server": { "port": 8080 } }, "filters": { "exclude": ["::t2$"] } }"#),
    ]);

    let suite = RedDeerSuite::new(&declaration(), &configuration).with_listener(LoggingListener);
    let names: Vec<&str> = suite.runners().iter().map(Runner::name).collect();
    assert_eq!(names, vec!["a", "b"]);

    let summary = suite.run();
    assert!(summary.is_success());
    assert_eq!(summary.passed(), 4);
    assert_eq!(summary.not_executed(), 0);
}

#[test]
fn test_coverage_gap_is_reported() {
    let (_dir, configuration) = configurations(&[
        ("a.json", r#"{ "filters": { "include": ["::t1$"] } }"#),
        ("b.json", r#"{ "filters": { "include": ["::t1$"] } }"#),
    ]);

    let suite = RedDeerSuite::new(&declaration(), &configuration);
    let last = suite.runners().last().unwrap();
    assert_eq!(last.name(), "Tests without execution");
    let missing: Vec<String> = last.test_ids().iter().map(ToString::to_string).collect();
    assert_eq!(missing, vec!["MenuTest::t2", "ServerTest::t3"]);

    let summary = suite.run();
    assert!(summary.is_success());
    assert_eq!(summary.passed(), 2);
    assert_eq!(summary.not_executed(), 2);
    assert!(
        summary
            .results
            .iter()
            .filter(|result| result.outcome == TestOutcome::NotExecuted)
            .all(|result| result.runner == "Tests without execution")
    );
}

#[test]
fn test_ui_lookups_as_test_bodies() {
    let fixture = Fixture::workbench();
    let handle = fixture.handle.clone();
    let selected = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&selected);

    let class = TestClass::new("WorkbenchTest")
        .test("save", move |_| {
            let lookup = MenuLookup::new(handle.clone());
            let top = lookup.active_shell_top_menu_items()?;
            let save = lookup.look_for(&top, ["File", "Save"])?;
            MenuItemHandler::new(handle.clone()).select(save)?;
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
        .test("missing", {
            let handle = fixture.handle.clone();
            move |_| {
                let lookup = MenuLookup::new(handle.clone());
                let top = lookup.active_shell_top_menu_items()?;
                lookup.look_for(&top, ["File", "Print"]).map(|_| ())
            }
        });

    let configuration = SuiteConfiguration::from_configurations(vec![
        RunConfiguration::new("first"),
        RunConfiguration::new("second"),
    ])
    .unwrap();
    let summary = RedDeerSuite::new(&class.into(), &configuration).run();

    assert_eq!(summary.passed(), 2);
    assert_eq!(summary.failed(), 2);
    assert_eq!(selected.load(Ordering::SeqCst), 2);
    assert_eq!(fixture.ids.save_count(), 2);
    match &summary.results[1].outcome {
        TestOutcome::Failed(reason) => assert!(reason.contains("Print"), "{reason}"),
        other => panic!("unexpected outcome: {other:?}"),
    }
}
