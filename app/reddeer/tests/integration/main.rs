//! Integration tests for RedDeer.
//!
//! These tests drive the public API only: a UI thread is spawned per test,
//! a small workbench is built on it, and lookups run from the test thread
//! through the bridge.
//!
//! ## Running Integration Tests
//!
//! ```bash
//! # Run all integration tests
//! cargo nextest run -p reddeer --test integration
//!
//! # Run specific test module
//! cargo nextest run -p reddeer --test integration -E 'test(/lookup__menu_bar/)'
//! ```
//!
//! ## Test Organization
//!
//! Tests follow the naming convention `<module>__<test_name>` to allow filtering by module:
//! - `lookup__*` - Menu and widget lookup tests
//! - `suite__*` - Suite replication tests

// Allow double-underscore naming for test modules (e.g., lookup__menu_bar)
#![allow(non_snake_case)]
// Relax clippy lints for integration tests - these are test utilities, not production code
#![allow(
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::redundant_clone,
    clippy::redundant_closure_for_method_calls,
    clippy::similar_names,
    clippy::uninlined_format_args,
    clippy::unwrap_used,
    clippy::wildcard_imports
)]

#[macro_use]
mod common;
mod framework;

// Lookup tests
mod lookup__context_menu;
mod lookup__menu_bar;
mod lookup__tool_item;
mod lookup__transient_shell;
mod lookup__view_menu;

// Suite tests
mod suite__expansion;
