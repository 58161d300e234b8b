//! Test framework for RedDeer integration tests.
//!
//! # Example
//!
//! ```rust,ignore
//! let fixture = Fixture::workbench();
//! let lookup = fixture.menu_lookup();
//! let top = lookup.active_shell_top_menu_items().unwrap();
//! let save = lookup.look_for(&top, ["File", "Save"]).unwrap();
//! assert_eq!(save, fixture.ids.save);
//! ```

mod fixture;
mod workbench;

pub use fixture::Fixture;
pub use workbench::{WorkbenchIds, build_workbench};
