//! RedDeer: functional UI testing driven by matchers.
//!
//! Tests locate widgets and menu items by what they say, not by hardcoded
//! references. Every lookup runs on the single thread that owns the widget
//! tree, reached through [`ui::UiHandle`]. Declared tests are replicated
//! across run configurations by [`suite::RedDeerSuite`].
//!
//! ```ignore
//! use reddeer::prelude::*;
//!
//! let ui = UiThread::spawn()?;
//! let lookup = MenuLookup::new(ui.handle());
//! let top = lookup.active_shell_top_menu_items()?;
//! let save = lookup.look_for(&top, ["File", "Save"])?;
//! MenuItemHandler::new(ui.handle()).select(save)?;
//! ```

pub mod cli;
pub mod core;
pub mod handler;
pub mod logging;
pub mod lookup;
pub mod matcher;
pub mod suite;
pub mod ui;
pub mod wait;

pub use crate::core::{Error, Result, prelude};
