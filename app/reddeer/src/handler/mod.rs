//! Widget handlers: thin bridged operations on single widgets.
//!
//! Each handler owns a [`crate::ui::UiHandle`] and performs one blocking
//! call into the UI thread per operation.
//!
//! - [`WidgetHandler`] - text, class name and raw event posting
//! - [`ToolItemHandler`] - dropdown clicks on tool items
//! - [`MenuItemHandler`] - selecting menu items and running actions

mod menu_item;
mod tool_item;
mod widget;

pub use menu_item::MenuItemHandler;
pub use tool_item::ToolItemHandler;
pub use widget::WidgetHandler;
