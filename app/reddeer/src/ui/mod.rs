//! The UI layer: the single-threaded toolkit model and the bridge to it.
//!
//! - [`Display`]: widget arena, contribution model, events
//! - [`UiThread`] / [`UiHandle`]: running code on the UI thread
//! - [`WidgetTreeReader`] / [`EventInjector`]: the seams the lookup engine uses

mod bridge;
mod contribution;
mod display;
mod event;
pub(crate) mod testing;
mod traits;
mod widget;

pub use bridge::{UiHandle, UiThread};
pub use contribution::{ContributionId, ContributionItem, ContributionKind, Part, PartId};
pub use display::Display;
pub use event::{Event, EventDetail, EventKind, FilterId, Listener};
pub use traits::{EventInjector, WidgetTreeReader};
pub use widget::{MenuStyle, Widget, WidgetData, WidgetId, WidgetKind};
