//! View layer: map and list collaborators and the sync that drives them.

pub mod console;
pub mod list;
pub mod map;
pub mod sync;

pub use console::{Bounds, ConsoleList, ConsoleMap};
pub use list::{DetailRow, ListEntry, ListView};
pub use map::{MapView, MarkerHandle, Padding};
pub use sync::{popup_class, popup_content, ViewSync};
