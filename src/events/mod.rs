mod lifecycle;
mod pointer;
mod scroll;

pub use lifecycle::{wire_page_lifecycle, wire_resize, ResizeWiring};
pub use pointer::wire_pointer;
pub use scroll::{wire_native_scroll, wire_wheel};
