pub mod controls;
pub mod pointer;

pub use controls::{wire_slider, SliderBinding};
pub use pointer::{wire_pointer_handlers, PointerWiring, Redraw};
