pub mod controls;
pub mod keyboard;
pub mod lifecycle;

pub use controls::wire_controls;
pub use keyboard::wire_global_keydown;
pub use lifecycle::{wire_canvas_resize, wire_context_loss};
