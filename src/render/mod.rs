//! Drawing. `scene` decides what goes on screen, `painter` puts it there.

pub mod painter;
pub mod scene;
pub mod theme;

pub use painter::paint;
pub use scene::{compose, Align, DrawCommand};
pub use theme::Theme;
