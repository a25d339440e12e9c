//! Terminal graphics module
//!
//! The pipeline is framebuffer based: [`GridView`] maps a grid snapshot
//! into a styled character [`FrameBuffer`] (pure, unit-testable), and
//! [`TerminalRenderer`] diffs consecutive framebuffers and flushes only
//! the changed runs to the terminal. [`TermGraphics`] wires both, plus
//! the keyboard map, into the [`Graphics`] contract.
//!
//! [`Graphics`]: arcade_core::Graphics

pub mod fb;
pub mod graphics;
pub mod grid_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use graphics::TermGraphics;
pub use grid_view::{GridView, Theme, Tile, Viewport};
pub use renderer::TerminalRenderer;

use tracing::error;

use arcade_core::{Graphics, Registry};

/// Factory entry point for the terminal backend.
///
/// Returns `None` when the terminal cannot be put into raw mode, which
/// the loader reports as a failed load.
pub fn create_terminal_graphics() -> Option<Box<dyn Graphics>> {
    match TermGraphics::new() {
        Ok(graphics) => Some(Box::new(graphics)),
        Err(err) => {
            error!(error = %err, "terminal graphics init failed");
            None
        }
    }
}

/// Register the built-in graphics units.
pub fn register_builtin_graphics(registry: &mut Registry) {
    registry.register_graphics("terminal", Box::new(create_terminal_graphics));
}
