//! Graphics module contract.

use arcade_types::Input;

use crate::grid::Grid;

/// What any rendering backend must expose to the session driver.
pub trait Graphics {
    /// Poll for one pending input without blocking.
    ///
    /// Returns `Input::None` when nothing recognized is pending. A
    /// platform close/quit signal must map to `Input::Exit`, distinct
    /// from in-game `Back` or `Restart`.
    fn poll_input(&mut self) -> Input;

    /// Render one frame from a grid snapshot.
    ///
    /// The snapshot is read-only; HUD fields are shown only when their
    /// `has_*()` predicate holds. An empty grid (zero rows or columns)
    /// must render an error state rather than crash.
    fn draw(&mut self, snapshot: &Grid);

    fn name(&self) -> &str;
}
