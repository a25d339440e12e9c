//! Game module contract.

use arcade_types::Input;

use crate::grid::Grid;

/// What any game module must expose to the session driver.
///
/// A game owns exactly one [`Grid`], reacts to discrete input events, and
/// keeps all side effects inside that grid and its own score/lives/
/// game-over fields.
///
/// Games are free to rate-limit their own movement: the driver calls
/// [`update`](Game::update) every loop iteration and the game no-ops
/// internally until its declared step interval has elapsed.
pub trait Game {
    /// (Re)build the grid's static layout for the current level.
    ///
    /// Idempotent, and safe to call before any `update`.
    fn init_map(&mut self);

    /// Return the game to its initial playable state: score zero, initial
    /// entity placement, level one. Does not necessarily reallocate the
    /// grid.
    fn reset(&mut self);

    /// Advance by exactly one input event or time-slice tick.
    ///
    /// Must never panic for `Input::None`. While game-over (or won), all
    /// input except `Input::Restart` is ignored.
    fn update(&mut self, input: Input);

    /// A snapshot copy of the owned grid. The caller may mutate the
    /// returned value freely without affecting the game.
    fn map(&self) -> Grid;

    fn is_game_over(&self) -> bool;

    fn score(&self) -> u32;

    fn name(&self) -> &str;
}
