//! Concrete game modules
//!
//! Every game here lives behind the [`Game`] contract and is reachable
//! only through its factory entry point; the host never names a concrete
//! game type. [`register_builtin_games`] wires the factories into a
//! registry under their unit identifiers.
//!
//! [`Game`]: arcade_core::Game

pub mod pacman;
pub mod snake;

pub use pacman::{Pacman, PacmanConfig};
pub use snake::{Snake, SnakeConfig};

use arcade_core::{Game, Registry};

/// Factory entry point for the growing-snake game.
pub fn create_snake() -> Option<Box<dyn Game>> {
    Some(Box::new(Snake::new()))
}

/// Factory entry point for the nibbler variant (snake with obstacles).
pub fn create_nibbler() -> Option<Box<dyn Game>> {
    Some(Box::new(Snake::nibbler()))
}

/// Factory entry point for the maze-chase game.
pub fn create_pacman() -> Option<Box<dyn Game>> {
    Some(Box::new(Pacman::new()))
}

/// Register every built-in game unit, in swap-rotation order.
pub fn register_builtin_games(registry: &mut Registry) {
    registry.register_game("snake", Box::new(create_snake));
    registry.register_game("nibbler", Box::new(create_nibbler));
    registry.register_game("pacman", Box::new(create_pacman));
}
