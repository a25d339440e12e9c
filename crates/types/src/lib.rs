//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary shared by every part of the runner.
//! All types are pure data with no external dependencies, so they can be
//! used from game logic, renderers, and tests alike.
//!
//! # Input vocabulary
//!
//! [`Input`] is the closed set of events a graphics module may produce and
//! a game module must accept. `Input::Exit` is the dedicated terminal
//! value a backend maps its platform close/quit signal to; it is distinct
//! from `Back` and `Restart`.
//!
//! # Entity classification
//!
//! [`EntityKind`] is the closed set of cell classifications a grid can
//! hold. Cells carry no behavior; a kind is only meaningful relative to
//! the cell's position in the owning grid.

/// Default grid width for games that build their own layout (cells).
pub const DEFAULT_GRID_WIDTH: usize = 20;

/// Default grid height for games that build their own layout (cells).
pub const DEFAULT_GRID_HEIGHT: usize = 20;

/// Frame pacing interval for the host loop in milliseconds (~60 FPS).
pub const FRAME_MS: u64 = 16;

/// One input event, as produced by a graphics module.
///
/// `None` means "nothing pending" and must be a no-op for every game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Back,
    SwitchGame,
    SwitchGraphics,
    Restart,
    Exit,
    Menu,
    Escape,
    None,
}

impl Input {
    /// Parse an input from its lowercase name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Input::Up),
            "down" => Some(Input::Down),
            "left" => Some(Input::Left),
            "right" => Some(Input::Right),
            "enter" => Some(Input::Enter),
            "back" => Some(Input::Back),
            "switchgame" => Some(Input::SwitchGame),
            "switchgraphics" => Some(Input::SwitchGraphics),
            "restart" => Some(Input::Restart),
            "exit" => Some(Input::Exit),
            "menu" => Some(Input::Menu),
            "escape" => Some(Input::Escape),
            "none" => Some(Input::None),
            _ => None,
        }
    }

    /// Lowercase name, for logs and diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Input::Up => "up",
            Input::Down => "down",
            Input::Left => "left",
            Input::Right => "right",
            Input::Enter => "enter",
            Input::Back => "back",
            Input::SwitchGame => "switchgame",
            Input::SwitchGraphics => "switchgraphics",
            Input::Restart => "restart",
            Input::Exit => "exit",
            Input::Menu => "menu",
            Input::Escape => "escape",
            Input::None => "none",
        }
    }

    /// Whether this input is one of the four unit directions.
    pub fn is_direction(&self) -> bool {
        matches!(self, Input::Up | Input::Down | Input::Left | Input::Right)
    }

    /// Unit direction vector `(dx, dy)` for directional inputs.
    ///
    /// `y` grows downward, matching grid coordinates.
    pub fn direction(&self) -> Option<(i32, i32)> {
        match self {
            Input::Up => Some((0, -1)),
            Input::Down => Some((0, 1)),
            Input::Left => Some((-1, 0)),
            Input::Right => Some((1, 0)),
            _ => None,
        }
    }

    /// The opposite of a directional input (used for reversal guards).
    pub fn opposite(&self) -> Option<Input> {
        match self {
            Input::Up => Some(Input::Down),
            Input::Down => Some(Input::Up),
            Input::Left => Some(Input::Right),
            Input::Right => Some(Input::Left),
            _ => None,
        }
    }
}

/// Classification of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntityKind {
    #[default]
    Empty,
    Wall,
    Player,
    Enemy,
    Collectible,
    LargeCollectible,
    Projectile,
    Hidden,
    Border,
    PlayerHead,
    PlayerBody,
}

impl EntityKind {
    /// Map one level-source character to its kind.
    ///
    /// Unknown characters (including space) map to `Empty`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcade_types::EntityKind;
    ///
    /// assert_eq!(EntityKind::from_level_char('#'), EntityKind::Wall);
    /// assert_eq!(EntityKind::from_level_char('B'), EntityKind::Collectible);
    /// assert_eq!(EntityKind::from_level_char(' '), EntityKind::Empty);
    /// assert_eq!(EntityKind::from_level_char('z'), EntityKind::Empty);
    /// ```
    pub fn from_level_char(c: char) -> Self {
        match c {
            '#' => EntityKind::Wall,
            'P' => EntityKind::Player,
            'E' => EntityKind::Enemy,
            'B' => EntityKind::Collectible,
            'O' => EntityKind::LargeCollectible,
            'X' => EntityKind::Projectile,
            '?' => EntityKind::Hidden,
            '|' => EntityKind::Border,
            _ => EntityKind::Empty,
        }
    }

    /// Whether a moving actor may enter a cell of this kind.
    pub fn is_walkable(&self) -> bool {
        !matches!(self, EntityKind::Wall | EntityKind::Border)
    }
}

/// The two pluggable slots in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Game,
    Graphics,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Game => "game",
            Role::Graphics => "graphics",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_round_trips_through_names() {
        for input in [
            Input::Up,
            Input::Down,
            Input::Left,
            Input::Right,
            Input::Enter,
            Input::Back,
            Input::SwitchGame,
            Input::SwitchGraphics,
            Input::Restart,
            Input::Exit,
            Input::Menu,
            Input::Escape,
            Input::None,
        ] {
            assert_eq!(Input::from_str(input.as_str()), Some(input));
        }
        assert_eq!(Input::from_str("bogus"), None);
    }

    #[test]
    fn direction_vectors_are_unit_length() {
        assert_eq!(Input::Up.direction(), Some((0, -1)));
        assert_eq!(Input::Down.direction(), Some((0, 1)));
        assert_eq!(Input::Left.direction(), Some((-1, 0)));
        assert_eq!(Input::Right.direction(), Some((1, 0)));
        assert_eq!(Input::Enter.direction(), None);
    }

    #[test]
    fn opposites_pair_up() {
        assert_eq!(Input::Up.opposite(), Some(Input::Down));
        assert_eq!(Input::Left.opposite(), Some(Input::Right));
        assert_eq!(Input::Restart.opposite(), None);
    }

    #[test]
    fn level_chars_cover_the_documented_alphabet() {
        assert_eq!(EntityKind::from_level_char('#'), EntityKind::Wall);
        assert_eq!(EntityKind::from_level_char('P'), EntityKind::Player);
        assert_eq!(EntityKind::from_level_char('E'), EntityKind::Enemy);
        assert_eq!(EntityKind::from_level_char('B'), EntityKind::Collectible);
        assert_eq!(EntityKind::from_level_char('X'), EntityKind::Projectile);
        assert_eq!(EntityKind::from_level_char('?'), EntityKind::Hidden);
        assert_eq!(EntityKind::from_level_char('|'), EntityKind::Border);
    }
}
