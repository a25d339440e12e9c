//! Grid module - the shared playing-field model
//!
//! A [`Grid`] is a rectangular array of classified cells plus the HUD and
//! session fields a renderer may want to show (score, lives, time,
//! message, named flags). Exactly one grid is owned by each live game
//! instance; renderers only ever see a [`Clone`] snapshot of it, taken
//! once per frame.
//!
//! Coordinates: `(x, y)` with `x` in `0..width` (left to right) and `y`
//! in `0..height` (top to bottom). All access is bounds-checked; an
//! out-of-range lookup is a normal "absent" result, never an error.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use arcade_types::EntityKind;

use crate::error::LevelError;

/// One grid position and its entity classification.
///
/// Cells carry no behavior. The stored coordinates always match the
/// cell's position in the owning grid after any `reset` or level load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub kind: EntityKind,
}

impl Cell {
    pub fn new(x: usize, y: usize, kind: EntityKind) -> Self {
        Self { x, y, kind }
    }
}

/// The rectangular cell array plus HUD/session fields owned by a game.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    level: u32,
    width: usize,
    height: usize,
    /// Row-major storage: index = y * width + x.
    cells: Vec<Cell>,
    score: u32,
    high_score: u32,
    lives: u32,
    time_left: u32,
    message: String,
    game_over: bool,
    flags: HashMap<String, bool>,
}

impl Grid {
    /// Create a grid of the given dimensions, all cells empty.
    pub fn new(level: u32, width: usize, height: usize) -> Self {
        let mut grid = Self {
            level,
            width,
            height,
            cells: Vec::new(),
            score: 0,
            high_score: 0,
            lives: 0,
            time_left: 0,
            message: String::new(),
            game_over: false,
            flags: HashMap::new(),
        };
        grid.reset();
        grid
    }

    /// Reallocate the cell array to the configured dimensions, every cell
    /// empty and stamped with its own coordinates. Always succeeds.
    ///
    /// HUD fields are left untouched; they belong to the session, not the
    /// layout.
    pub fn reset(&mut self) {
        self.cells.clear();
        self.cells.reserve(self.width * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                self.cells.push(Cell::new(x, y, EntityKind::Empty));
            }
        }
    }

    /// Re-seed the layout from a textual level description.
    ///
    /// One line per row; recognized characters map through
    /// [`EntityKind::from_level_char`], anything else is empty. Rows may
    /// be ragged: the effective width is the widest row seen and shorter
    /// rows are padded with empty cells.
    pub fn load_from_str(&mut self, source: &str) {
        let rows: Vec<&str> = source.lines().collect();
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let height = rows.len();

        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.reserve(width * height);

        for (y, row) in rows.iter().enumerate() {
            let mut x = 0;
            for c in row.chars() {
                self.cells.push(Cell::new(x, y, EntityKind::from_level_char(c)));
                x += 1;
            }
            while x < width {
                self.cells.push(Cell::new(x, y, EntityKind::Empty));
                x += 1;
            }
        }
    }

    /// Re-seed the layout from a level file.
    ///
    /// Surfaces [`LevelError::SourceUnavailable`] if the file cannot be
    /// read; the grid is left unchanged in that case.
    pub fn load_from_path(&mut self, path: &Path) -> Result<(), LevelError> {
        let source = fs::read_to_string(path).map_err(|source| LevelError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_from_str(&source);
        Ok(())
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Bounds-checked cell lookup; `None` when out of range.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Kind at `(x, y)`, `None` when out of range.
    pub fn kind(&self, x: usize, y: usize) -> Option<EntityKind> {
        self.cell(x, y).map(|c| c.kind)
    }

    /// Set the kind at `(x, y)`. Returns false when out of range.
    pub fn set_kind(&mut self, x: usize, y: usize, kind: EntityKind) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i].kind = kind;
                true
            }
            None => false,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    // HUD/session fields. Each getter has a `has_*` companion so
    // heterogeneous games expose only the fields relevant to them.

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn set_level(&mut self, level: u32) {
        self.level = level;
    }

    pub fn has_level(&self) -> bool {
        self.level > 0
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn set_score(&mut self, score: u32) {
        self.score = score;
        if score > self.high_score {
            self.high_score = score;
        }
    }

    pub fn has_score(&self) -> bool {
        self.score > 0
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn has_high_score(&self) -> bool {
        self.high_score > 0
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn set_lives(&mut self, lives: u32) {
        self.lives = lives;
    }

    pub fn has_lives(&self) -> bool {
        self.lives > 0
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn set_time_left(&mut self, time_left: u32) {
        self.time_left = time_left;
    }

    pub fn has_time_left(&self) -> bool {
        self.time_left > 0
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn has_message(&self) -> bool {
        !self.message.is_empty()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn set_game_over(&mut self, game_over: bool) {
        self.game_over = game_over;
    }

    /// A named flag is "set" only when present and true.
    pub fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    pub fn set_flag(&mut self, name: impl Into<String>, value: bool) {
        self.flags.insert(name.into(), value);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}
