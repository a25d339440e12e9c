//! Growing-snake game
//!
//! One engine serves two registered units: `snake` plays on an open
//! bordered field, `nibbler` adds interior wall segments. The snake
//! advances one cell per movement tick, buffering the latest direction
//! input between ticks and rejecting direct reversals. Eating a
//! collectible grows the body and speeds up the tick as levels pass.
//!
//! The driver calls `update` every loop iteration; movement is gated on
//! an internal step timer so play speed is independent of frame rate.

use std::cmp;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::debug;

use arcade_core::{Game, Grid, SimpleRng};
use arcade_types::{EntityKind, Input, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

const FOOD_POINTS: u32 = 10;
const POINTS_PER_LEVEL: u32 = 50;
const BASE_STEP_INTERVAL: Duration = Duration::from_millis(200);
const SPEED_UP_PER_LEVEL: Duration = Duration::from_millis(10);
const MIN_STEP_INTERVAL: Duration = Duration::from_millis(50);

const GAME_OVER_MESSAGE: &str = "Game over - press R to restart";
const VICTORY_MESSAGE: &str = "Victory! Press R to restart";

/// Tuning knobs, mostly exercised by tests; `new`/`nibbler` use the
/// defaults.
#[derive(Debug, Clone)]
pub struct SnakeConfig {
    pub width: usize,
    pub height: usize,
    pub initial_length: usize,
    /// Movement tick at level one. `Duration::ZERO` makes every `update`
    /// a movement tick.
    pub step_interval: Duration,
    /// Interior wall segments (the nibbler layout).
    pub maze: bool,
    /// Fixed RNG seed; `None` seeds from the clock.
    pub seed: Option<u32>,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            initial_length: 4,
            step_interval: BASE_STEP_INTERVAL,
            maze: false,
            seed: None,
        }
    }
}

pub struct Snake {
    config: SnakeConfig,
    grid: Grid,
    walls: Vec<(usize, usize)>,
    /// Front is the head.
    body: VecDeque<(usize, usize)>,
    direction: (i32, i32),
    pending: (i32, i32),
    food: (usize, usize),
    rng: SimpleRng,
    level: u32,
    step_interval: Duration,
    last_step: Instant,
    game_over: bool,
    game_won: bool,
}

impl Snake {
    pub fn new() -> Self {
        Self::with_config(SnakeConfig::default())
    }

    pub fn nibbler() -> Self {
        Self::with_config(SnakeConfig {
            maze: true,
            ..SnakeConfig::default()
        })
    }

    pub fn with_config(config: SnakeConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SimpleRng::new(seed),
            None => SimpleRng::from_clock(),
        };
        let grid = Grid::new(1, config.width, config.height);
        let mut snake = Self {
            config,
            grid,
            walls: Vec::new(),
            body: VecDeque::new(),
            direction: (1, 0),
            pending: (1, 0),
            food: (0, 0),
            rng,
            level: 1,
            step_interval: Duration::ZERO,
            last_step: Instant::now(),
            game_over: false,
            game_won: false,
        };
        snake.init_map();
        snake
    }

    fn border_walls(width: usize, height: usize) -> Vec<(usize, usize)> {
        let mut walls = Vec::new();
        for x in 0..width {
            walls.push((x, 0));
            walls.push((x, height - 1));
        }
        for y in 1..height.saturating_sub(1) {
            walls.push((0, y));
            walls.push((width - 1, y));
        }
        walls
    }

    /// Interior wall segments, laid out in bands that leave the spawn row
    /// clear.
    fn maze_walls(width: usize, height: usize) -> Vec<(usize, usize)> {
        let spawn_row = height / 2;
        let mut walls = Vec::new();
        for y in (3..height.saturating_sub(3)).step_by(4) {
            if y == spawn_row {
                continue;
            }
            for x in (3..width.saturating_sub(4)).step_by(6) {
                for dx in 0..3 {
                    walls.push((x + dx, y));
                }
            }
        }
        walls
    }

    fn is_wall(&self, x: usize, y: usize) -> bool {
        x == 0
            || y == 0
            || x == self.config.width - 1
            || y == self.config.height - 1
            || self.walls.contains(&(x, y))
    }

    fn step_interval_for(&self, level: u32) -> Duration {
        let shave = SPEED_UP_PER_LEVEL.saturating_mul(level.saturating_sub(1));
        let floor = cmp::min(self.config.step_interval, MIN_STEP_INTERVAL);
        cmp::max(self.config.step_interval.saturating_sub(shave), floor)
    }

    fn spawn_body(&mut self) {
        let head = (self.config.width / 2, self.config.height / 2);
        self.body.clear();
        for i in 0..self.config.initial_length {
            self.body.push_back((head.0 - i, head.1));
        }
        self.direction = (1, 0);
        self.pending = (1, 0);
    }

    fn spawn_food(&mut self) {
        let attempts = self.config.width * self.config.height;
        for _ in 0..attempts {
            let x = self.rng.next_between(1, self.config.width as u32 - 2) as usize;
            let y = self.rng.next_between(1, self.config.height as u32 - 2) as usize;
            if !self.is_wall(x, y) && !self.body.contains(&(x, y)) {
                self.food = (x, y);
                return;
            }
        }
        // Random placement gave up; take the first free cell, if any.
        for y in 1..self.config.height - 1 {
            for x in 1..self.config.width - 1 {
                if !self.is_wall(x, y) && !self.body.contains(&(x, y)) {
                    self.food = (x, y);
                    return;
                }
            }
        }
        // The body covers the whole field.
        self.game_won = true;
    }

    fn advance(&mut self) {
        self.direction = self.pending;
        let head = self.body.front().copied().unwrap_or((0, 0));
        let nx = head.0 as i32 + self.direction.0;
        let ny = head.1 as i32 + self.direction.1;

        if nx < 0 || ny < 0 || nx as usize >= self.config.width || ny as usize >= self.config.height
        {
            self.game_over = true;
            return;
        }
        let next = (nx as usize, ny as usize);
        if self.is_wall(next.0, next.1) {
            debug!(x = next.0, y = next.1, "snake hit a wall");
            self.game_over = true;
            return;
        }

        let eating = next == self.food;
        if !eating {
            self.body.pop_back();
        }
        if self.body.contains(&next) {
            self.game_over = true;
            return;
        }
        self.body.push_front(next);

        if eating {
            let score = self.grid.score() + FOOD_POINTS;
            self.grid.set_score(score);
            let level = 1 + score / POINTS_PER_LEVEL;
            if level != self.level {
                self.level = level;
                self.step_interval = self.step_interval_for(level);
                debug!(level, "snake level up");
            }
            self.spawn_food();
        }
    }

    fn sync_grid(&mut self) {
        self.grid.reset();
        for &(x, y) in &self.walls {
            self.grid.set_kind(x, y, EntityKind::Wall);
        }
        for x in 0..self.config.width {
            self.grid.set_kind(x, 0, EntityKind::Border);
            self.grid.set_kind(x, self.config.height - 1, EntityKind::Border);
        }
        for y in 0..self.config.height {
            self.grid.set_kind(0, y, EntityKind::Border);
            self.grid.set_kind(self.config.width - 1, y, EntityKind::Border);
        }
        if !self.game_won {
            self.grid
                .set_kind(self.food.0, self.food.1, EntityKind::Collectible);
        }
        for (i, &(x, y)) in self.body.iter().enumerate() {
            let kind = if i == 0 {
                EntityKind::PlayerHead
            } else {
                EntityKind::PlayerBody
            };
            self.grid.set_kind(x, y, kind);
        }

        self.grid.set_level(self.level);
        self.grid.set_game_over(self.game_over || self.game_won);
        self.grid.set_flag("VICTORY", self.game_won);
        if self.game_won {
            self.grid.set_message(VICTORY_MESSAGE);
        } else if self.game_over {
            self.grid.set_message(GAME_OVER_MESSAGE);
        } else {
            self.grid.set_message("");
        }
    }

    #[cfg(test)]
    fn place_food(&mut self, x: usize, y: usize) {
        self.food = (x, y);
        self.sync_grid();
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Snake {
    fn init_map(&mut self) {
        self.walls = if self.config.maze {
            let mut walls = Self::maze_walls(self.config.width, self.config.height);
            walls.extend(Self::border_walls(self.config.width, self.config.height));
            walls
        } else {
            Self::border_walls(self.config.width, self.config.height)
        };
        self.reset();
    }

    fn reset(&mut self) {
        self.grid.set_score(0);
        self.level = 1;
        self.step_interval = self.step_interval_for(1);
        self.game_over = false;
        self.game_won = false;
        self.spawn_body();
        self.spawn_food();
        self.last_step = Instant::now();
        self.sync_grid();
    }

    fn update(&mut self, input: Input) {
        if input == Input::Restart {
            self.reset();
            return;
        }
        if self.game_over || self.game_won {
            return;
        }

        if let Some(dir) = input.direction() {
            // No direct reversal into the neck.
            if (dir.0 + self.direction.0, dir.1 + self.direction.1) != (0, 0) {
                self.pending = dir;
            }
        }

        if self.last_step.elapsed() >= self.step_interval {
            self.last_step = Instant::now();
            self.advance();
        }
        self.sync_grid();
    }

    fn map(&self) -> Grid {
        self.grid.clone()
    }

    fn is_game_over(&self) -> bool {
        self.game_over || self.game_won
    }

    fn score(&self) -> u32 {
        self.grid.score()
    }

    fn name(&self) -> &str {
        if self.config.maze {
            "nibbler"
        } else {
            "snake"
        }
    }
}
