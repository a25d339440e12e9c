//! Maze-chase game
//!
//! The level comes from the standard text format: a built-in layout by
//! default, or an external file that falls back to the built-in one with
//! a warning when unreadable. The grid keeps the walls and remaining
//! collectibles; the player and ghosts are tracked separately and stamped
//! onto the snapshot that `map` hands out.
//!
//! The player auto-repeats the last direction on its own step timer.
//! Ghosts run a per-ghost state machine (scatter, chase, frightened,
//! eaten) on a faster timer. Clearing every collectible wins; ghost
//! contact costs a life unless the ghost is frightened, in which case it
//! is worth points and goes home.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use arcade_core::{Game, Grid, SimpleRng};
use arcade_types::{EntityKind, Input};

const LEVEL_1: &str = "\
###################
#OBBBBBBBBBBBBBBBO#
#B#B#B#B#B#B#B#B#B#
#BBBBBBBBBBBBBBBBB#
#B#B#B#EBE#B#B#B#B#
#BBBBBB#EE#BBBBBBB#
#B#B#B#####B#B#B#B#
#BBBBBBBBBBBBBBBBB#
#B#B#B#B#B#B#B#B#B#
#OBBBBBBBPBBBBBBBO#
###################";

const PELLET_POINTS: u32 = 10;
const POWER_PELLET_POINTS: u32 = 50;
const GHOST_POINTS: u32 = 200;
const STARTING_LIVES: u32 = 3;

const SCATTER_SPAN: Duration = Duration::from_secs(7);
const CHASE_SPAN: Duration = Duration::from_secs(5);
const EATEN_SPAN: Duration = Duration::from_secs(5);

const GAME_OVER_MESSAGE: &str = "Game over - press R to restart";
const VICTORY_MESSAGE: &str = "Victory! Press R to restart";
const FALLBACK_NOTICE: &str = "level file unavailable, using built-in layout";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GhostState {
    Scatter,
    Chase,
    Frightened,
    /// Sitting at home after being eaten, waiting to rejoin.
    Eaten,
}

#[derive(Debug, Clone)]
struct Ghost {
    pos: (usize, usize),
    home: (usize, usize),
    dir: (i32, i32),
    state: GhostState,
    since: Instant,
}

impl Ghost {
    fn at_home(home: (usize, usize)) -> Self {
        Self {
            pos: home,
            home,
            dir: (0, 0),
            state: GhostState::Scatter,
            since: Instant::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PacmanConfig {
    /// Auto-repeat interval for player movement.
    pub player_step: Duration,
    pub ghost_step: Duration,
    /// How long a power collectible keeps ghosts frightened.
    pub fright_span: Duration,
    /// Fixed RNG seed; `None` seeds from the clock.
    pub seed: Option<u32>,
    /// External level file; the built-in layout is used when `None` or
    /// unreadable.
    pub level_path: Option<PathBuf>,
}

impl Default for PacmanConfig {
    fn default() -> Self {
        Self {
            player_step: Duration::from_millis(500),
            ghost_step: Duration::from_millis(300),
            fright_span: Duration::from_secs(10),
            seed: None,
            level_path: None,
        }
    }
}

pub struct Pacman {
    config: PacmanConfig,
    grid: Grid,
    player: (usize, usize),
    spawn: (usize, usize),
    facing: (i32, i32),
    pending: Option<(i32, i32)>,
    ghosts: Vec<Ghost>,
    rng: SimpleRng,
    last_player_step: Instant,
    last_ghost_step: Instant,
    notice: String,
    game_over: bool,
    game_won: bool,
}

impl Pacman {
    pub fn new() -> Self {
        Self::with_config(PacmanConfig::default())
    }

    pub fn with_config(config: PacmanConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SimpleRng::new(seed),
            None => SimpleRng::from_clock(),
        };
        let mut pacman = Self {
            config,
            grid: Grid::default(),
            player: (0, 0),
            spawn: (0, 0),
            facing: (0, 0),
            pending: None,
            ghosts: Vec::new(),
            rng,
            last_player_step: Instant::now(),
            last_ghost_step: Instant::now(),
            notice: String::new(),
            game_over: false,
            game_won: false,
        };
        pacman.init_map();
        pacman
    }

    /// Load the level layout and pull the player spawn and ghost homes
    /// out of it, leaving those cells empty.
    fn load_level(&mut self) {
        self.notice.clear();
        let mut loaded = false;
        if let Some(path) = self.config.level_path.clone() {
            match self.grid.load_from_path(&path) {
                Ok(()) => loaded = true,
                Err(err) => {
                    warn!(error = %err, "falling back to the built-in layout");
                    self.notice = FALLBACK_NOTICE.to_string();
                }
            }
        }
        if !loaded {
            self.grid.load_from_str(LEVEL_1);
        }

        let mut spawn = (1, 1);
        let mut homes = Vec::new();
        for cell in self.grid.cells() {
            match cell.kind {
                EntityKind::Player => spawn = (cell.x, cell.y),
                EntityKind::Enemy => homes.push((cell.x, cell.y)),
                _ => {}
            }
        }
        self.grid.set_kind(spawn.0, spawn.1, EntityKind::Empty);
        for &(x, y) in &homes {
            self.grid.set_kind(x, y, EntityKind::Empty);
        }

        self.spawn = spawn;
        self.ghosts = homes.into_iter().map(Ghost::at_home).collect();
    }

    /// Put every actor back on its start cell without touching the
    /// remaining collectibles.
    fn reset_positions(&mut self) {
        self.player = self.spawn;
        self.facing = (0, 0);
        self.pending = None;
        for ghost in &mut self.ghosts {
            *ghost = Ghost::at_home(ghost.home);
        }
        self.last_player_step = Instant::now();
        self.last_ghost_step = Instant::now();
    }

    fn walkable(&self, from: (usize, usize), dir: (i32, i32)) -> Option<(usize, usize)> {
        let x = from.0 as i32 + dir.0;
        let y = from.1 as i32 + dir.1;
        if x < 0 || y < 0 {
            return None;
        }
        let pos = (x as usize, y as usize);
        match self.grid.kind(pos.0, pos.1) {
            Some(kind) if kind.is_walkable() => Some(pos),
            _ => None,
        }
    }

    fn pellets_remain(&self) -> bool {
        self.grid.cells().iter().any(|c| {
            matches!(
                c.kind,
                EntityKind::Collectible | EntityKind::LargeCollectible
            )
        })
    }

    fn eat_cell(&mut self, pos: (usize, usize)) {
        match self.grid.kind(pos.0, pos.1) {
            Some(EntityKind::Collectible) => {
                self.grid.set_kind(pos.0, pos.1, EntityKind::Empty);
                self.grid.set_score(self.grid.score() + PELLET_POINTS);
            }
            Some(EntityKind::LargeCollectible) => {
                self.grid.set_kind(pos.0, pos.1, EntityKind::Empty);
                self.grid.set_score(self.grid.score() + POWER_PELLET_POINTS);
                let now = Instant::now();
                for ghost in &mut self.ghosts {
                    if ghost.state != GhostState::Eaten {
                        ghost.state = GhostState::Frightened;
                        ghost.since = now;
                    }
                }
                debug!("power collectible eaten, ghosts frightened");
            }
            _ => return,
        }
        if !self.pellets_remain() {
            self.game_won = true;
        }
    }

    fn player_phase(&mut self) {
        if let Some(pending) = self.pending {
            if self.walkable(self.player, pending).is_some() {
                self.facing = pending;
                self.pending = None;
            }
        }
        if self.facing == (0, 0) {
            return;
        }
        if let Some(next) = self.walkable(self.player, self.facing) {
            self.player = next;
            self.eat_cell(next);
        }
    }

    fn lose_life(&mut self) {
        let lives = self.grid.lives().saturating_sub(1);
        self.grid.set_lives(lives);
        debug!(lives, "ghost contact");
        if lives == 0 {
            self.game_over = true;
        } else {
            self.reset_positions();
        }
    }

    fn resolve_collisions(&mut self) {
        for i in 0..self.ghosts.len() {
            if self.ghosts[i].pos != self.player {
                continue;
            }
            match self.ghosts[i].state {
                GhostState::Frightened => {
                    let home = self.ghosts[i].home;
                    self.ghosts[i].pos = home;
                    self.ghosts[i].dir = (0, 0);
                    self.ghosts[i].state = GhostState::Eaten;
                    self.ghosts[i].since = Instant::now();
                    self.grid.set_score(self.grid.score() + GHOST_POINTS);
                }
                GhostState::Eaten => {}
                _ => {
                    self.lose_life();
                    return;
                }
            }
        }
    }
}

fn open_neighbors(grid: &Grid, pos: (usize, usize)) -> Vec<((usize, usize), (i32, i32))> {
    let mut out = Vec::new();
    for dir in [(0, -1), (0, 1), (-1, 0), (1, 0)] {
        let x = pos.0 as i32 + dir.0;
        let y = pos.1 as i32 + dir.1;
        if x < 0 || y < 0 {
            continue;
        }
        if let Some(kind) = grid.kind(x as usize, y as usize) {
            if kind.is_walkable() {
                out.push(((x as usize, y as usize), dir));
            }
        }
    }
    out
}

fn distance(a: (usize, usize), b: (usize, usize)) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

fn tick_ghost_state(ghost: &mut Ghost, fright_span: Duration, now: Instant) {
    let (span, next) = match ghost.state {
        GhostState::Scatter => (SCATTER_SPAN, GhostState::Chase),
        GhostState::Chase => (CHASE_SPAN, GhostState::Scatter),
        GhostState::Frightened => (fright_span, GhostState::Scatter),
        GhostState::Eaten => (EATEN_SPAN, GhostState::Scatter),
    };
    if now.duration_since(ghost.since) >= span {
        ghost.state = next;
        ghost.since = now;
    }
}

fn step_ghost(grid: &Grid, ghost: &mut Ghost, player: (usize, usize), rng: &mut SimpleRng) {
    if ghost.state == GhostState::Eaten {
        return;
    }
    let options = open_neighbors(grid, ghost.pos);
    if options.is_empty() {
        return;
    }

    let pick = match ghost.state {
        // Greedy pursuit: shortest grid distance to the player.
        GhostState::Chase => options
            .iter()
            .min_by_key(|(pos, _)| distance(*pos, player))
            .copied(),
        // Flee: longest grid distance from the player.
        GhostState::Frightened => options
            .iter()
            .max_by_key(|(pos, _)| distance(*pos, player))
            .copied(),
        _ => {
            // Random walk, avoiding an immediate reversal when any other
            // option exists.
            let back = (-ghost.dir.0, -ghost.dir.1);
            let forward: Vec<_> = options.iter().filter(|(_, d)| *d != back).copied().collect();
            let pool = if forward.is_empty() { &options } else { &forward };
            let i = rng.next_range(pool.len() as u32) as usize;
            Some(pool[i])
        }
    };

    if let Some((pos, dir)) = pick {
        ghost.pos = pos;
        ghost.dir = dir;
    }
}

impl Default for Pacman {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Pacman {
    fn init_map(&mut self) {
        self.load_level();
        self.reset();
    }

    fn reset(&mut self) {
        self.load_level();
        self.grid.set_score(0);
        self.grid.set_lives(STARTING_LIVES);
        self.game_over = false;
        self.game_won = false;
        self.reset_positions();
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
            self.pending = Some(dir);
        }

        let now = Instant::now();
        let fright_span = self.config.fright_span;
        for ghost in &mut self.ghosts {
            tick_ghost_state(ghost, fright_span, now);
        }

        if now.duration_since(self.last_player_step) >= self.config.player_step {
            self.last_player_step = now;
            self.player_phase();
            self.resolve_collisions();
            if self.game_over || self.game_won {
                return;
            }
        }

        if now.duration_since(self.last_ghost_step) >= self.config.ghost_step {
            self.last_ghost_step = now;
            let player = self.player;
            for ghost in &mut self.ghosts {
                step_ghost(&self.grid, ghost, player, &mut self.rng);
            }
            self.resolve_collisions();
        }
    }

    fn map(&self) -> Grid {
        let mut snapshot = self.grid.clone();
        for ghost in &self.ghosts {
            if ghost.state != GhostState::Eaten {
                snapshot.set_kind(ghost.pos.0, ghost.pos.1, EntityKind::Enemy);
            }
        }
        snapshot.set_kind(self.player.0, self.player.1, EntityKind::Player);

        snapshot.set_game_over(self.game_over || self.game_won);
        snapshot.set_flag("VICTORY", self.game_won);
        if self.game_won {
            snapshot.set_message(VICTORY_MESSAGE);
        } else if self.game_over {
            snapshot.set_message(GAME_OVER_MESSAGE);
        } else {
            snapshot.set_message(self.notice.clone());
        }
        snapshot
    }

    fn is_game_over(&self) -> bool {
        self.game_over || self.game_won
    }

    fn score(&self) -> u32 {
        self.grid.score()
    }

    fn name(&self) -> &str {
        "pacman"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> PacmanConfig {
        PacmanConfig {
            player_step: Duration::ZERO,
            ghost_step: Duration::ZERO,
            seed: Some(7),
            ..PacmanConfig::default()
        }
    }

    fn with_level(level: &str) -> Pacman {
        let mut pacman = Pacman::with_config(test_config());
        pacman.grid.load_from_str(level);
        // Re-run extraction against the injected layout.
        let mut spawn = (1, 1);
        let mut homes = Vec::new();
        for cell in pacman.grid.cells() {
            match cell.kind {
                EntityKind::Player => spawn = (cell.x, cell.y),
                EntityKind::Enemy => homes.push((cell.x, cell.y)),
                _ => {}
            }
        }
        pacman.grid.set_kind(spawn.0, spawn.1, EntityKind::Empty);
        for &(x, y) in &homes {
            pacman.grid.set_kind(x, y, EntityKind::Empty);
        }
        pacman.spawn = spawn;
        pacman.ghosts = homes.into_iter().map(Ghost::at_home).collect();
        pacman.reset_positions();
        pacman.grid.set_lives(STARTING_LIVES);
        pacman
    }

    #[test]
    fn built_in_level_has_the_expected_shape() {
        let pacman = Pacman::with_config(test_config());
        assert_eq!(pacman.grid.width(), 19);
        assert_eq!(pacman.grid.height(), 11);
        assert_eq!(pacman.spawn, (9, 9));
        assert_eq!(pacman.ghosts.len(), 4);
        assert_eq!(pacman.map().lives(), STARTING_LIVES);
    }

    #[test]
    fn eating_a_pellet_scores_and_clears_the_cell() {
        let mut pacman = Pacman::with_config(test_config());
        pacman.update(Input::Right);
        assert_eq!(pacman.score(), PELLET_POINTS);
        assert_eq!(pacman.player, (10, 9));
        assert_eq!(pacman.grid.kind(10, 9), Some(EntityKind::Empty));
    }

    #[test]
    fn wall_input_leaves_the_player_in_place_without_scoring() {
        let mut pacman = Pacman::with_config(test_config());
        // The spawn sits on the bottom corridor; Down runs into the wall.
        pacman.update(Input::Down);
        assert_eq!(pacman.player, (9, 9));
        assert_eq!(pacman.score(), 0);
    }

    #[test]
    fn player_auto_repeats_the_last_direction() {
        let mut pacman = Pacman::with_config(test_config());
        pacman.update(Input::Right);
        pacman.update(Input::None);
        assert_eq!(pacman.player, (11, 9));
        assert_eq!(pacman.score(), 2 * PELLET_POINTS);
    }

    #[test]
    fn clearing_every_collectible_wins() {
        let mut pacman = with_level("####\n#PB#\n####");
        pacman.update(Input::Right);
        assert!(pacman.is_game_over());
        let map = pacman.map();
        assert!(map.flag("VICTORY"));
        assert_eq!(map.message(), VICTORY_MESSAGE);
    }

    #[test]
    fn frightened_ghost_is_worth_points_and_goes_home() {
        let mut pacman = with_level("######\n#POEB#\n######");
        // Power collectible first; the ghost turns frightened and flees.
        pacman.update(Input::Right);
        assert_eq!(pacman.ghosts[0].state, GhostState::Frightened);
        assert_eq!(pacman.score(), POWER_PELLET_POINTS);

        // The only open cell left for the fleeing ghost is the player's.
        pacman.update(Input::Right);
        assert_eq!(pacman.ghosts[0].state, GhostState::Eaten);
        assert_eq!(pacman.ghosts[0].pos, pacman.ghosts[0].home);
        assert_eq!(pacman.score(), POWER_PELLET_POINTS + GHOST_POINTS);
    }

    #[test]
    fn ghost_contact_costs_a_life_and_resets_positions() {
        let mut pacman = with_level("#####\n#P E#\n#####");
        pacman.update(Input::None);
        pacman.update(Input::None);
        assert_eq!(pacman.map().lives(), STARTING_LIVES - 1);
        assert_eq!(pacman.player, pacman.spawn);
        assert_eq!(pacman.ghosts[0].pos, pacman.ghosts[0].home);
    }

    #[test]
    fn game_over_gates_everything_but_restart() {
        let mut pacman = with_level("#####\n#P E#\n#####");
        pacman.grid.set_lives(1);
        pacman.update(Input::None);
        pacman.update(Input::None);
        assert!(pacman.is_game_over());
        assert_eq!(pacman.map().message(), GAME_OVER_MESSAGE);

        let before = pacman.player;
        pacman.update(Input::Right);
        assert_eq!(pacman.player, before);

        pacman.update(Input::Restart);
        assert!(!pacman.is_game_over());
        assert_eq!(pacman.map().lives(), STARTING_LIVES);
        assert_eq!(pacman.score(), 0);
    }

    #[test]
    fn missing_level_file_falls_back_to_built_in() {
        let mut config = test_config();
        config.level_path = Some(PathBuf::from("/nonexistent/level.map"));
        let pacman = Pacman::with_config(config);
        assert_eq!(pacman.grid.width(), 19);
        let map = pacman.map();
        assert!(map.has_message());
        assert_eq!(map.message(), FALLBACK_NOTICE);
    }
}
