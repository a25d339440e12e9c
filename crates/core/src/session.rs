//! Session driver - the top-level input → update → draw loop
//!
//! One step = poll the graphics module for input, react (terminate, swap
//! a role, or feed the game), then hand the renderer a cloned snapshot
//! of the game's grid. The driver never calls into an unloaded role: a
//! missing game means no update and no draw, a missing graphics means no
//! input and no draw. Failed swaps leave the role unloaded and the
//! session keeps stepping.
//!
//! Pacing (frame sleep) is the host's job; `step` does no waiting of its
//! own.

use tracing::{info, warn};

use arcade_types::{Input, Role};

use crate::error::LoadError;
use crate::loader::Loader;
use crate::registry::Registry;

/// Outcome of one driver step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Terminated,
}

pub struct Session {
    loader: Loader,
}

impl Session {
    /// Load the configured initial identifiers and fail fast if either
    /// load fails; no partial session starts.
    pub fn start(registry: Registry, game_id: &str, graphics_id: &str) -> Result<Self, LoadError> {
        let mut loader = Loader::new(registry);
        loader.load_game(game_id)?;
        loader.load_graphics(graphics_id)?;
        info!(game = game_id, graphics = graphics_id, "session started");
        Ok(Self { loader })
    }

    /// Wrap an already-populated loader (used by tests and embedders).
    pub fn from_loader(loader: Loader) -> Self {
        Self { loader }
    }

    pub fn loader(&self) -> &Loader {
        &self.loader
    }

    pub fn loader_mut(&mut self) -> &mut Loader {
        &mut self.loader
    }

    /// Run one loop iteration.
    ///
    /// `Exit` (the dedicated close/quit input) and `Escape` terminate the
    /// session; `SwitchGame`/`SwitchGraphics` swap exactly the named
    /// role; everything else, `None` included, goes to the game's
    /// `update` so games can drive their own internal timing.
    pub fn step(&mut self) -> SessionStatus {
        let input = match self.loader.graphics_mut() {
            Some(graphics) => graphics.poll_input(),
            None => Input::None,
        };

        match input {
            Input::Exit | Input::Escape => {
                info!(input = input.as_str(), "session terminated by input");
                return SessionStatus::Terminated;
            }
            Input::SwitchGame => self.swap_role(Role::Game),
            Input::SwitchGraphics => self.swap_role(Role::Graphics),
            other => {
                if let Some(game) = self.loader.game_mut() {
                    game.update(other);
                }
            }
        }

        let snapshot = self.loader.game().map(|game| game.map());
        if let (Some(snapshot), Some(graphics)) = (snapshot, self.loader.graphics_mut()) {
            graphics.draw(&snapshot);
        }

        SessionStatus::Running
    }

    fn swap_role(&mut self, role: Role) {
        if let Err(err) = self.loader.swap(role) {
            // The role is now unloaded; later steps skip it until a swap
            // succeeds.
            warn!(role = role.as_str(), error = %err, "swap failed, role left unloaded");
        }
    }
}
