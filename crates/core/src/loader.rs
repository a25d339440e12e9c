//! Loader - the two live role slots and the swap protocol
//!
//! The loader owns the registry plus at most one live instance per role.
//! Replacement is always destroy-before-replace: the old instance is
//! dropped and its identifier forgotten before the new unit's factory
//! runs, so a failed load leaves the role explicitly unloaded rather
//! than silently keeping the stale instance.
//!
//! The "next unit on swap" order is the registry's registration order,
//! walked cyclically per role; it lives here, not in ambient globals.

use tracing::{debug, info};

use arcade_types::Role;

use crate::error::LoadError;
use crate::game::Game;
use crate::graphics::Graphics;
use crate::registry::Registry;

pub struct Loader {
    registry: Registry,
    game: Option<Box<dyn Game>>,
    game_id: Option<String>,
    graphics: Option<Box<dyn Graphics>>,
    graphics_id: Option<String>,
}

impl Loader {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            game: None,
            game_id: None,
            graphics: None,
            graphics_id: None,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Load the named unit into the game role.
    ///
    /// Any previous instance is destroyed first; on failure the role is
    /// left unloaded. The new game gets `init_map()` before it is handed
    /// to anyone.
    pub fn load_game(&mut self, id: &str) -> Result<(), LoadError> {
        self.game = None;
        self.game_id = None;

        let mut game = self.registry.create_game(id)?;
        game.init_map();
        info!(unit = id, game = game.name(), "game module loaded");

        self.game = Some(game);
        self.game_id = Some(id.to_string());
        Ok(())
    }

    /// Load the named unit into the graphics role.
    ///
    /// Same contract as [`load_game`](Loader::load_game).
    pub fn load_graphics(&mut self, id: &str) -> Result<(), LoadError> {
        self.graphics = None;
        self.graphics_id = None;

        let graphics = self.registry.create_graphics(id)?;
        info!(unit = id, graphics = graphics.name(), "graphics module loaded");

        self.graphics = Some(graphics);
        self.graphics_id = Some(id.to_string());
        Ok(())
    }

    /// Replace the instance in `role` with the named unit.
    pub fn swap_to(&mut self, role: Role, id: &str) -> Result<(), LoadError> {
        debug!(role = role.as_str(), unit = id, "swap requested");
        match role {
            Role::Game => self.load_game(id),
            Role::Graphics => self.load_graphics(id),
        }
    }

    /// Replace the instance in `role` with the next registered unit for
    /// exactly that role, in cyclic registration order.
    ///
    /// Fails with [`LoadError::UnitNotFound`] when no unit provides the
    /// role; with a single unit registered, the swap reloads it.
    pub fn swap(&mut self, role: Role) -> Result<(), LoadError> {
        let next = self
            .next_identifier(role)
            .ok_or_else(|| LoadError::UnitNotFound(role.as_str().to_string()))?;
        self.swap_to(role, &next)
    }

    /// The identifier a parameterless [`swap`](Loader::swap) would load.
    pub fn next_identifier(&self, role: Role) -> Option<String> {
        let names = self.registry.unit_names(role);
        if names.is_empty() {
            return None;
        }
        let current = match role {
            Role::Game => self.game_id.as_deref(),
            Role::Graphics => self.graphics_id.as_deref(),
        };
        let next = match current.and_then(|id| names.iter().position(|n| *n == id)) {
            Some(i) => names[(i + 1) % names.len()],
            None => names[0],
        };
        Some(next.to_string())
    }

    pub fn game(&self) -> Option<&dyn Game> {
        self.game.as_deref()
    }

    pub fn game_mut(&mut self) -> Option<&mut dyn Game> {
        self.game.as_mut().map(|g| g.as_mut() as &mut dyn Game)
    }

    pub fn graphics_mut(&mut self) -> Option<&mut dyn Graphics> {
        self.graphics
            .as_mut()
            .map(|g| g.as_mut() as &mut dyn Graphics)
    }

    pub fn has_game(&self) -> bool {
        self.game.is_some()
    }

    pub fn has_graphics(&self) -> bool {
        self.graphics.is_some()
    }

    pub fn game_id(&self) -> Option<&str> {
        self.game_id.as_deref()
    }

    pub fn graphics_id(&self) -> Option<&str> {
        self.graphics_id.as_deref()
    }
}
