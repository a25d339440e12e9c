//! Module registry - identifier → factory resolution
//!
//! A loadable unit is known to the host by a string identifier and
//! exposes at most one well-known entry point per role: `create_game` or
//! `create_graphics`. A well-formed unit provides exactly one of the two.
//! How identifiers are discovered (directory scan, dynamic libraries,
//! static registration) is the host's concern; the registry only maps
//! identifiers to factories and constructs instances on demand.
//!
//! Factories return `Option` so a factory that yields nothing is a
//! distinguishable failure ([`LoadError::FactoryReturnedNothing`]), not a
//! panic.

use tracing::warn;

use arcade_types::Role;

use crate::error::LoadError;
use crate::game::Game;
use crate::graphics::Graphics;

/// Factory entry point producing a game instance.
pub type GameFactory = Box<dyn Fn() -> Option<Box<dyn Game>>>;

/// Factory entry point producing a graphics instance.
pub type GraphicsFactory = Box<dyn Fn() -> Option<Box<dyn Graphics>>>;

/// One registered loadable unit and its resolved entry points.
pub struct ModuleUnit {
    name: String,
    game: Option<GameFactory>,
    graphics: Option<GraphicsFactory>,
}

impl ModuleUnit {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this unit can fill the given role.
    pub fn provides(&self, role: Role) -> bool {
        match role {
            Role::Game => self.game.is_some(),
            Role::Graphics => self.graphics.is_some(),
        }
    }
}

/// Ordered collection of registered units.
///
/// Registration order is meaningful: it defines the cyclic "next unit"
/// order the loader walks on a swap request.
#[derive(Default)]
pub struct Registry {
    units: Vec<ModuleUnit>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    fn unit_entry(&mut self, name: &str) -> &mut ModuleUnit {
        if let Some(i) = self.units.iter().position(|u| u.name == name) {
            return &mut self.units[i];
        }
        self.units.push(ModuleUnit {
            name: name.to_string(),
            game: None,
            graphics: None,
        });
        self.units.last_mut().expect("unit just pushed")
    }

    /// Register a game entry point under `name`.
    pub fn register_game(&mut self, name: &str, factory: GameFactory) {
        let unit = self.unit_entry(name);
        if unit.game.is_some() {
            warn!(unit = name, "overriding existing game registration");
        }
        unit.game = Some(factory);
    }

    /// Register a graphics entry point under `name`.
    pub fn register_graphics(&mut self, name: &str, factory: GraphicsFactory) {
        let unit = self.unit_entry(name);
        if unit.graphics.is_some() {
            warn!(unit = name, "overriding existing graphics registration");
        }
        unit.graphics = Some(factory);
    }

    pub fn resolve(&self, name: &str) -> Option<&ModuleUnit> {
        self.units.iter().find(|u| u.name == name)
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Unit names able to fill `role`, in registration order.
    pub fn unit_names(&self, role: Role) -> Vec<&str> {
        self.units
            .iter()
            .filter(|u| u.provides(role))
            .map(|u| u.name.as_str())
            .collect()
    }

    /// Construct one game instance from the named unit.
    pub fn create_game(&self, name: &str) -> Result<Box<dyn Game>, LoadError> {
        let unit = self
            .resolve(name)
            .ok_or_else(|| LoadError::UnitNotFound(name.to_string()))?;
        let factory = unit.game.as_ref().ok_or_else(|| LoadError::SymbolNotFound {
            unit: name.to_string(),
            symbol: "create_game".to_string(),
        })?;
        factory().ok_or_else(|| LoadError::FactoryReturnedNothing(name.to_string()))
    }

    /// Construct one graphics instance from the named unit.
    pub fn create_graphics(&self, name: &str) -> Result<Box<dyn Graphics>, LoadError> {
        let unit = self
            .resolve(name)
            .ok_or_else(|| LoadError::UnitNotFound(name.to_string()))?;
        let factory = unit
            .graphics
            .as_ref()
            .ok_or_else(|| LoadError::SymbolNotFound {
                unit: name.to_string(),
                symbol: "create_graphics".to_string(),
            })?;
        factory().ok_or_else(|| LoadError::FactoryReturnedNothing(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use arcade_types::Input;

    struct NullGame;

    impl Game for NullGame {
        fn init_map(&mut self) {}
        fn reset(&mut self) {}
        fn update(&mut self, _input: Input) {}
        fn map(&self) -> Grid {
            Grid::new(1, 1, 1)
        }
        fn is_game_over(&self) -> bool {
            false
        }
        fn score(&self) -> u32 {
            0
        }
        fn name(&self) -> &str {
            "null"
        }
    }

    #[test]
    fn create_resolves_registered_unit() {
        let mut registry = Registry::new();
        registry.register_game("null", Box::new(|| Some(Box::new(NullGame))));

        let game = registry.create_game("null").unwrap();
        assert_eq!(game.name(), "null");
    }

    #[test]
    fn unknown_identifier_is_unit_not_found() {
        let registry = Registry::new();
        let err = registry.create_game("missing").map(|_| ()).unwrap_err();
        assert!(matches!(err, LoadError::UnitNotFound(name) if name == "missing"));
    }

    #[test]
    fn wrong_role_is_symbol_not_found() {
        let mut registry = Registry::new();
        registry.register_game("null", Box::new(|| Some(Box::new(NullGame))));

        let err = registry.create_graphics("null").map(|_| ()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::SymbolNotFound { symbol, .. } if symbol == "create_graphics"
        ));
    }

    #[test]
    fn empty_factory_is_factory_returned_nothing() {
        let mut registry = Registry::new();
        registry.register_game("broken", Box::new(|| None));

        let err = registry.create_game("broken").map(|_| ()).unwrap_err();
        assert!(matches!(err, LoadError::FactoryReturnedNothing(_)));
    }

    #[test]
    fn unit_names_filter_by_role_in_registration_order() {
        let mut registry = Registry::new();
        registry.register_game("b_game", Box::new(|| Some(Box::new(NullGame))));
        registry.register_game("a_game", Box::new(|| Some(Box::new(NullGame))));
        registry.register_graphics("gfx", Box::new(|| None));

        assert_eq!(registry.unit_names(Role::Game), vec!["b_game", "a_game"]);
        assert_eq!(registry.unit_names(Role::Graphics), vec!["gfx"]);
    }
}
