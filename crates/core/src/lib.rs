//! Core runner logic - pure, deterministic, and testable
//!
//! This crate contains the deduplicated heart of the arcade runner: the
//! shared grid model, the two module contracts, and the registry/loader/
//! session machinery that lets arbitrary game logic and arbitrary
//! rendering backends interoperate without knowing each other's concrete
//! type.
//!
//! # Module Structure
//!
//! - [`grid`]: the shared playing-field model plus HUD/session fields
//! - [`game`]: the polymorphic contract every game module implements
//! - [`graphics`]: the polymorphic contract every rendering backend implements
//! - [`registry`]: identifier → factory resolution for loadable units
//! - [`loader`]: the two live role slots and the swap protocol
//! - [`session`]: the top-level input → update → draw loop
//! - [`rng`]: a small seedable LCG for deterministic game randomness
//! - [`error`]: typed load and level-source errors
//!
//! # Data flow
//!
//! The session polls the graphics module for one [`Input`], feeds it to
//! the game module's `update`, then hands the renderer a cloned snapshot
//! of the game's [`Grid`]. The grid never crosses the game/graphics
//! boundary by reference, so there is nothing to lock.
//!
//! [`Input`]: arcade_types::Input
//! [`Grid`]: grid::Grid

pub mod error;
pub mod game;
pub mod graphics;
pub mod grid;
pub mod loader;
pub mod registry;
pub mod rng;
pub mod session;

pub use arcade_types as types;

pub use error::{LevelError, LoadError};
pub use game::Game;
pub use graphics::Graphics;
pub use grid::{Cell, Grid};
pub use loader::Loader;
pub use registry::{GameFactory, GraphicsFactory, ModuleUnit, Registry};
pub use rng::SimpleRng;
pub use session::{Session, SessionStatus};
