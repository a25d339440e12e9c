//! Arcade - a hot-swappable game runner for the terminal.
//!
//! The host loads one game module and one graphics module by identifier,
//! drives the input → update → draw loop over a shared grid model, and
//! can swap either module mid-session without restarting the process.
//!
//! This facade crate re-exports the workspace members under their short
//! names so tests and embedders can reach everything through one crate.

pub use arcade_core as core;
pub use arcade_games as games;
pub use arcade_input as input;
pub use arcade_term as term;
pub use arcade_types as types;
