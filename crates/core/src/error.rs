//! Typed errors for module loading and level sources.
//!
//! Load failures are recoverable at the swap boundary (the affected role
//! is left unloaded) but fatal at startup; the caller decides. Level
//! source failures propagate to the game module that requested the load.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to resolve a module identifier into a live instance.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The identifier does not name any registered unit.
    #[error("module unit `{0}` not found")]
    UnitNotFound(String),

    /// The unit exists but does not expose the requested entry point.
    #[error("module unit `{unit}` has no `{symbol}` entry point")]
    SymbolNotFound { unit: String, symbol: String },

    /// The factory ran but produced no instance.
    #[error("factory of module unit `{0}` returned no instance")]
    FactoryReturnedNothing(String),
}

/// Failure to read a textual level description.
#[derive(Debug, Error)]
pub enum LevelError {
    /// The source could not be opened or read.
    #[error("level source `{path}` unavailable: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
