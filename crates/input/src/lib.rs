//! Input module - keyboard handling for session controls
//!
//! Translates crossterm key events into the shared [`Input`] vocabulary.
//! The mapping is total: unbound keys become `Input::None`.
//!
//! [`Input`]: arcade_types::Input

pub mod map;

pub use map::map_key_event;
