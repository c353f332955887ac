//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] values the core
//! can apply, plus a couple of predicates (quit, theme cycle) for state the
//! binary owns itself.

pub mod map;

pub use tui_maze_types as types;

pub use map::{handle_key_event, should_cycle_theme, should_quit};
