//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains maze generation and the traversal rules. It has
//! **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical mazes
//! - **Testable**: Movement and win rules run with no terminal attached
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`maze`]: square cell grid; out-of-bounds reads resolve to walls
//! - [`generate`]: randomized depth-first carving producing perfect mazes
//! - [`game_state`]: player position, collision, and the win state machine
//! - [`config`]: environment-driven settings shared by the binaries
//!
//! # Game Rules
//!
//! - The maze is carved as a spanning tree over odd/odd "rooms", so every
//!   open cell is reachable and exactly one simple path links any two cells
//! - The player steps one cell per input; walls and the grid edge block
//! - Stepping onto the goal wins; a won game ignores moves until a replay
//!   or a new maze
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tui_maze_core::{generate, GameState};
//! use tui_maze_core::types::{Direction, MoveOutcome};
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let mut game = GameState::new(generate(15, &mut rng));
//!
//! match game.step(Direction::Right) {
//!     MoveOutcome::Moved(p) => assert_eq!(p, game.player()),
//!     MoveOutcome::Bump => assert_eq!(game.player(), game.maze().start()),
//!     outcome => panic!("unexpected first step: {:?}", outcome),
//! }
//! ```

pub mod config;
pub mod game_state;
pub mod generate;
pub mod maze;

pub use tui_maze_types as types;

// Re-export commonly used types for convenience
pub use config::MazeConfig;
pub use game_state::{attempt_move, GameState};
pub use generate::generate;
pub use maze::Maze;
