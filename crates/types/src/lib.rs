//! Shared types module - data structures and constants for the maze game
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, headless tools).
//!
//! # Grid Model
//!
//! The maze is a square grid of [`CellKind`] values. Coordinates are `(x, y)`
//! with `x` growing to the right and `y` growing downward; the top-left cell
//! is `(0, 0)`. Grid dimensions are always odd: cells with both coordinates
//! odd are the "rooms" of the carving lattice, and the cells between rooms
//! are carved open when two rooms get connected.
//!
//! # Examples
//!
//! ```
//! use tui_maze_types::{Direction, GameAction, MoveOutcome, Position};
//!
//! // Directions map to the four cardinal unit deltas.
//! assert_eq!(Direction::Up.delta(), (0, -1));
//! assert_eq!(Direction::Right.delta(), (1, 0));
//!
//! // Positions step by direction.
//! let p = Position::new(1, 1).step(Direction::Down);
//! assert_eq!(p, Position::new(1, 2));
//!
//! // Actions parse from strings (case-insensitive).
//! let action = GameAction::from_str("moveUp").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Up));
//!
//! // Outcomes stringify for diagnostics.
//! assert_eq!(MoveOutcome::Bump.as_str(), "bump");
//! ```

/// Default maze dimension when none is configured (15x15)
pub const DEFAULT_MAZE_SIZE: usize = 15;

/// Smallest supported maze dimension (5x5)
pub const MIN_MAZE_SIZE: usize = 5;

/// Largest maze dimension accepted from configuration (99x99)
pub const MAX_MAZE_SIZE: usize = 99;

/// Duration of the border flash after a blocked move (120ms)
pub const BUMP_FLASH_MS: u32 = 120;

/// Input poll timeout between frames (33ms ≈ 30 FPS)
pub const POLL_INTERVAL_MS: u32 = 33;

/// State of a single maze cell
///
/// Every cell starts as `Wall`; the generator carves rooms and connectors
/// into `Path` and then marks the two endpoints. Exactly one `Start` and one
/// `Goal` exist in a generated maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Wall,
    Path,
    Start,
    Goal,
}

impl CellKind {
    /// Whether the player can stand on this cell (anything but a wall)
    pub fn is_open(&self) -> bool {
        !matches!(self, CellKind::Wall)
    }
}

/// The four cardinal movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a fixed order (useful for iteration in tests)
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The unit delta `(dx, dy)` for this direction
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_maze_types::Direction;
    ///
    /// assert_eq!(Direction::Up.delta(), (0, -1));
    /// assert_eq!(Direction::Down.delta(), (0, 1));
    /// assert_eq!(Direction::Left.delta(), (-1, 0));
    /// assert_eq!(Direction::Right.delta(), (1, 0));
    /// ```
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// A cell coordinate on the grid
///
/// Signed so that off-grid targets (e.g. stepping left from column 0) are
/// representable; the grid treats any out-of-bounds coordinate as `Wall`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring coordinate one step in `direction`
    ///
    /// The result may lie outside the grid; callers resolve that against the
    /// maze bounds.
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Outcome of a single attempted move
///
/// This is the pure signal the traversal engine hands to the presentation
/// layer; rendering and sound effects key off it, the engine itself does
/// neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Target was open; the player now stands on it
    Moved(Position),
    /// Target was a wall or off-grid; the player did not move
    Bump,
    /// Target was the goal; the player moved onto it and the game is won
    ReachedGoal(Position),
    /// The game is already won; the move was ignored
    Ignored,
}

impl MoveOutcome {
    /// Convert to string for diagnostics (payload omitted)
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveOutcome::Moved(_) => "moved",
            MoveOutcome::Bump => "bump",
            MoveOutcome::ReachedGoal(_) => "reachedGoal",
            MoveOutcome::Ignored => "ignored",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// Each action maps to a specific game mechanic; key bindings live in the
/// input crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Step the player one cell in a direction
    Move(Direction),
    /// Generate a fresh maze and reset the player to its start
    NewMaze,
    /// Keep the current maze, reset the player to start
    Replay,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_maze_types::{Direction, GameAction};
    ///
    /// assert_eq!(
    ///     GameAction::from_str("moveLeft"),
    ///     Some(GameAction::Move(Direction::Left))
    /// );
    /// assert_eq!(GameAction::from_str("newMaze"), Some(GameAction::NewMaze));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" | "up" => Some(GameAction::Move(Direction::Up)),
            "movedown" | "down" => Some(GameAction::Move(Direction::Down)),
            "moveleft" | "left" => Some(GameAction::Move(Direction::Left)),
            "moveright" | "right" => Some(GameAction::Move(Direction::Right)),
            "newmaze" => Some(GameAction::NewMaze),
            "replay" => Some(GameAction::Replay),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::NewMaze => "newMaze",
            GameAction::Replay => "replay",
        }
    }
}
