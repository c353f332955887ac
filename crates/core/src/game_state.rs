//! Game state module - the traversal engine
//!
//! Movement is resolved by a pure function over an explicitly passed maze
//! and position; [`GameState`] layers the win state machine on top:
//!
//! ```text
//! Playing --(step -> ReachedGoal)--> Won
//! Playing --(step -> Moved | Bump)--> Playing
//! Won --(replay | regenerate)--> Playing
//! Won --(step)--> Won   (no-op, outcome Ignored)
//! ```
//!
//! The engine performs no rendering, sound, or persistence; side effects are
//! limited to the returned [`MoveOutcome`], which the presentation layer
//! interprets.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::generate::generate;
use crate::maze::Maze;
use crate::types::{CellKind, Direction, GameAction, MoveOutcome, Position, DEFAULT_MAZE_SIZE};

/// Resolve a single attempted step against a maze
///
/// Pure: reads the maze, mutates nothing. The bounds check comes before the
/// cell check, so a target outside the grid behaves exactly like a wall.
/// `Moved` and `ReachedGoal` carry the target position for the caller to
/// thread into its own state.
pub fn attempt_move(maze: &Maze, from: Position, direction: Direction) -> MoveOutcome {
    let target = from.step(direction);
    match maze.cell_or_wall(target.x, target.y) {
        CellKind::Wall => MoveOutcome::Bump,
        CellKind::Goal => MoveOutcome::ReachedGoal(target),
        CellKind::Path | CellKind::Start => MoveOutcome::Moved(target),
    }
}

/// Complete game state: the maze, the player, and the win latch
#[derive(Debug, Clone)]
pub struct GameState {
    maze: Maze,
    player: Position,
    won: bool,
    /// Last move outcome (consumed by the presentation layer).
    last_outcome: Option<MoveOutcome>,
}

impl GameState {
    /// Start a game on the given maze, player at the maze's start cell
    pub fn new(maze: Maze) -> Self {
        let player = maze.start();
        Self {
            maze,
            player,
            won: false,
            last_outcome: None,
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn won(&self) -> bool {
        self.won
    }

    /// Take and clear the most recent move outcome
    pub fn take_last_outcome(&mut self) -> Option<MoveOutcome> {
        self.last_outcome.take()
    }

    /// Attempt to step the player one cell
    ///
    /// After the goal is reached every further step is ignored until
    /// [`GameState::replay`] or [`GameState::regenerate`].
    pub fn step(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = if self.won {
            MoveOutcome::Ignored
        } else {
            let outcome = attempt_move(&self.maze, self.player, direction);
            match outcome {
                MoveOutcome::Moved(target) => self.player = target,
                MoveOutcome::ReachedGoal(target) => {
                    self.player = target;
                    self.won = true;
                }
                MoveOutcome::Bump | MoveOutcome::Ignored => {}
            }
            outcome
        };
        self.last_outcome = Some(outcome);
        outcome
    }

    /// Reset the player to the start of the current maze and clear the win
    ///
    /// Returns the start position. The maze itself is untouched.
    pub fn replay(&mut self) -> Position {
        self.player = self.maze.start();
        self.won = false;
        self.last_outcome = None;
        self.player
    }

    /// Replace the maze with a freshly generated one and reset
    ///
    /// Maze, player position, and win state change together; callers never
    /// observe a partially updated game.
    pub fn regenerate(&mut self, size: usize, rng: &mut impl Rng) {
        self.maze = generate(size, rng);
        self.player = self.maze.start();
        self.won = false;
        self.last_outcome = None;
    }

    /// Apply a game action
    ///
    /// Returns true if the action changed state (a blocked or ignored move
    /// returns false). `NewMaze` regenerates at the current maze's size.
    pub fn apply(&mut self, action: GameAction, rng: &mut impl Rng) -> bool {
        match action {
            GameAction::Move(direction) => matches!(
                self.step(direction),
                MoveOutcome::Moved(_) | MoveOutcome::ReachedGoal(_)
            ),
            GameAction::Replay => {
                self.replay();
                true
            }
            GameAction::NewMaze => {
                self.regenerate(self.maze.size(), rng);
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(generate(DEFAULT_MAZE_SIZE, &mut StdRng::seed_from_u64(1)))
    }
}
