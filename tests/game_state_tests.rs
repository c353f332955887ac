//! Game state tests - movement, collision, and the win state machine

use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_maze::core::{attempt_move, generate, GameState, Maze};
use tui_maze::types::{CellKind, Direction, GameAction, MoveOutcome, Position};

/// 5x5 maze with one L-shaped corridor:
/// start (1,1) -> (2,1) -> (3,1) -> (3,2) -> goal (3,3).
fn corridor() -> Maze {
    let mut maze = Maze::new(5);
    maze.set(1, 1, CellKind::Start);
    maze.set(2, 1, CellKind::Path);
    maze.set(3, 1, CellKind::Path);
    maze.set(3, 2, CellKind::Path);
    maze.set(3, 3, CellKind::Goal);
    maze
}

#[test]
fn test_wall_directly_right_blocks() {
    // (2, 1) stays a wall; the only open neighbor of the start is below.
    let mut maze = Maze::new(5);
    maze.set(1, 1, CellKind::Start);
    maze.set(1, 2, CellKind::Path);
    maze.set(3, 3, CellKind::Goal);
    let mut state = GameState::new(maze);

    assert_eq!(state.step(Direction::Right), MoveOutcome::Bump);
    assert_eq!(state.player(), Position::new(1, 1));
    assert!(!state.won());

    // The open cell still works.
    assert_eq!(
        state.step(Direction::Down),
        MoveOutcome::Moved(Position::new(1, 2))
    );
}

#[test]
fn test_grid_edge_blocks_on_every_side() {
    // attempt_move is pure; probe from cells touching each grid edge.
    let maze = corridor();

    assert_eq!(
        attempt_move(&maze, Position::new(0, 1), Direction::Left),
        MoveOutcome::Bump
    );
    assert_eq!(
        attempt_move(&maze, Position::new(1, 0), Direction::Up),
        MoveOutcome::Bump
    );
    assert_eq!(
        attempt_move(&maze, Position::new(4, 3), Direction::Right),
        MoveOutcome::Bump
    );
    assert_eq!(
        attempt_move(&maze, Position::new(3, 4), Direction::Down),
        MoveOutcome::Bump
    );
}

#[test]
fn test_reaching_the_goal_wins() {
    let mut state = GameState::new(corridor());

    assert_eq!(
        state.step(Direction::Right),
        MoveOutcome::Moved(Position::new(2, 1))
    );
    assert_eq!(
        state.step(Direction::Right),
        MoveOutcome::Moved(Position::new(3, 1))
    );
    assert_eq!(
        state.step(Direction::Down),
        MoveOutcome::Moved(Position::new(3, 2))
    );
    assert_eq!(
        state.step(Direction::Down),
        MoveOutcome::ReachedGoal(Position::new(3, 3))
    );
    assert!(state.won());
}

#[test]
fn test_won_game_ignores_further_moves() {
    let mut state = GameState::new(corridor());
    for dir in [
        Direction::Right,
        Direction::Right,
        Direction::Down,
        Direction::Down,
    ] {
        state.step(dir);
    }
    assert!(state.won());

    // Every direction, repeatedly: nothing changes.
    for _ in 0..3 {
        for dir in Direction::ALL {
            assert_eq!(state.step(dir), MoveOutcome::Ignored);
        }
    }
    assert_eq!(state.player(), Position::new(3, 3));
    assert!(state.won());
}

#[test]
fn test_replay_restarts_the_same_maze() {
    let mut state = GameState::new(corridor());
    let before = state.maze().clone();
    for dir in [
        Direction::Right,
        Direction::Right,
        Direction::Down,
        Direction::Down,
    ] {
        state.step(dir);
    }
    assert!(state.won());

    assert_eq!(state.replay(), Position::new(1, 1));
    assert_eq!(state.player(), Position::new(1, 1));
    assert!(!state.won());
    assert_eq!(state.maze(), &before);

    // Replay also works mid-run, not just after a win.
    state.step(Direction::Right);
    state.replay();
    assert_eq!(state.player(), Position::new(1, 1));
}

#[test]
fn test_new_maze_replaces_and_resets_together() {
    let mut rng = StdRng::seed_from_u64(10);
    let mut state = GameState::new(generate(15, &mut rng));
    let before = state.maze().clone();

    assert!(state.apply(GameAction::NewMaze, &mut rng));
    assert_ne!(state.maze(), &before);
    assert_eq!(state.maze().size(), before.size());
    assert_eq!(state.player(), state.maze().start());
    assert!(!state.won());
}

#[test]
fn test_apply_reports_whether_the_move_landed() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut state = GameState::new(corridor());

    assert!(!state.apply(GameAction::Move(Direction::Up), &mut rng));
    assert!(state.apply(GameAction::Move(Direction::Right), &mut rng));
    assert!(state.apply(GameAction::Replay, &mut rng));
    assert_eq!(state.player(), Position::new(1, 1));
}

#[test]
fn test_last_outcome_is_consumed_once() {
    let mut state = GameState::new(corridor());
    assert_eq!(state.take_last_outcome(), None);

    state.step(Direction::Up);
    assert_eq!(state.take_last_outcome(), Some(MoveOutcome::Bump));
    assert_eq!(state.take_last_outcome(), None);

    state.step(Direction::Right);
    assert_eq!(
        state.take_last_outcome(),
        Some(MoveOutcome::Moved(Position::new(2, 1)))
    );
}
