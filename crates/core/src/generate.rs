//! Maze generation - randomized depth-first carving
//!
//! A recursive backtracker run with an explicit stack: rooms sit at odd/odd
//! coordinates two cells apart, and carving a passage opens both the chosen
//! room and the connector cell between it and the current room. Visiting
//! every room exactly once yields a spanning tree over the room lattice, so
//! the result is a perfect maze: fully connected, no cycles, exactly one
//! simple path between any two open cells.

use arrayvec::ArrayVec;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::maze::Maze;
use crate::types::CellKind;

/// Candidate room offsets: two cells away in each cardinal direction
const ROOM_STEPS: [(i32, i32); 4] = [(0, -2), (2, 0), (0, 2), (-2, 0)];

/// Generate a maze of the given size
///
/// An even `size` is coerced to the next odd integer, so callers must not
/// assume the output dimension equals the literal input. Randomness comes
/// from the injected `rng`; the same seed reproduces the same maze.
///
/// Sizes below [`crate::types::MIN_MAZE_SIZE`] violate the contract. The
/// function does not check for them and still returns (a degenerate grid)
/// rather than failing; there are no error conditions for valid sizes.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use tui_maze_core::generate;
/// use tui_maze_core::types::CellKind;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let maze = generate(15, &mut rng);
/// assert_eq!(maze.size(), 15);
/// assert_eq!(maze.get(1, 1), Some(CellKind::Start));
/// assert_eq!(maze.get(13, 13), Some(CellKind::Goal));
/// ```
pub fn generate(size: usize, rng: &mut impl Rng) -> Maze {
    let size = if size % 2 == 0 { size + 1 } else { size };
    let bound = size as i32 - 1;

    let mut maze = Maze::new(size);
    let rooms_per_axis = size.saturating_sub(1) / 2;
    let mut stack: Vec<(i32, i32)> = Vec::with_capacity(rooms_per_axis * rooms_per_axis);

    maze.set(1, 1, CellKind::Path);
    stack.push((1, 1));

    while let Some(&(x, y)) = stack.last() {
        // Unvisited rooms two cells away, inside the interior.
        let mut candidates: ArrayVec<(i32, i32), 4> = ArrayVec::new();
        for &(dx, dy) in ROOM_STEPS.iter() {
            let nx = x + dx;
            let ny = y + dy;
            if nx > 0 && nx < bound && ny > 0 && ny < bound && maze.get(nx, ny) == Some(CellKind::Wall)
            {
                candidates.push((nx, ny));
            }
        }

        match candidates.choose(rng) {
            Some(&(nx, ny)) => {
                // Open the connector between the rooms, then the room itself.
                maze.set((x + nx) / 2, (y + ny) / 2, CellKind::Path);
                maze.set(nx, ny, CellKind::Path);
                stack.push((nx, ny));
            }
            None => {
                stack.pop();
            }
        }
    }

    maze.set(1, 1, CellKind::Start);
    maze.set(bound - 1, bound - 1, CellKind::Goal);
    maze
}
