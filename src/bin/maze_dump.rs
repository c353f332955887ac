//! Headless maze printer.
//!
//! Generates one maze from the same `MAZE_SIZE` / `MAZE_SEED` environment
//! configuration as the game binary and prints it to stdout, two characters
//! per cell. Useful for eyeballing generator output without entering raw
//! mode, and for diffing seeded runs.

use tui_maze::core::{generate, MazeConfig};
use tui_maze::types::CellKind;

fn main() {
    let config = MazeConfig::from_env();
    let mut rng = config.rng();
    let maze = generate(config.size, &mut rng);

    let size = maze.size() as i32;
    let mut line = String::with_capacity(maze.size() * 2);
    for y in 0..size {
        line.clear();
        for x in 0..size {
            line.push_str(match maze.get(x, y) {
                Some(CellKind::Wall) | None => "##",
                Some(CellKind::Path) => "  ",
                Some(CellKind::Start) => "S ",
                Some(CellKind::Goal) => "G ",
            });
        }
        println!("{}", line);
    }
}
