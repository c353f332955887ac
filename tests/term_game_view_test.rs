use tui_maze::core::{GameState, Maze};
use tui_maze::term::{GameView, Rgb, Theme, Viewport};
use tui_maze::types::{CellKind, Direction};

/// 5x5 maze with one L-shaped corridor from start to goal.
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
fn term_view_renders_border_corners() {
    let state = GameState::new(corridor());
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // maze pixels = 5*2 by 5*1 => 10x5
    // plus border => 12x7
    let vp = Viewport::new(12, 7);
    let fb = view.render(&state, Theme::Neon, false, vp);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(11, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 6).unwrap().ch, '└');
    assert_eq!(fb.get(11, 6).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_wall_cell_as_two_chars_wide() {
    let state = GameState::new(corridor());
    let view = GameView::default();
    let fb = view.render(&state, Theme::Neon, false, Viewport::new(12, 7));

    // Inside border: (1,1) origin. Maze cell (0,0) is a wall.
    assert_eq!(fb.get(1, 1).unwrap().ch, '█');
    assert_eq!(fb.get(2, 1).unwrap().ch, '█');
}

#[test]
fn term_view_draws_player_over_the_start_cell() {
    let state = GameState::new(corridor());
    let view = GameView::default();
    let fb = view.render(&state, Theme::Neon, false, Viewport::new(12, 7));

    // Player starts at maze (1,1) => framebuffer (3,2) and (4,2).
    let pal = Theme::Neon.palette();
    assert_eq!(fb.get(3, 2).unwrap().ch, '█');
    assert_eq!(fb.get(4, 2).unwrap().ch, '█');
    assert_eq!(fb.get(3, 2).unwrap().style.fg, pal.player);
}

#[test]
fn term_view_marks_goal_with_a_heart() {
    let state = GameState::new(corridor());
    let view = GameView::default();
    let fb = view.render(&state, Theme::Neon, false, Viewport::new(12, 7));

    // Goal at maze (3,3) => left glyph at framebuffer (7,4).
    assert_eq!(fb.get(7, 4).unwrap().ch, '♥');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let state = GameState::new(corridor());
    let view = GameView::default();
    // Tall enough for the full panel, wide enough for a panel column.
    let fb = view.render(&state, Theme::Neon, false, Viewport::new(60, 24));

    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    assert!(all.contains("MISSION: FIND LOVE"));
    assert!(all.contains("THEME"));
    assert!(all.contains("5 x 5"));
}

#[test]
fn term_view_overlays_win_banner() {
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

    let view = GameView::default();
    let fb = view.render(&state, Theme::Neon, false, Viewport::new(40, 7));

    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    assert!(all.contains("MISSION COMPLETE!"));
}

#[test]
fn term_view_flashes_border_on_bump() {
    let state = GameState::new(corridor());
    let view = GameView::default();
    let vp = Viewport::new(12, 7);

    let calm = view.render(&state, Theme::Neon, false, vp);
    let flashing = view.render(&state, Theme::Neon, true, vp);

    let calm_style = calm.get(0, 0).unwrap().style;
    let flash_style = flashing.get(0, 0).unwrap().style;
    assert_ne!(calm_style, flash_style);
    assert_eq!(flash_style.fg, Rgb::new(255, 92, 92));
    assert!(flash_style.bold);
}
