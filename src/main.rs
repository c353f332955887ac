//! Terminal maze runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout).

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_maze::core::{generate, GameState, MazeConfig};
use tui_maze::input::{handle_key_event, should_cycle_theme, should_quit};
use tui_maze::term::{FrameBuffer, GameView, TerminalRenderer, Theme, Viewport};
use tui_maze::types::{MoveOutcome, BUMP_FLASH_MS, POLL_INTERVAL_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let config = MazeConfig::from_env();
    let mut rng = config.rng();
    let mut game_state = GameState::new(generate(config.size, &mut rng));
    let mut theme = Theme::from_env_or_default();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let poll_interval = Duration::from_millis(POLL_INTERVAL_MS as u64);
    let mut flash_until = Instant::now();

    loop {
        // Render.
        let bump_flash = Instant::now() < flash_until;
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game_state, theme, bump_flash, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if event::poll(poll_interval)? {
            match event::read()? {
                Event::Key(key) => {
                    // Repeat counts as a press so a held arrow keeps moving.
                    if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                        if should_quit(key) {
                            return Ok(());
                        }

                        if should_cycle_theme(key) {
                            theme = theme.cycle();
                            continue;
                        }

                        if let Some(action) = handle_key_event(key) {
                            game_state.apply(action, &mut rng);
                            if game_state.take_last_outcome() == Some(MoveOutcome::Bump) {
                                flash_until = Instant::now()
                                    + Duration::from_millis(BUMP_FLASH_MS as u64);
                            }
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }
    }
}
