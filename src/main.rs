//! Terminal Block Blast runner.
//!
//! Keyboard and mouse input through crossterm, drawn with the framebuffer
//! renderer. The game has no clock, so the loop blocks on input and only
//! redraws after something changed.

use std::fs::File;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use block_blast::config::Config;
use block_blast::core::GameSnapshot;
use block_blast::engine::Controller;
use block_blast::input::{handle_key_event, map_mouse_event, should_quit};
use block_blast::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use block_blast::DragState;

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config)?;

    let seed = config.resolve_seed();
    log::info!("starting: seed={seed} mouse={}", config.mouse);

    let mut term = TerminalRenderer::new();
    term.enter(config.mouse)?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("exiting with error: {err:#}");
    }
    result
}

/// Log to a file when one is configured; the terminal belongs to the game.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already initialized")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<()> {
    let mut controller = Controller::new(seed);
    let mut drag = DragState::new();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut dirty = true;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        if dirty {
            controller.state().snapshot_into(&mut snap);
            let selection = controller.selection_view();
            view.render_into(&snap, Some(&selection), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if should_quit(key) {
                    log::info!(
                        "quit: score={} placements={}",
                        controller.state().score(),
                        controller.state().placements()
                    );
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    controller.apply_action(action);
                    dirty = true;
                }
            }
            Event::Mouse(mouse) => {
                if let Some(pointer) = map_mouse_event(mouse) {
                    let hit = view.hit_test(viewport, pointer.column, pointer.row);
                    dirty |= drag.handle(&mut controller, pointer.kind, hit);
                }
            }
            Event::Resize(..) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}
