//! Terminal Flappy Bird runner (default binary).
//!
//! Uses crossterm for input and a framebuffer-based renderer. The loop is
//! render, wait for input until the next frame is due, then let the driver
//! run one simulation step.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_flappy::core::{rng, GameConfig, GameSession, GameSnapshot};
use tui_flappy::engine::{Control, Driver, FramePacer};
use tui_flappy::input::map_event;
use tui_flappy::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_flappy::types::Playfield;

#[derive(Parser, Debug)]
#[command(about = "Flap through the pipes in your terminal", version)]
struct Args {
    /// Seed for pipe placement (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// TOML file overriding physics and spawn constants
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write logs here (filtered by RUST_LOG, default `info`)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let game_rng = match args.seed {
        Some(seed) => rng::seeded(seed),
        None => rng::from_entropy(),
    };

    // Validate before touching the terminal so errors print normally.
    let (cols, rows) = TerminalRenderer::size()?;
    let session = GameSession::new(config, Playfield::from_cells(cols, rows), game_rng)
        .context("terminal too small for the configured gap")?;
    info!(cols, rows, seed = ?args.seed, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, Driver::new(session));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut driver: Driver) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut pacer = FramePacer::standard(Instant::now());

    loop {
        // Render.
        let (w, h) = TerminalRenderer::size()?;
        driver.session().snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the next frame is due.
        while event::poll(pacer.timeout(Instant::now()))? {
            let ev = event::read()?;
            if matches!(ev, event::Event::Resize(..)) {
                term.invalidate();
            }
            if let Some(input) = map_event(ev) {
                if driver.handle(input) == Control::Quit {
                    info!(
                        score = driver.session().score(),
                        frames = driver.frames_ticked(),
                        "quit"
                    );
                    return Ok(());
                }
            }
        }

        // Step.
        if pacer.due(Instant::now()) {
            driver.on_frame();
        }
    }
}
