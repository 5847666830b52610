//! Terminal runner (default binary).
//!
//! Hosts the engine: owns the gravity clock, forwards key presses as
//! commands and renders snapshots with the framebuffer renderer. With
//! `--headless N` it skips the terminal, runs N gravity steps and prints the
//! final snapshot as JSON.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn, Level};
use tracing_subscriber::prelude::*;

use tui_blockfall::core::{Engine, GameSnapshot, TickOutcome};
use tui_blockfall::input::{handle_key_event, InputEvent};
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::DEFAULT_TICK_MS;

#[derive(Debug, Parser)]
#[command(version, about = "Falling-block puzzle in the terminal")]
struct Args {
    #[arg(long, default_value_t = DEFAULT_TICK_MS, help = "Gravity interval in milliseconds")]
    tick_ms: u64,

    #[arg(long, help = "Piece sequence seed (defaults to the clock)")]
    seed: Option<u32>,

    #[arg(long, value_name = "TICKS", help = "Run N gravity steps without a terminal and print the snapshot")]
    headless: Option<u32>,

    #[arg(long, default_value = "info", help = "trace, debug, info, warn or error")]
    log_level: Level,

    #[arg(long, help = "Write logs to this file")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_level, args.log_file.as_deref(), args.headless.is_some())?;

    let seed = args.seed.unwrap_or_else(clock_seed);
    info!(seed, tick_ms = args.tick_ms, "starting");

    if let Some(ticks) = args.headless {
        return run_headless(seed, ticks);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed, Duration::from_millis(args.tick_ms.max(1)));

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!(error = %err, "failed to restore terminal");
    }
    result
}

fn init_tracing(level: Level, log_file: Option<&Path>, headless: bool) -> Result<()> {
    let filter = tracing_subscriber::filter::LevelFilter::from_level(level);

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .with(filter)
            .init();
    } else if headless {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init();
    }
    // Interactive mode without a log file: stdout belongs to the renderer.
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

fn run_headless(seed: u32, ticks: u32) -> Result<()> {
    let mut engine = Engine::new(seed);
    let mut ran = 0;
    while ran < ticks && engine.status().is_running() {
        engine.tick();
        ran += 1;
    }
    info!(ticks = ran, status = ?engine.status(), "headless run finished");

    let json = serde_json::to_string_pretty(&engine.snapshot())?;
    println!("{json}");
    Ok(())
}

fn run(term: &mut TerminalRenderer, seed: u32, tick: Duration) -> Result<()> {
    let mut engine = Engine::new(seed);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut last_tick = Instant::now();

    loop {
        engine.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match handle_key_event(key) {
                    Some(InputEvent::Quit) => return Ok(()),
                    Some(InputEvent::Restart) => {
                        engine.restart();
                        last_tick = Instant::now();
                    }
                    Some(InputEvent::Command(command)) => {
                        engine.apply(command);
                    }
                    None => {}
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // The clock stops while the game is over; restart resumes it.
        if engine.status().is_running() && last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            if let TickOutcome::GameOver { .. } = engine.tick() {
                info!(pieces = engine.piece_id(), "waiting for restart");
            }
        }
    }
}
