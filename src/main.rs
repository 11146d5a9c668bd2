//! Terminal dino runner (default binary).
//!
//! Reads configuration from the environment, takes over the terminal, runs
//! the frame loop until game over or quit, and always restores the terminal.
//!
//! Environment:
//! - `DINO_COLUMNS`, `DINO_SPAWN_MIN_MS`, `DINO_SPAWN_MAX_MS`, `DINO_SEED`
//! - `DINO_FRAME_POLICY` (`shrinking` | `fixed`), `DINO_FRAMERATE`,
//!   `DINO_BASE_FRAME_MS`, `DINO_MIN_FRAME_MS`, `DINO_FRAME_RAMP_DIVISOR`
//! - `DINO_LOG_PATH`: write logs to this file (`RUST_LOG` filters them)

use std::fs::File;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tui_dino::core::{GameConfig, GameState};
use tui_dino::engine::{
    open_display, run, Clock, Display, FramePolicy, FrameScheduler, RunOutcome, SystemClock,
};
use tui_dino::input::CrosstermInput;
use tui_dino::term::{GameView, TerminalDisplay};

fn main() -> Result<()> {
    init_logging()?;

    let config = game_config_from_env();
    let policy = FramePolicy::from_env();
    // Reject bad configuration before touching the terminal.
    let mut state = GameState::new(config.clone()).context("invalid game configuration")?;
    info!(?config, ?policy, "starting");

    let mut display = TerminalDisplay::new(GameView::default());
    open_display(&mut display).context("failed to set up terminal")?;

    let result = play(&mut state, policy, &mut display);

    // Always try to restore terminal state.
    if let Err(e) = display.close(true) {
        warn!(error = %e, "failed to restore terminal");
    }

    let outcome = result?;
    info!(score = outcome.score(), "exited");
    match outcome {
        RunOutcome::GameOver { score, .. } => println!("Game over. Score: {score}"),
        RunOutcome::Interrupted { score, .. } => println!("Exited. Score: {score}"),
    }
    Ok(())
}

fn play(
    state: &mut GameState,
    policy: FramePolicy,
    display: &mut TerminalDisplay,
) -> Result<RunOutcome> {
    let clock = SystemClock;
    let mut scheduler = FrameScheduler::new(policy, clock.now());
    let mut input = CrosstermInput::default();

    let outcome = run(state, &mut scheduler, &clock, &mut input, display)?;
    if matches!(outcome, RunOutcome::GameOver { .. }) {
        // Leave the final frame up until the player acknowledges it.
        input.wait_for_dismiss()?;
    }
    Ok(outcome)
}

/// Seed from the clock unless `DINO_SEED` pins it.
fn game_config_from_env() -> GameConfig {
    let config = GameConfig::from_env();
    if std::env::var_os("DINO_SEED").is_some() {
        return config;
    }
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    config.with_seed(nanos)
}

/// The terminal is in the alternate screen while playing, so logs only go to a file.
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var("DINO_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    else {
        return Ok(());
    };

    let file = File::create(&path).with_context(|| format!("cannot open log file {path}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
