//! Event-driven input from the terminal via crossterm.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::engine::{InputSource, Signal};
use crate::handler::HeldActionTracker;
use crate::map::should_quit;
use crate::types::HeldActions;

/// Reads terminal key events on the loop thread and keeps a held-key set.
#[derive(Debug, Default)]
pub struct CrosstermInput {
    tracker: HeldActionTracker,
}

impl CrosstermInput {
    pub fn new(tracker: HeldActionTracker) -> Self {
        Self { tracker }
    }

    /// Block until the player dismisses the game-over screen.
    ///
    /// Returns on Enter or any quit key.
    pub fn wait_for_dismiss(&mut self) -> Result<()> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if should_quit(key) || key.code == KeyCode::Enter {
                    return Ok(());
                }
            }
        }
    }
}

impl InputSource for CrosstermInput {
    fn pump(&mut self, timeout: Duration) -> Result<Signal> {
        if !event::poll(timeout)? {
            return Ok(Signal::Continue);
        }

        if let Event::Key(key) = event::read()? {
            let now = Instant::now();
            match key.kind {
                KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(Signal::Interrupt);
                    }
                    self.tracker.handle_key_press(key.code, now);
                }
                KeyEventKind::Repeat => {
                    self.tracker.handle_key_repeat(key.code, now);
                }
                KeyEventKind::Release => {
                    self.tracker.handle_key_release(key.code);
                }
            }
        }
        Ok(Signal::Continue)
    }

    fn held_actions(&mut self, now: Instant) -> HeldActions {
        self.tracker.resolve(now)
    }
}
