//! Held-key tracking for terminal environments.
//!
//! Keeps a persistent set of physically held keys fed by key events, and
//! resolves it into [`HeldActions`] once per tick. Supports terminals that do
//! not emit key release events by using a timeout; there, a jump only counts
//! on the ticks that follow a fresh press.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::map::action_for_key;
use crate::types::{Action, HeldActions};

// In terminals without key-release events a key counts as held while presses
// or auto-repeats keep arriving. This must outlast the typical initial
// auto-repeat delay (~500ms) or a held duck flickers.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 550;

const MAX_HELD_KEYS: usize = 8;

/// Tracks which mapped keys are down.
#[derive(Debug, Clone)]
pub struct HeldActionTracker {
    /// Mapped keys currently down, with the last time a press/repeat was seen.
    held: ArrayVec<(KeyCode, Instant), MAX_HELD_KEYS>,
    /// Actions pressed since the last `resolve`, kept even if already released.
    latched: HeldActions,
    /// Set once the terminal proves it reports releases; disables the timeout.
    saw_release: bool,
    key_release_timeout_ms: u32,
}

impl HeldActionTracker {
    pub fn new() -> Self {
        Self {
            held: ArrayVec::new(),
            latched: HeldActions::empty(),
            saw_release: false,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn reports_releases(&self) -> bool {
        self.saw_release
    }

    /// Record a key-down. Returns the action if the key is mapped.
    pub fn handle_key_press(&mut self, code: KeyCode, now: Instant) -> Option<Action> {
        let action = action_for_key(code)?;
        self.latched.insert(action);
        self.touch(normalize(code), now);
        Some(action)
    }

    /// Auto-repeat keeps a key alive but does not latch a new press.
    pub fn handle_key_repeat(&mut self, code: KeyCode, now: Instant) {
        if action_for_key(code).is_some() {
            self.touch(normalize(code), now);
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        self.saw_release = true;
        let code = normalize(code);
        self.held.retain(|(k, _)| *k != code);
    }

    /// Actions held at `now`, plus any pressed since the previous call.
    pub fn resolve(&mut self, now: Instant) -> HeldActions {
        if !self.saw_release {
            let timeout = Duration::from_millis(self.key_release_timeout_ms as u64);
            self.held
                .retain(|(_, seen)| now.saturating_duration_since(*seen) <= timeout);
        }

        let mut out = std::mem::take(&mut self.latched);
        for (code, _) in &self.held {
            match action_for_key(*code) {
                // Without release events a held jump key re-latches through
                // repeated presses; the timeout would outlast a whole arc.
                Some(Action::Jump) if !self.saw_release => {}
                Some(action) => out.insert(action),
                None => {}
            }
        }
        out
    }

    pub fn reset(&mut self) {
        self.held.clear();
        self.latched = HeldActions::empty();
    }

    fn touch(&mut self, code: KeyCode, now: Instant) {
        if let Some(entry) = self.held.iter_mut().find(|(k, _)| *k == code) {
            entry.1 = now;
        } else {
            let _ = self.held.try_push((code, now));
        }
    }
}

impl Default for HeldActionTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Shift changes the reported char between press and release.
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}
