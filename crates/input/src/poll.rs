//! Pull-based input: ask "is this key down?" for every mapped key once per tick.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::KeyCode;

use crate::engine::{InputSource, Signal};
use crate::map::{action_for_key, MAPPED_KEYS};
use crate::types::HeldActions;

/// A keyboard facility that can be queried for current key state.
pub trait KeyPoller {
    fn is_pressed(&self, key: KeyCode) -> bool;

    /// Whether the user asked to stop.
    fn interrupt_requested(&self) -> bool {
        false
    }
}

/// Input source backed by a [`KeyPoller`].
///
/// Produces the same [`HeldActions`] as the event-driven tracker, but only
/// sees keys that are down at the instant of the query.
#[derive(Debug)]
pub struct PollingInput<P> {
    poller: P,
}

impl<P: KeyPoller> PollingInput<P> {
    pub fn new(poller: P) -> Self {
        Self { poller }
    }

    pub fn poller(&self) -> &P {
        &self.poller
    }

    pub fn resolve(&self) -> HeldActions {
        MAPPED_KEYS
            .iter()
            .filter(|&&key| self.poller.is_pressed(key))
            .filter_map(|&key| action_for_key(key))
            .collect()
    }
}

impl<P: KeyPoller> InputSource for PollingInput<P> {
    fn pump(&mut self, timeout: Duration) -> Result<Signal> {
        if self.poller.interrupt_requested() {
            return Ok(Signal::Interrupt);
        }
        if !timeout.is_zero() {
            std::thread::sleep(timeout);
        }
        Ok(Signal::Continue)
    }

    fn held_actions(&mut self, _now: Instant) -> HeldActions {
        self.resolve()
    }
}
