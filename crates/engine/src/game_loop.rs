//! The frame loop: input → tick → render, paced by a [`FrameScheduler`].

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, info, warn};

use tui_dino_core::{GameSnapshot, GameState};

use crate::scheduler::{Clock, FrameScheduler};
use crate::types::HeldActions;

/// What the input source saw while the loop was waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    /// Quit key or Ctrl-C. Ends the loop cleanly.
    Interrupt,
}

/// Resolves raw keys into the held action set.
pub trait InputSource {
    /// Wait at most `timeout` for input and fold it into the held state.
    fn pump(&mut self, timeout: Duration) -> Result<Signal>;

    /// Actions held at `now`. Called exactly once per tick.
    fn held_actions(&mut self, now: Instant) -> HeldActions;
}

/// Projects a snapshot onto some output surface.
pub trait Display {
    /// Take over the output surface.
    fn open(&mut self) -> Result<()> {
        Ok(())
    }

    fn render(&mut self, snap: &GameSnapshot) -> Result<()>;

    /// Give the output surface back. `clear` wipes what was drawn.
    fn close(&mut self, _clear: bool) -> Result<()> {
        Ok(())
    }
}

/// Open `display`, restoring it if setup fails part-way.
pub fn open_display<D: Display>(display: &mut D) -> Result<()> {
    if let Err(e) = display.open() {
        if let Err(close_err) = display.close(true) {
            warn!(error = %close_err, "failed to restore display after setup error");
        }
        return Err(e);
    }
    Ok(())
}

/// How the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    GameOver { score: u32, ticks: u64 },
    Interrupted { score: u32, ticks: u64 },
}

impl RunOutcome {
    pub fn score(&self) -> u32 {
        match *self {
            RunOutcome::GameOver { score, .. } | RunOutcome::Interrupted { score, .. } => score,
        }
    }
}

/// Drive `state` until the game ends or input signals an interrupt.
///
/// At most one tick runs per pass and the display is always rendered after the
/// tick it reflects. Closing the display is left to the caller so it happens
/// on every exit path, including errors.
pub fn run<C, I, D>(
    state: &mut GameState,
    scheduler: &mut FrameScheduler,
    clock: &C,
    input: &mut I,
    display: &mut D,
) -> Result<RunOutcome>
where
    C: Clock,
    I: InputSource,
    D: Display,
{
    let mut snap = GameSnapshot::default();
    state.snapshot_into(&mut snap);
    display.render(&snap)?;

    loop {
        let now = clock.now();
        if scheduler.is_due(now) {
            let held = input.held_actions(now);
            let events = state.tick(held, scheduler.elapsed_ms(now));
            scheduler.mark_ticked(now);

            if events.spawned || events.arrived > 0 {
                debug!(
                    tick = state.ticks(),
                    spawned = events.spawned,
                    arrived = events.arrived,
                    collided = events.collided,
                    "obstacles"
                );
            }

            state.snapshot_into(&mut snap);
            display.render(&snap)?;

            if state.game_over() {
                info!(score = state.score(), ticks = state.ticks(), "game over");
                return Ok(RunOutcome::GameOver {
                    score: state.score(),
                    ticks: state.ticks(),
                });
            }
        }

        let timeout = scheduler.time_until_due(clock.now());
        if input.pump(timeout)? == Signal::Interrupt {
            info!(score = state.score(), ticks = state.ticks(), "interrupted");
            return Ok(RunOutcome::Interrupted {
                score: state.score(),
                ticks: state.ticks(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::FramePolicy;
    use crate::scheduler::ManualClock;
    use crate::types::Action;
    use tui_dino_core::GameConfig;

    struct ScriptedInput<'a> {
        clock: &'a ManualClock,
        held: HeldActions,
        interrupt_after: Option<Duration>,
    }

    impl InputSource for ScriptedInput<'_> {
        fn pump(&mut self, timeout: Duration) -> Result<Signal> {
            self.clock.advance(timeout.max(Duration::from_millis(1)));
            match self.interrupt_after {
                Some(at) if self.clock.elapsed() >= at => Ok(Signal::Interrupt),
                _ => Ok(Signal::Continue),
            }
        }

        fn held_actions(&mut self, _now: Instant) -> HeldActions {
            self.held
        }
    }

    #[derive(Default)]
    struct Recorder {
        frames: Vec<GameSnapshot>,
    }

    impl Display for Recorder {
        fn render(&mut self, snap: &GameSnapshot) -> Result<()> {
            self.frames.push(snap.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct FailingOpen {
        closed: Vec<bool>,
    }

    impl Display for FailingOpen {
        fn open(&mut self) -> Result<()> {
            anyhow::bail!("no tty")
        }

        fn render(&mut self, _snap: &GameSnapshot) -> Result<()> {
            Ok(())
        }

        fn close(&mut self, clear: bool) -> Result<()> {
            self.closed.push(clear);
            Ok(())
        }
    }

    #[test]
    fn failed_open_restores_display() {
        let mut display = FailingOpen::default();
        let err = open_display(&mut display).unwrap_err();
        assert_eq!(err.to_string(), "no tty");
        assert_eq!(display.closed, vec![true]);
    }

    #[test]
    fn successful_open_leaves_display_open() {
        let mut display = Recorder::default();
        open_display(&mut display).unwrap();
        assert!(display.frames.is_empty());
    }

    #[test]
    fn interrupt_stops_cleanly() {
        let clock = ManualClock::new();
        let mut state =
            GameState::new(GameConfig::default().with_spawn_cooldown(u32::MAX, u32::MAX)).unwrap();
        let mut sched = FrameScheduler::new(FramePolicy::fixed(10), clock.now());
        let mut input = ScriptedInput {
            clock: &clock,
            held: HeldActions::empty(),
            interrupt_after: Some(Duration::from_millis(450)),
        };
        let mut display = Recorder::default();

        let outcome = run(&mut state, &mut sched, &clock, &mut input, &mut display).unwrap();

        // Ticks at 0, 100, 200, 300, 400.
        assert_eq!(outcome, RunOutcome::Interrupted { score: 5, ticks: 5 });
        // Initial frame plus one per tick.
        assert_eq!(display.frames.len(), 6);
    }

    #[test]
    fn renders_after_every_tick() {
        let clock = ManualClock::new();
        let mut state =
            GameState::new(GameConfig::default().with_spawn_cooldown(u32::MAX, u32::MAX)).unwrap();
        let mut sched = FrameScheduler::new(FramePolicy::fixed(20), clock.now());
        let mut input = ScriptedInput {
            clock: &clock,
            held: HeldActions::empty().with(Action::Duck),
            interrupt_after: Some(Duration::from_millis(120)),
        };
        let mut display = Recorder::default();

        run(&mut state, &mut sched, &clock, &mut input, &mut display).unwrap();

        let ticks: Vec<u64> = display.frames.iter().map(|f| f.ticks).collect();
        assert_eq!(ticks, vec![0, 1, 2, 3]);
        assert!(display.frames[1..].iter().all(|f| f.ducking()));
    }
}
