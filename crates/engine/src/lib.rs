//! Frame scheduler and game loop.
//!
//! Bridges wall-clock time and terminal I/O to the discrete ticks of
//! [`tui_dino_core::GameState`]. The loop is single-threaded and cooperative:
//! input is pumped while waiting for the next deadline, one tick runs when it
//! is due, and the display is rendered right after it.
//!
//! The I/O collaborators are traits ([`InputSource`], [`Display`], [`Clock`])
//! so the loop can be driven headless in tests.

pub mod game_loop;
pub mod policy;
pub mod scheduler;

pub use tui_dino_core as core;
pub use tui_dino_types as types;

pub use game_loop::{open_display, run, Display, InputSource, RunOutcome, Signal};
pub use policy::FramePolicy;
pub use scheduler::{Clock, FrameScheduler, ManualClock, SystemClock};
