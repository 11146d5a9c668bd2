//! Terminal input module (engine-facing).
//!
//! This module maps `crossterm` key events into [`crate::types::Action`]s and
//! resolves them into the held action set the engine reads every tick. Two
//! models are provided:
//!
//! - [`CrosstermInput`]: event-driven. Key down/up events maintain a persistent
//!   held set ([`HeldActionTracker`]); terminals without key-release events
//!   fall back to a timeout.
//! - [`PollingInput`]: pull-based. Every mapped key is queried through a
//!   [`KeyPoller`] once per tick.
//!
//! The event model is tap-preserving: a key pressed and released between two
//! ticks still counts once. The polling model only sees keys that are down
//! when it is queried, so such a tap is lost there.
//!
//! Both run on the loop thread, so the held set is never shared across threads.

pub mod handler;
pub mod map;
pub mod poll;
pub mod source;

pub use tui_dino_engine as engine;
pub use tui_dino_types as types;

pub use handler::HeldActionTracker;
pub use map::{action_for_key, should_quit, MAPPED_KEYS};
pub use poll::{KeyPoller, PollingInput};
pub use source::CrosstermInput;
