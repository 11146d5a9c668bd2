//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine rules, scheduling, terminal rendering).
//!
//! # Playfield Dimensions
//!
//! The runner lane is a small grid of monospace cells:
//!
//! - **Columns**: 5 lanes (indexed 0-4); the character always stands in lane 0
//! - **Rows**: 5 rows (indexed 0-4); row 4 is the ground
//! - **Column width**: 3 terminal characters per lane
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAMERATE` | 12 | Ticks per second in fixed-interval mode |
//! | `BASE_FRAME_MS` | 120 | Starting tick interval in shrinking mode |
//! | `MIN_FRAME_MS` | 40 | Floor of the shrinking tick interval |
//! | `FRAME_RAMP_DIVISOR` | 1000 | Game ms per 1ms of interval shaved |
//! | `SPAWN_COOLDOWN_MIN_MS` | 900 | Shortest gap between obstacle spawns |
//! | `SPAWN_COOLDOWN_MAX_MS` | 2400 | Longest gap between obstacle spawns |
//!
//! # Examples
//!
//! ```
//! use tui_dino_types::{Action, HeldActions, NUM_COLUMNS};
//!
//! let held = HeldActions::empty().with(Action::Jump);
//! assert!(held.contains(Action::Jump));
//! assert!(!held.contains(Action::Duck));
//!
//! assert_eq!(Action::from_str("duck"), Some(Action::Duck));
//! assert_eq!(NUM_COLUMNS, 5);
//! ```

/// Number of lanes between the spawn column and the character (inclusive).
pub const NUM_COLUMNS: u16 = 5;

/// Number of rows in the playfield; the last row is the ground.
pub const NUM_ROWS: u16 = 5;

/// Terminal characters per lane.
pub const COLUMN_WIDTH: u16 = 3;

/// Upper bound on lanes; obstacles are stored inline up to this count.
pub const MAX_COLUMNS: usize = 64;

/// Ticks per second in fixed-interval mode.
pub const FRAMERATE: u32 = 12;

/// Starting tick interval in shrinking-interval mode.
pub const BASE_FRAME_MS: u32 = 120;

/// The shrinking interval never drops below this.
pub const MIN_FRAME_MS: u32 = 40;

/// Elapsed game milliseconds per millisecond removed from the tick interval.
pub const FRAME_RAMP_DIVISOR: u32 = 1000;

/// Shortest randomized delay before the next obstacle may spawn.
pub const SPAWN_COOLDOWN_MIN_MS: u32 = 900;

/// Longest randomized delay before the next obstacle may spawn (exclusive).
pub const SPAWN_COOLDOWN_MAX_MS: u32 = 2400;

/// Jump stage at which the arc resolves back to the ground.
pub const JUMP_ARC_END: i8 = 3;

/// Jump stage encoding a ducking pose.
pub const DUCK_STAGE: i8 = -1;

/// Glyph for the character.
pub const DINO_CHAR: char = '◼';

/// Glyph for a ground obstacle.
pub const OBSTACLE_CHAR: char = '▲';


/// Logical actions the character can perform
///
/// Raw keys are mapped many-to-one onto these; the engine only ever sees
/// actions, never keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Start a jump arc (ignored while already airborne)
    Jump,
    /// Lower the profile while held (ignored while airborne)
    Duck,
}

impl Action {
    /// All actions, in a stable order.
    pub const ALL: [Action; 2] = [Action::Jump, Action::Duck];

    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_dino_types::Action;
    ///
    /// assert_eq!(Action::from_str("JUMP"), Some(Action::Jump));
    /// assert_eq!(Action::from_str("crawl"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "jump" => Some(Action::Jump),
            "duck" => Some(Action::Duck),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Jump => "jump",
            Action::Duck => "duck",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Action::Jump => 0b01,
            Action::Duck => 0b10,
        }
    }
}

/// The set of actions held at the moment a tick runs.
///
/// Stored as a bitset so it is `Copy` and can be rebuilt every tick for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HeldActions {
    bits: u8,
}

impl HeldActions {
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Builder-style insert.
    pub fn with(mut self, action: Action) -> Self {
        self.insert(action);
        self
    }

    pub fn insert(&mut self, action: Action) {
        self.bits |= action.bit();
    }

    pub fn remove(&mut self, action: Action) {
        self.bits &= !action.bit();
    }

    pub fn contains(&self, action: Action) -> bool {
        self.bits & action.bit() != 0
    }

    pub fn union(self, other: HeldActions) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Action> {
        let held = *self;
        Action::ALL.into_iter().filter(move |a| held.contains(*a))
    }
}

impl FromIterator<Action> for HeldActions {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        let mut held = HeldActions::empty();
        for action in iter {
            held.insert(action);
        }
        held
    }
}
