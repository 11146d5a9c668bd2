//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the runner's rules and state. It has **zero
//! dependencies** on terminals, input devices or clocks: time enters only as
//! the `now_ms` argument of [`GameState::tick`], which makes every rule
//! reproducible in a unit test.
//!
//! # Module Structure
//!
//! - [`config`]: tunables (`GameConfig`) and their validation (`ConfigError`)
//! - [`game_state`]: the owned game aggregate and its tick rule
//! - [`rng`]: seedable LCG used for spawn cooldown rolls
//! - [`snapshot`]: allocation-free read-only view for renderers
//!
//! # Game Rules
//!
//! - **Jump arc**: a jump lasts exactly three ticks (rising, peak, landing) and
//!   cannot be cancelled or re-triggered mid-arc
//! - **Duck**: lowers the character only while held and only on the ground
//! - **Obstacles**: advance one lane per tick; one reaching lane 0 ends the run
//!   unless the character is airborne on that tick
//! - **Spawning**: a new obstacle appears at the far lane once a randomized
//!   wall-clock cooldown has elapsed
//! - **Score**: +1 for every tick survived
//!
//! # Example
//!
//! ```
//! use tui_dino_core::{GameConfig, GameState};
//! use tui_dino_types::{Action, HeldActions};
//!
//! let mut game = GameState::new(GameConfig::default()).unwrap();
//! game.spawn_obstacle_at(2);
//!
//! game.tick(HeldActions::empty(), 0);
//! game.tick(HeldActions::empty().with(Action::Jump), 80);
//!
//! // Cleared the obstacle mid-jump.
//! assert!(!game.game_over());
//! assert_eq!(game.score(), 2);
//! ```

pub mod config;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_dino_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameConfig};
pub use game_state::{GameState, TickEvents};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
