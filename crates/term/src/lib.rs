//! Terminal "game renderer" module.
//!
//! This is the display collaborator of the game loop. It renders snapshots
//! into a simple framebuffer that is diffed and flushed to a terminal backend,
//! so the engine stays deterministic and testable.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_dino_core as core;
pub use tui_dino_engine as engine;
pub use tui_dino_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{character_pose, AnchorY, GameView, Pose, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalDisplay, TerminalRenderer};
