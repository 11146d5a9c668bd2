//! Frame interval policies.

use std::time::Duration;

use tui_dino_core::config::env_parse;

use crate::types::{BASE_FRAME_MS, FRAMERATE, FRAME_RAMP_DIVISOR, MIN_FRAME_MS};

/// How long the scheduler waits between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePolicy {
    /// Constant `1000 / framerate` ms. Kept as the legacy mode.
    Fixed { framerate: u32 },
    /// `base_ms - elapsed_ms / ramp_divisor`, never below `floor_ms`.
    ///
    /// The game speeds up the longer it runs. `ramp_divisor = 1` removes one
    /// millisecond of interval per millisecond of play.
    Shrinking {
        base_ms: u32,
        floor_ms: u32,
        ramp_divisor: u32,
    },
}

impl Default for FramePolicy {
    fn default() -> Self {
        FramePolicy::Shrinking {
            base_ms: BASE_FRAME_MS,
            floor_ms: MIN_FRAME_MS,
            ramp_divisor: FRAME_RAMP_DIVISOR,
        }
    }
}

impl FramePolicy {
    pub fn fixed(framerate: u32) -> Self {
        FramePolicy::Fixed { framerate }
    }

    /// Create from environment variables.
    ///
    /// `DINO_FRAME_POLICY=fixed` selects [`FramePolicy::Fixed`] with
    /// `DINO_FRAMERATE`; anything else selects [`FramePolicy::Shrinking`] with
    /// `DINO_BASE_FRAME_MS`, `DINO_MIN_FRAME_MS` and `DINO_FRAME_RAMP_DIVISOR`.
    pub fn from_env() -> Self {
        use std::env;

        let mode = env::var("DINO_FRAME_POLICY")
            .map(|v| v.trim().to_lowercase())
            .unwrap_or_default();

        if mode == "fixed" {
            return FramePolicy::Fixed {
                framerate: env_parse(env::var("DINO_FRAMERATE").ok()).unwrap_or(FRAMERATE),
            };
        }

        FramePolicy::Shrinking {
            base_ms: env_parse(env::var("DINO_BASE_FRAME_MS").ok()).unwrap_or(BASE_FRAME_MS),
            floor_ms: env_parse(env::var("DINO_MIN_FRAME_MS").ok()).unwrap_or(MIN_FRAME_MS),
            ramp_divisor: env_parse(env::var("DINO_FRAME_RAMP_DIVISOR").ok())
                .unwrap_or(FRAME_RAMP_DIVISOR),
        }
    }

    /// Target interval given the time elapsed since the game started.
    ///
    /// Always at least 1ms so a misconfigured policy cannot spin the loop.
    pub fn interval(&self, elapsed: Duration) -> Duration {
        let ms = match *self {
            FramePolicy::Fixed { framerate } => 1000 / framerate.max(1) as u64,
            FramePolicy::Shrinking {
                base_ms,
                floor_ms,
                ramp_divisor,
            } => {
                let shaved = elapsed.as_millis() as u64 / ramp_divisor.max(1) as u64;
                (base_ms as u64).saturating_sub(shaved).max(floor_ms as u64)
            }
        };
        Duration::from_millis(ms.max(1))
    }
}
