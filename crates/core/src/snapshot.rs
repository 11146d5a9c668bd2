use arrayvec::ArrayVec;

use crate::types::{MAX_COLUMNS, NUM_COLUMNS};

/// Read-only projection of [`crate::GameState`] handed to renderers.
///
/// Obstacles are stored inline so taking a snapshot every frame never allocates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub jump_stage: i8,
    /// Obstacle offsets, nearest first.
    pub obstacles: ArrayVec<u16, MAX_COLUMNS>,
    pub score: u32,
    pub game_over: bool,
    pub columns: u16,
    pub ticks: u64,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// True while the character is in the air.
    pub fn airborne(&self) -> bool {
        self.jump_stage > 0
    }

    pub fn ducking(&self) -> bool {
        self.jump_stage < 0
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            jump_stage: 0,
            obstacles: ArrayVec::new(),
            score: 0,
            game_over: false,
            columns: NUM_COLUMNS,
            ticks: 0,
        }
    }
}
