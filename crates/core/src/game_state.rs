//! Game state module - owns the run and its tick rule
//!
//! Every tick evaluates, in order:
//!
//! 1. the character's vertical state (jump arc / duck / run),
//! 2. obstacle advance and collision at the character's column,
//! 3. obstacle spawning, gated by a randomized wall-clock cooldown,
//! 4. scoring.
//!
//! Collision reads the jump stage written by step 1 of the same tick, so the
//! order is part of the rules, not an implementation detail.

use std::collections::VecDeque;

use crate::config::{ConfigError, GameConfig};
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{Action, HeldActions, DUCK_STAGE, JUMP_ARC_END};

/// What a single tick did. Informational only; the state is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickEvents {
    /// An obstacle appeared at the spawn column.
    pub spawned: bool,
    /// Obstacles that reached the character's column and were removed.
    pub arrived: u32,
    /// One of the arriving obstacles hit the character.
    pub collided: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    rng: SimpleRng,
    /// -1 ducking, 0 running, 1..=3 jump arc.
    jump_stage: i8,
    game_over: bool,
    score: u32,
    /// Lane offsets, nearest first. Offsets are strictly increasing.
    obstacles: VecDeque<u16>,
    /// `None` means a fresh cooldown is rolled on the next tick.
    spawn_cooldown_ms: Option<u32>,
    last_spawn_ms: u64,
    ticks: u64,
}

impl GameState {
    /// Create a new run. Malformed configuration is rejected here, never at tick time.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            rng: SimpleRng::new(config.seed),
            config,
            jump_stage: 0,
            game_over: false,
            score: 0,
            obstacles: VecDeque::new(),
            spawn_cooldown_ms: None,
            last_spawn_ms: 0,
            ticks: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn jump_stage(&self) -> i8 {
        self.jump_stage
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn obstacles(&self) -> &VecDeque<u16> {
        &self.obstacles
    }

    pub fn spawn_cooldown_ms(&self) -> Option<u32> {
        self.spawn_cooldown_ms
    }

    pub fn last_spawn_ms(&self) -> u64 {
        self.last_spawn_ms
    }

    /// Place an obstacle directly, keeping nearest-first order.
    ///
    /// Offsets past the spawn column are clamped to it. An obstacle placed at
    /// offset 0 is resolved against the character on the next tick.
    pub fn spawn_obstacle_at(&mut self, offset: u16) {
        let offset = offset.min(self.config.spawn_offset());
        let idx = self.obstacles.partition_point(|&o| o <= offset);
        self.obstacles.insert(idx, offset);
    }

    /// Force a vertical pose, e.g. to start a scenario mid-jump.
    pub fn set_jump_stage(&mut self, stage: i8) {
        self.jump_stage = stage.clamp(DUCK_STAGE, JUMP_ARC_END);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.jump_stage = self.jump_stage;
        out.obstacles.clear();
        for &offset in &self.obstacles {
            let _ = out.obstacles.try_push(offset);
        }
        out.score = self.score;
        out.game_over = self.game_over;
        out.columns = self.config.columns;
        out.ticks = self.ticks;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance the game by one tick.
    ///
    /// `now_ms` is wall-clock time since the game started; it only gates
    /// spawning, so spawn cadence does not depend on the tick rate.
    ///
    /// Once the game is over the state is terminal and further calls do nothing.
    pub fn tick(&mut self, held: HeldActions, now_ms: u64) -> TickEvents {
        let mut events = TickEvents::default();
        if self.game_over {
            return events;
        }

        self.update_jump_stage(held);
        self.advance_obstacles(&mut events);
        self.update_spawn(now_ms, &mut events);

        if !self.game_over {
            self.score += 1;
        }
        self.ticks += 1;
        events
    }

    fn update_jump_stage(&mut self, held: HeldActions) {
        self.jump_stage = if self.jump_stage == JUMP_ARC_END {
            0
        } else if self.jump_stage > 0 {
            // Mid-arc: a jump cannot be cancelled or re-triggered.
            self.jump_stage + 1
        } else if held.contains(Action::Jump) && self.jump_stage == 0 {
            1
        } else if held.contains(Action::Duck) {
            DUCK_STAGE
        } else {
            0
        };
    }

    fn advance_obstacles(&mut self, events: &mut TickEvents) {
        for offset in self.obstacles.iter_mut() {
            *offset = offset.saturating_sub(1);
        }

        while self.obstacles.front() == Some(&0) {
            self.obstacles.pop_front();
            events.arrived += 1;
            // Standing, ducking and landing all share the ground row.
            if self.jump_stage <= 0 {
                self.game_over = true;
                events.collided = true;
            }
        }
    }

    fn update_spawn(&mut self, now_ms: u64, events: &mut TickEvents) {
        let cooldown = match self.spawn_cooldown_ms {
            Some(cooldown) => cooldown,
            None => {
                let cooldown = self.rng.next_between(
                    self.config.spawn_cooldown_min_ms,
                    self.config.spawn_cooldown_max_ms,
                );
                self.spawn_cooldown_ms = Some(cooldown);
                cooldown
            }
        };

        if now_ms.saturating_sub(self.last_spawn_ms) > cooldown as u64 {
            self.obstacles.push_back(self.config.spawn_offset());
            self.spawn_cooldown_ms = None;
            self.last_spawn_ms = now_ms;
            events.spawned = true;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            rng: SimpleRng::new(1),
            config: GameConfig::default(),
            jump_stage: 0,
            game_over: false,
            score: 0,
            obstacles: VecDeque::new(),
            spawn_cooldown_ms: None,
            last_spawn_ms: 0,
            ticks: 0,
        }
    }
}
