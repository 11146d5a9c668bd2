//! Game configuration and its validation.

use thiserror::Error;

use crate::types::{MAX_COLUMNS, NUM_COLUMNS, SPAWN_COOLDOWN_MAX_MS, SPAWN_COOLDOWN_MIN_MS};

/// Rejected configuration. Raised by [`GameConfig::validate`] before a game starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("spawn cooldown bounds are inverted: min {min}ms > max {max}ms")]
    InvalidSpawnBounds { min: u32, max: u32 },
    #[error("column count {0} out of range (2..={max})", max = MAX_COLUMNS)]
    InvalidColumns(u16),
}

/// Tunables for one run of the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Lanes from the character (0) to the spawn column (`columns - 1`).
    pub columns: u16,
    /// Lower bound of the randomized spawn cooldown (inclusive).
    pub spawn_cooldown_min_ms: u32,
    /// Upper bound of the randomized spawn cooldown (exclusive).
    pub spawn_cooldown_max_ms: u32,
    /// Seed for cooldown rolls.
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: NUM_COLUMNS,
            spawn_cooldown_min_ms: SPAWN_COOLDOWN_MIN_MS,
            spawn_cooldown_max_ms: SPAWN_COOLDOWN_MAX_MS,
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Create from environment variables, falling back to defaults.
    ///
    /// - `DINO_COLUMNS`
    /// - `DINO_SPAWN_MIN_MS` / `DINO_SPAWN_MAX_MS`
    /// - `DINO_SEED`
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();
        Self {
            columns: env_parse(env::var("DINO_COLUMNS").ok()).unwrap_or(defaults.columns),
            spawn_cooldown_min_ms: env_parse(env::var("DINO_SPAWN_MIN_MS").ok())
                .unwrap_or(defaults.spawn_cooldown_min_ms),
            spawn_cooldown_max_ms: env_parse(env::var("DINO_SPAWN_MAX_MS").ok())
                .unwrap_or(defaults.spawn_cooldown_max_ms),
            seed: env_parse(env::var("DINO_SEED").ok()).unwrap_or(defaults.seed),
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_columns(mut self, columns: u16) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_spawn_cooldown(mut self, min_ms: u32, max_ms: u32) -> Self {
        self.spawn_cooldown_min_ms = min_ms;
        self.spawn_cooldown_max_ms = max_ms;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spawn_cooldown_min_ms > self.spawn_cooldown_max_ms {
            return Err(ConfigError::InvalidSpawnBounds {
                min: self.spawn_cooldown_min_ms,
                max: self.spawn_cooldown_max_ms,
            });
        }
        if self.columns < 2 || self.columns as usize > MAX_COLUMNS {
            return Err(ConfigError::InvalidColumns(self.columns));
        }
        Ok(())
    }

    /// Lane offset where new obstacles appear.
    pub fn spawn_offset(&self) -> u16 {
        self.columns - 1
    }
}

/// Parse a trimmed env value; empty or malformed values count as unset.
pub fn env_parse<T: std::str::FromStr>(raw: Option<String>) -> Option<T> {
    raw.and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.spawn_offset(), NUM_COLUMNS - 1);
    }

    #[test]
    fn inverted_spawn_bounds_are_rejected() {
        let cfg = GameConfig::default().with_spawn_cooldown(2000, 1000);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidSpawnBounds {
                min: 2000,
                max: 1000
            })
        );
    }

    #[test]
    fn equal_spawn_bounds_are_allowed() {
        let cfg = GameConfig::default().with_spawn_cooldown(1000, 1000);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn column_count_is_bounded() {
        assert_eq!(
            GameConfig::default().with_columns(1).validate(),
            Err(ConfigError::InvalidColumns(1))
        );
        assert!(GameConfig::default().with_columns(2).validate().is_ok());
        assert!(GameConfig::default()
            .with_columns(MAX_COLUMNS as u16 + 1)
            .validate()
            .is_err());
    }

    #[test]
    fn env_parse_ignores_blank_and_garbage() {
        assert_eq!(env_parse::<u32>(Some(" 42 ".to_string())), Some(42));
        assert_eq!(env_parse::<u32>(Some("".to_string())), None);
        assert_eq!(env_parse::<u32>(Some("fast".to_string())), None);
        assert_eq!(env_parse::<u32>(None), None);
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = ConfigError::InvalidSpawnBounds { min: 5, max: 1 };
        assert!(err.to_string().contains("min 5ms > max 1ms"));
        assert!(ConfigError::InvalidColumns(0).to_string().contains("out of range"));
    }
}
