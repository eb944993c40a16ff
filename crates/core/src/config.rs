//! Game tuning: fall intervals and the fast-piece chance.

use std::fmt;

use serde::Deserialize;

use crate::types::{BASE_TICK_MS, FAST_PIECE_CHANCE, FAST_TICK_MS, GAME_OVER_TICK_MS};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Fall interval of a normal piece (ms)
    pub normal_interval_ms: u32,
    /// Fall interval of a fast piece (ms)
    pub fast_interval_ms: u32,
    /// Tick cadence while the game is over (ms)
    pub game_over_interval_ms: u32,
    /// Probability that a spawned piece is fast
    pub fast_piece_chance: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            normal_interval_ms: BASE_TICK_MS,
            fast_interval_ms: FAST_TICK_MS,
            game_over_interval_ms: GAME_OVER_TICK_MS,
            fast_piece_chance: FAST_PIECE_CHANCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroInterval(&'static str),
    ChanceOutOfRange(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroInterval(field) => write!(f, "{} must be greater than 0", field),
            ConfigError::ChanceOutOfRange(v) => {
                write!(f, "fast_piece_chance must be within 0.0..=1.0, got {}", v)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let intervals = [
            ("normal_interval_ms", self.normal_interval_ms),
            ("fast_interval_ms", self.fast_interval_ms),
            ("game_over_interval_ms", self.game_over_interval_ms),
        ];
        if let Some((field, _)) = intervals.iter().find(|(_, v)| *v == 0) {
            return Err(ConfigError::ZeroInterval(*field));
        }
        if !(0.0..=1.0).contains(&self.fast_piece_chance) {
            return Err(ConfigError::ChanceOutOfRange(self.fast_piece_chance));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = GameConfig::default();
        assert_eq!(config.normal_interval_ms, 450);
        assert_eq!(config.fast_interval_ms, 80);
        assert_eq!(config.game_over_interval_ms, 250);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = GameConfig {
            fast_interval_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroInterval("fast_interval_ms"))
        );
    }

    #[test]
    fn test_chance_out_of_range_rejected() {
        for chance in [-0.1, 1.5, f64::NAN] {
            let config = GameConfig {
                fast_piece_chance: chance,
                ..GameConfig::default()
            };
            assert!(config.validate().is_err(), "chance {} accepted", chance);
        }
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "fast_interval_ms": 60 }"#).unwrap();
        assert_eq!(config.fast_interval_ms, 60);
        assert_eq!(config.normal_interval_ms, 450);
        assert!((config.fast_piece_chance - 0.18).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_json_field_rejected() {
        let parsed = serde_json::from_str::<GameConfig>(r#"{ "level": 3 }"#);
        assert!(parsed.is_err());
    }
}
