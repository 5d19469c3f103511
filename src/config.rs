//! Loading the adventure's level table from TOML.
//!
//! Every field has a default, so an empty file yields the stock three-level
//! game. Example:
//!
//! ```toml
//! player_name = "Sam"
//!
//! [[levels]]
//! id = 1
//! min_digit = 2
//! max_digit = 5
//! problems_to_solve = 3
//! time_per_problem = 20
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::problem_engine::{ConfigError, LevelConfig, ELEVEN};
use crate::session::MAX_ANSWER_DIGITS;

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_ENV: &str = "ADVENTURE_CONFIG_PATH";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_player_name")]
    pub player_name: String,
    #[serde(default = "default_levels")]
    pub levels: Vec<LevelConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: default_player_name(),
            levels: default_levels(),
        }
    }
}

fn default_player_name() -> String {
    "Explorer".into()
}

fn default_levels() -> Vec<LevelConfig> {
    vec![
        LevelConfig {
            id: 1,
            name: "Forest of Facts".into(),
            description: "Help Alex navigate through the magical forest by solving multiplication problems!".into(),
            min_digit: 1,
            max_digit: 10,
            multiplier: None,
            problems_to_solve: 5,
            time_per_problem: 30,
            focus: "basic multiplication".into(),
            companion: "Felix the Fox".into(),
        },
        LevelConfig {
            id: 2,
            name: "Eleven's Canyon".into(),
            description: "Discover the special pattern of multiplying by 11 to cross the canyon!".into(),
            min_digit: 1,
            max_digit: 9,
            multiplier: Some(ELEVEN),
            problems_to_solve: 5,
            time_per_problem: 30,
            focus: "multiplying by 11 (single digits)".into(),
            companion: "Eddie the Eagle".into(),
        },
        LevelConfig {
            id: 3,
            name: "Mystic Mountain".into(),
            description: "Climb the mountain using the power of multiplying two-digit numbers by 11!".into(),
            min_digit: 10,
            max_digit: 99,
            multiplier: Some(ELEVEN),
            problems_to_solve: 5,
            time_per_problem: 45,
            focus: "multiplying by 11 (two digits)".into(),
            companion: "Oliver the Owl".into(),
        },
    ]
}

impl GameConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let s = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&s)
    }

    /// Load from `ADVENTURE_CONFIG_PATH` if set. Any read or parse failure is
    /// logged and the built-in levels are used instead.
    pub fn load_from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_PATH_ENV) else {
            return Self::default();
        };
        match Self::load_from_path(&path) {
            Ok(cfg) => {
                info!(target: "multiply_adventure", %path, levels = cfg.levels.len(), "Loaded game config (TOML)");
                cfg
            }
            Err(e) => {
                error!(target: "multiply_adventure", %path, error = %e, "Failed to load game config, using defaults");
                Self::default()
            }
        }
    }

    /// Levels must be numbered 1, 2, 3, ... in order, and each must be playable:
    /// every answer it can ask for has to fit in the answer box.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.levels.is_empty() {
            return Err(ConfigError::NoLevels);
        }
        for (index, level) in self.levels.iter().enumerate() {
            let expected = index as u32 + 1;
            if level.id != expected {
                return Err(ConfigError::LevelIdMismatch { index, expected, found: level.id });
            }
            level.validate()?;
            let max_answer = level.max_answer();
            if max_answer >= 10u64.pow(MAX_ANSWER_DIGITS as u32) {
                return Err(ConfigError::AnswerTooLong {
                    level: level.id,
                    max_answer,
                    max_digits: MAX_ANSWER_DIGITS,
                });
            }
        }
        Ok(())
    }

    pub fn total_levels(&self) -> u32 {
        self.levels.len() as u32
    }

    /// Config for a 1-based level number.
    pub fn level(&self, level: u32) -> Result<&LevelConfig, ConfigError> {
        level
            .checked_sub(1)
            .and_then(|i| self.levels.get(i as usize))
            .ok_or(ConfigError::UnknownLevel { level, total: self.total_levels() })
    }
}
