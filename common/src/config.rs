use std::{env, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::constants::{
    BREAK_CHANCE_VAR, COLS_VAR, DEFAULT_BREAK_CHANCE, DEFAULT_COLS, DEFAULT_RANDOMNESS,
    DEFAULT_ROWS, RANDOMNESS_VAR, ROWS_VAR,
};
use crate::maze::{ConfigError, error::probability, grid::checked_len};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub cols: usize,
    pub rows: usize,
    pub randomness: f64,
    pub break_chance: f64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        MazeConfig {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            randomness: DEFAULT_RANDOMNESS,
            break_chance: DEFAULT_BREAK_CHANCE,
        }
    }
}

impl MazeConfig {
    /// Reads the `MAZE_*` variables, after loading a `.env` file if there is one. Unset variables
    /// keep their defaults. Values are parsed but not validated, so that later overrides can still
    /// replace them; call [`MazeConfig::validate`] once the config is final.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(MazeConfig {
            cols: setting(&lookup, COLS_VAR, defaults.cols)?,
            rows: setting(&lookup, ROWS_VAR, defaults.rows)?,
            randomness: setting(&lookup, RANDOMNESS_VAR, defaults.randomness)?,
            break_chance: setting(&lookup, BREAK_CHANCE_VAR, defaults.break_chance)?,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        checked_len(self.cols, self.rows)?;
        probability("randomness", self.randomness)?;
        probability("break_chance", self.break_chance)?;

        Ok(())
    }
}

fn setting<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    let Some(value) = lookup(key) else {
        return Ok(default);
    };

    let parsed = value.trim().parse::<T>().ok();
    parsed.ok_or(ConfigError::InvalidSetting { key, value })
}
