use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("maze dimensions must be positive and fit in memory, got {cols}x{rows}")]
    InvalidDimensions { cols: usize, rows: usize },
    #[error("{name} must be between 0 and 1, got {value}")]
    InvalidProbability { name: &'static str, value: f64 },
    #[error("could not parse {key}={value:?}")]
    InvalidSetting { key: &'static str, value: String },
    #[error("grid has already been generated or had walls removed")]
    AlreadyGenerated,
}

/// Accepts `value` if it is a probability. NaN is rejected.
pub fn probability(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidProbability { name, value })
    }
}
