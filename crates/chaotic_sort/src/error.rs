use thiserror::Error;

/// A configuration value the sort refuses to run with.
#[derive(Debug, Clone, Copy, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("pity range is inverted: min {min} > max {max}")]
    PityRangeInverted { min: u32, max: u32 },

    #[error("pity threshold must be positive, got min {min}")]
    NonPositivePity { min: u32 },

    #[error("reshuffle interval must be greater than zero")]
    ZeroReshuffleInterval,

    #[error("batch size must be greater than zero")]
    ZeroBatchSize,
}

#[derive(Debug, Error)]
pub enum SortError {
    /// Rejected before the input is touched.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("failed to spawn sort worker: {0}")]
    Spawn(#[source] std::io::Error),
}

impl SortError {
    pub fn config_error(&self) -> Option<ConfigError> {
        match self {
            Self::InvalidConfiguration(err) => Some(*err),
            Self::Spawn(_) => None,
        }
    }
}
