use std::ops::RangeInclusive;
use std::time::Duration;

use crate::SortVariant;
use crate::error::ConfigError;

pub const DEFAULT_PITY_MIN: u32 = 5;
pub const DEFAULT_PITY_MAX: u32 = 10;
pub const DEFAULT_RESHUFFLE_INTERVAL: u64 = 50_000;
pub const DEFAULT_BATCH_SIZE: usize = 10_000;
pub const DEFAULT_PROGRESS_PASSES: u64 = 100_000;
/// Batched passes are whole batches, so its default cadence counts far fewer of them.
pub const DEFAULT_BATCHED_PROGRESS_PASSES: u64 = 100;

/// Inputs at least this long are routed to the batched variant by [`SortVariant::Auto`].
pub const LARGE_INPUT_THRESHOLD: usize = 100_000;

/// Closed range `[min, max]` the per-item pity threshold is drawn from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct PityRange {
    pub min: u32,
    pub max: u32,
}

impl PityRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn validate(self) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::PityRangeInverted {
                min: self.min,
                max: self.max,
            });
        }
        if self.min == 0 {
            return Err(ConfigError::NonPositivePity { min: self.min });
        }
        Ok(())
    }

    #[inline]
    pub fn as_range(self) -> RangeInclusive<u32> {
        self.min..=self.max
    }
}

impl Default for PityRange {
    fn default() -> Self {
        Self::new(DEFAULT_PITY_MIN, DEFAULT_PITY_MAX)
    }
}

/// How often the reintegration loop emits a progress snapshot.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ProgressCadence {
    /// [`DEFAULT_PROGRESS_PASSES`] for the naive variant,
    /// [`DEFAULT_BATCHED_PROGRESS_PASSES`] for the batched one.
    #[default]
    Auto,
    /// Every `n` passes. A pass is one item (naive) or one batch (batched).
    EveryPasses(u64),
    /// At most once per wall-clock interval.
    Interval(Duration),
    Never,
}

impl ProgressCadence {
    /// Replaces `Auto` with the pass cadence of the variant that runs.
    pub fn resolve(self, variant: SortVariant) -> Self {
        match (self, variant) {
            (Self::Auto, SortVariant::Batched) => {
                Self::EveryPasses(DEFAULT_BATCHED_PROGRESS_PASSES)
            }
            (Self::Auto, SortVariant::Naive | SortVariant::Auto) => {
                Self::EveryPasses(DEFAULT_PROGRESS_PASSES)
            }
            (other, _) => other,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SortConfig {
    pub variant: SortVariant,
    pub pity_range: PityRange,
    /// Naive variant only.
    pub reshuffle_interval: u64,
    /// Batched variant only.
    pub batch_size: usize,
    /// `None` seeds the generator from OS entropy.
    pub seed: Option<u64>,
    pub progress: ProgressCadence,
    pub record_insertions: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            variant: SortVariant::Auto,
            pity_range: PityRange::default(),
            reshuffle_interval: DEFAULT_RESHUFFLE_INTERVAL,
            batch_size: DEFAULT_BATCH_SIZE,
            seed: None,
            progress: ProgressCadence::default(),
            record_insertions: false,
        }
    }
}

impl SortConfig {
    pub fn with_variant(mut self, variant: SortVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_pity_range(mut self, min: u32, max: u32) -> Self {
        self.pity_range = PityRange::new(min, max);
        self
    }

    pub fn with_reshuffle_interval(mut self, interval: u64) -> Self {
        self.reshuffle_interval = interval;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_progress(mut self, progress: ProgressCadence) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_insertion_log(mut self) -> Self {
        self.record_insertions = true;
        self
    }

    /// Checks every bound the engine relies on. Parameters of the variant that is not
    /// selected are still checked, so a config stays valid when `Auto` switches variant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pity_range.validate()?;
        if self.reshuffle_interval == 0 {
            return Err(ConfigError::ZeroReshuffleInterval);
        }
        if self.batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }
        Ok(())
    }

    /// Resolves [`SortVariant::Auto`] against the input length.
    pub fn resolve_variant(&self, len: usize) -> SortVariant {
        match self.variant {
            SortVariant::Auto if len >= LARGE_INPUT_THRESHOLD => SortVariant::Batched,
            SortVariant::Auto => SortVariant::Naive,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(SortConfig::default().validate(), Ok(()));
    }

    #[test]
    fn pity_range_bounds() {
        assert_eq!(
            PityRange::new(10, 5).validate(),
            Err(ConfigError::PityRangeInverted { min: 10, max: 5 })
        );
        assert_eq!(
            PityRange::new(0, 5).validate(),
            Err(ConfigError::NonPositivePity { min: 0 })
        );
        assert_eq!(PityRange::new(3, 3).validate(), Ok(()));
    }

    #[test]
    fn zero_intervals_are_rejected() {
        let config = SortConfig::default().with_reshuffle_interval(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroReshuffleInterval));

        let config = SortConfig::default().with_batch_size(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroBatchSize));
    }

    #[test]
    fn auto_cadence_depends_on_variant() {
        let cadence = ProgressCadence::default();
        assert_eq!(
            cadence.resolve(SortVariant::Naive),
            ProgressCadence::EveryPasses(DEFAULT_PROGRESS_PASSES)
        );
        assert_eq!(
            cadence.resolve(SortVariant::Batched),
            ProgressCadence::EveryPasses(DEFAULT_BATCHED_PROGRESS_PASSES)
        );
        assert_eq!(
            ProgressCadence::Never.resolve(SortVariant::Batched),
            ProgressCadence::Never
        );
        assert_eq!(
            ProgressCadence::EveryPasses(7).resolve(SortVariant::Naive),
            ProgressCadence::EveryPasses(7)
        );
    }

    #[test]
    fn auto_variant_switches_on_length() {
        let config = SortConfig::default();
        assert_eq!(config.resolve_variant(0), SortVariant::Naive);
        assert_eq!(
            config.resolve_variant(LARGE_INPUT_THRESHOLD - 1),
            SortVariant::Naive
        );
        assert_eq!(
            config.resolve_variant(LARGE_INPUT_THRESHOLD),
            SortVariant::Batched
        );

        let forced = SortConfig::default().with_variant(SortVariant::Naive);
        assert_eq!(
            forced.resolve_variant(LARGE_INPUT_THRESHOLD * 2),
            SortVariant::Naive
        );
    }
}
