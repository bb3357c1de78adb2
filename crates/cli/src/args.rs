use std::time::Duration;

use chaotic_sort::{
    DEFAULT_BATCH_SIZE, DEFAULT_PITY_MAX, DEFAULT_PITY_MIN, DEFAULT_RESHUFFLE_INTERVAL,
    ProgressCadence, SortConfig, SortVariant, parse_variant,
};
use clap::Parser;
use thiserror::Error;

/// Seed the sort itself runs with unless told otherwise.
pub const DEFAULT_SORT_SEED: u64 = 42;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ArgsError {
    #[error("array size must be a positive integer")]
    EmptyArray,

    #[error("minimum value {min} is greater than maximum value {max}")]
    InvertedValueRange { min: i64, max: i64 },

    #[error("pity thresholds must be positive integers with min <= max (got {min}..={max})")]
    InvalidPityRange { min: u32, max: u32 },
}

/// Generate a random array and sort it with Chaotic Bureaucratic Sort.
///
/// Out-of-order elements are purged into a queue, each tagged with a random pity
/// threshold, then reintegrated one by one into their sorted position.
#[derive(Parser, Debug)]
#[command(name = "chaotic-sort")]
#[command(about = "Chaotic Bureaucratic Sort")]
pub struct Args {
    /// Number of elements to generate
    #[arg(short = 'n', long, default_value_t = 20)]
    pub size: usize,

    /// Smallest generated value
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub min: i64,

    /// Largest generated value
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub max: i64,

    /// Lower bound of the per-element pity threshold
    #[arg(long, default_value_t = DEFAULT_PITY_MIN)]
    pub pity_min: u32,

    /// Upper bound of the per-element pity threshold
    #[arg(long, default_value_t = DEFAULT_PITY_MAX)]
    pub pity_max: u32,

    /// Reintegration variant: auto, naive or batched
    #[arg(long, default_value = "auto", value_parser = parse_variant_arg)]
    pub variant: SortVariant,

    /// Passes between reshuffles of the pending queue (naive)
    #[arg(long, default_value_t = DEFAULT_RESHUFFLE_INTERVAL)]
    pub reshuffle_interval: u64,

    /// Items reinserted per pass (batched)
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Seed for pity draws and reshuffles
    #[arg(long, default_value_t = DEFAULT_SORT_SEED)]
    pub seed: u64,

    /// Seed for the generated array; random when omitted
    #[arg(long, value_name = "SEED")]
    pub data_seed: Option<u64>,

    /// Passes between progress reports; defaults to 100000 (naive) or 100 batches (batched)
    #[arg(long, value_name = "PASSES")]
    pub progress_every: Option<u64>,

    /// Milliseconds between progress polls
    #[arg(long, default_value_t = 200)]
    pub poll_ms: u64,

    /// Arrays longer than this are summarized instead of printed
    #[arg(long, default_value_t = 1_000)]
    pub print_limit: usize,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_variant_arg(name: &str) -> Result<SortVariant, String> {
    parse_variant(name)
        .ok_or_else(|| format!("unknown variant '{name}' (expected auto, naive or batched)"))
}

impl Args {
    pub fn validate(&self) -> Result<(), ArgsError> {
        if self.size == 0 {
            return Err(ArgsError::EmptyArray);
        }
        if self.min > self.max {
            return Err(ArgsError::InvertedValueRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.pity_min == 0 || self.pity_min > self.pity_max {
            return Err(ArgsError::InvalidPityRange {
                min: self.pity_min,
                max: self.pity_max,
            });
        }
        Ok(())
    }

    pub fn sort_config(&self) -> SortConfig {
        SortConfig::default()
            .with_variant(self.variant)
            .with_pity_range(self.pity_min, self.pity_max)
            .with_reshuffle_interval(self.reshuffle_interval)
            .with_batch_size(self.batch_size)
            .with_seed(self.seed)
            .with_progress(
                self.progress_every
                    .map_or(ProgressCadence::Auto, ProgressCadence::EveryPasses),
            )
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_ms)
    }
}
