mod config;
mod driver;
mod error;
mod progress;
mod purge;
mod reintegration;
mod rng;

pub use config::{
    DEFAULT_BATCH_SIZE, DEFAULT_BATCHED_PROGRESS_PASSES, DEFAULT_PITY_MAX, DEFAULT_PITY_MIN,
    DEFAULT_PROGRESS_PASSES, DEFAULT_RESHUFFLE_INTERVAL, LARGE_INPUT_THRESHOLD, PityRange,
    ProgressCadence, SortConfig,
};
pub use driver::{Poll, SortHandle, SortOutcome, sort, sort_with_progress, spawn_sort};
pub use error::{ConfigError, SortError};
pub use progress::{NoProgress, ProgressSink, ProgressSnapshot, SortEvent};
pub use purge::{PendingItem, Purged, purge};
pub use reintegration::{Insertion, ReintegrationStats};
pub use rng::SortRng;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum SortVariant {
    /// Batched for inputs of at least [`LARGE_INPUT_THRESHOLD`] elements, naive otherwise.
    #[default]
    Auto,
    /// Linear-scan insertion with pity bookkeeping and periodic reshuffles.
    Naive,
    /// Binary-search insertion in FIFO batches.
    Batched,
}

pub const ALL_VARIANTS: [SortVariant; 3] =
    [SortVariant::Auto, SortVariant::Naive, SortVariant::Batched];

pub fn all_variants() -> &'static [SortVariant] {
    &ALL_VARIANTS
}

pub fn variant_name(variant: SortVariant) -> &'static str {
    match variant {
        SortVariant::Auto => "auto",
        SortVariant::Naive => "naive",
        SortVariant::Batched => "batched",
    }
}

pub fn parse_variant(name: &str) -> Option<SortVariant> {
    all_variants()
        .iter()
        .copied()
        .find(|&variant| variant_name(variant) == name)
}
