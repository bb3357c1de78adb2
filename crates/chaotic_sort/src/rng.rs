use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::PityRange;

/// Per-run random source. Draw order is purge diversions first, then reshuffles.
#[derive(Clone, Debug)]
pub struct SortRng {
    inner: StdRng,
}

impl SortRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    #[inline]
    pub fn pity(&mut self, range: PityRange) -> u32 {
        self.inner.random_range(range.as_range())
    }

    pub fn shuffle<T>(&mut self, queue: &mut VecDeque<T>) {
        queue.make_contiguous().shuffle(&mut self.inner);
    }
}
