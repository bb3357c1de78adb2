pub(crate) mod batched;
pub(crate) mod common;
pub(crate) mod naive;

/// Counters collected while draining the pending queue.
///
/// `forced_insertions` and `requeues` belong to the pity branches of the naive variant.
/// The positional scan always finds a slot, so both stay at zero.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ReintegrationStats {
    /// Items popped (naive) or batches processed (batched).
    pub passes: u64,
    pub insertions: u64,
    pub reshuffles: u64,
    pub forced_insertions: u64,
    pub requeues: u64,
}

/// One reinsertion: `value` went to `index` of the working sequence as it was then.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Insertion {
    pub value: i64,
    pub index: usize,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Reintegrated {
    pub(crate) working: Vec<i64>,
    pub(crate) stats: ReintegrationStats,
    pub(crate) insertions: Vec<Insertion>,
}

impl Reintegrated {
    fn new(working: Vec<i64>) -> Self {
        Self {
            working,
            ..Self::default()
        }
    }

    #[inline]
    fn insert(&mut self, index: usize, value: i64, record: bool) {
        self.working.insert(index, value);
        self.stats.insertions += 1;
        if record {
            self.insertions.push(Insertion { value, index });
        }
    }
}
