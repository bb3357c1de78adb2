use std::collections::VecDeque;

use crate::config::PityRange;
use crate::rng::SortRng;

/// A diverted element waiting for reintegration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PendingItem {
    pub value: i64,
    pub attempts: u32,
    pub pity: u32,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Purged {
    /// Non-decreasing subsequence kept in input order.
    pub working: Vec<i64>,
    /// Diverted elements in original relative order.
    pub pending: VecDeque<PendingItem>,
}

impl Purged {
    #[inline]
    pub fn diverted(&self) -> usize {
        self.pending.len()
    }
}

/// Single forward pass: keep an element when it does not drop below the last kept one,
/// divert it otherwise. Pity is drawn at diversion time, so draw order is queue order.
pub fn purge(input: &[i64], pity_range: PityRange, rng: &mut SortRng) -> Purged {
    let mut working = Vec::with_capacity(input.len());
    let mut pending = VecDeque::new();

    for &x in input {
        match working.last() {
            Some(&last) if x < last => pending.push_back(PendingItem {
                value: x,
                attempts: 0,
                pity: rng.pity(pity_range),
            }),
            _ => working.push(x),
        }
    }

    tracing::debug!(
        working = working.len(),
        pending = pending.len(),
        "purge.done"
    );

    Purged { working, pending }
}
