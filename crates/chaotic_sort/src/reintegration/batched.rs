use crate::progress::ProgressReporter;
use crate::purge::Purged;

use super::{Reintegrated, common};

/// Drains the queue in FIFO batches with binary-search insertion. Pity is ignored and
/// the queue is never reshuffled; a pass here is one batch.
pub(crate) fn reintegrate(
    purged: Purged,
    batch_size: usize,
    record: bool,
    reporter: &mut ProgressReporter<'_>,
) -> Reintegrated {
    debug_assert!(batch_size > 0);

    let Purged {
        working,
        mut pending,
    } = purged;
    let mut out = Reintegrated::new(working);

    while !pending.is_empty() {
        out.stats.passes += 1;
        let take = batch_size.min(pending.len());
        for item in pending.drain(..take) {
            let index = common::upper_bound(&out.working, item.value);
            out.insert(index, item.value, record);
        }
        reporter.tick(out.stats.passes, out.working.len(), pending.len());
    }

    debug_assert!(common::is_sorted_non_decreasing(&out.working));
    out
}
