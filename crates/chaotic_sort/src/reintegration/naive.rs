use crate::progress::ProgressReporter;
use crate::purge::Purged;
use crate::rng::SortRng;

use super::{Reintegrated, common};

/// One item per pass, positional scan, periodic reshuffle of what is left.
pub(crate) fn reintegrate(
    purged: Purged,
    reshuffle_interval: u64,
    record: bool,
    rng: &mut SortRng,
    reporter: &mut ProgressReporter<'_>,
) -> Reintegrated {
    debug_assert!(reshuffle_interval > 0);

    let Purged {
        working,
        mut pending,
    } = purged;
    let mut out = Reintegrated::new(working);

    while let Some(mut item) = pending.pop_front() {
        out.stats.passes += 1;
        item.attempts += 1;
        let value = item.value;

        let mut slot = common::scan_insertion_point(&out.working, value);

        // Unreachable while `working` stays sorted: the scan above always finds a slot.
        // `forced_insertions` and `requeues` count entries here and must stay zero.
        if slot.is_none() {
            if item.attempts >= item.pity {
                out.stats.forced_insertions += 1;
                slot = Some(common::forced_insertion_point(&out.working, value));
            } else {
                out.stats.requeues += 1;
                pending.push_back(item);
            }
        }

        if let Some(index) = slot {
            out.insert(index, value, record);
        }

        if out.stats.passes % reshuffle_interval == 0 && pending.len() > 1 {
            rng.shuffle(&mut pending);
            out.stats.reshuffles += 1;
            tracing::trace!(
                passes = out.stats.passes,
                pending = pending.len(),
                "reintegration.reshuffle"
            );
        }

        reporter.tick(out.stats.passes, out.working.len(), pending.len());
    }

    debug_assert!(common::is_sorted_non_decreasing(&out.working));
    out
}
