use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crate::SortVariant;
use crate::config::SortConfig;
use crate::error::SortError;
use crate::progress::{
    NoProgress, ProgressReporter, ProgressSink, ProgressSnapshot, SortEvent,
};
use crate::purge::purge;
use crate::reintegration::{Insertion, ReintegrationStats, batched, naive};
use crate::rng::SortRng;

const WORKER_THREAD_NAME: &str = "chaotic-sort-worker";

#[derive(Clone, Debug)]
pub struct SortOutcome {
    /// Non-decreasing, same multiset as the input.
    pub sorted: Vec<i64>,
    pub elapsed: Duration,
    /// Variant that actually ran, never `Auto`.
    pub variant: SortVariant,
    /// Elements moved to the pending queue by the purge.
    pub diverted: usize,
    pub stats: ReintegrationStats,
    pub progress_reports: u64,
    /// Empty unless the config asked for an insertion log.
    pub insertions: Vec<Insertion>,
}

pub fn sort(input: &[i64], config: &SortConfig) -> Result<SortOutcome, SortError> {
    sort_with_progress(input, config, &mut NoProgress)
}

pub fn sort_with_progress(
    input: &[i64],
    config: &SortConfig,
    sink: &mut dyn ProgressSink,
) -> Result<SortOutcome, SortError> {
    config.validate()?;
    Ok(run(input, config, sink))
}

/// Runs a validated config to completion. Cannot fail past this point.
fn run(input: &[i64], config: &SortConfig, sink: &mut dyn ProgressSink) -> SortOutcome {
    let start = Instant::now();
    let variant = config.resolve_variant(input.len());
    let mut rng = SortRng::new(config.seed);

    let purged = purge(input, config.pity_range, &mut rng);
    let diverted = purged.diverted();

    let cadence = config.progress.resolve(variant);
    let mut reporter = ProgressReporter::new(sink, cadence, start);
    let done = match variant {
        SortVariant::Batched => batched::reintegrate(
            purged,
            config.batch_size,
            config.record_insertions,
            &mut reporter,
        ),
        SortVariant::Naive | SortVariant::Auto => naive::reintegrate(
            purged,
            config.reshuffle_interval,
            config.record_insertions,
            &mut rng,
            &mut reporter,
        ),
    };
    let progress_reports = reporter.emitted();
    let elapsed = start.elapsed();

    tracing::debug!(
        variant = crate::variant_name(variant),
        len = done.working.len(),
        diverted,
        passes = done.stats.passes,
        reshuffles = done.stats.reshuffles,
        elapsed_ms = elapsed.as_secs_f64() * 1e3,
        "sort.done"
    );

    SortOutcome {
        sorted: done.working,
        elapsed,
        variant,
        diverted,
        stats: done.stats,
        progress_reports,
        insertions: done.insertions,
    }
}

/// Validates `config` on the calling thread, then sorts `input` on a dedicated worker.
pub fn spawn_sort(input: Vec<i64>, config: SortConfig) -> Result<SortHandle, SortError> {
    config.validate()?;

    let (tx, rx) = mpsc::channel();
    tracing::trace!(len = input.len(), "sort.spawn");
    let worker = std::thread::Builder::new()
        .name(WORKER_THREAD_NAME.to_owned())
        .spawn(move || {
            let mut progress = tx.clone();
            let outcome = run(&input, &config, &mut progress);
            // Sent from the same thread after every progress message, so it arrives last.
            let _ = tx.send(SortEvent::Done(outcome));
        })
        .map_err(SortError::Spawn)?;

    Ok(SortHandle {
        events: rx,
        worker: Some(worker),
        finished: false,
    })
}

/// Everything that arrived since the previous poll.
///
/// Progress is coalesced for display: only the newest snapshot is kept and the older
/// ones are counted in `coalesced`. They carry no information the newest one lacks.
#[derive(Clone, Debug, Default)]
pub struct Poll {
    pub latest: Option<ProgressSnapshot>,
    pub done: Option<SortOutcome>,
    pub coalesced: usize,
}

/// Consumer side of a background sort.
pub struct SortHandle {
    events: Receiver<SortEvent>,
    worker: Option<JoinHandle<()>>,
    finished: bool,
}

impl SortHandle {
    /// Drains every available message without blocking.
    pub fn poll(&mut self) -> Poll {
        let mut poll = Poll::default();
        if self.finished {
            return poll;
        }
        loop {
            match self.events.try_recv() {
                Ok(SortEvent::Progress(snapshot)) => {
                    if poll.latest.replace(snapshot).is_some() {
                        poll.coalesced += 1;
                    }
                }
                Ok(SortEvent::Done(outcome)) => {
                    poll.done = Some(outcome);
                    self.finish();
                    break;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.finish();
                    break;
                }
            }
        }
        poll
    }

    /// Blocks until the run finishes, skipping any progress still queued.
    ///
    /// Returns `None` only if the worker died before sending its result.
    pub fn wait(mut self) -> Option<SortOutcome> {
        let mut outcome = None;
        while let Ok(event) = self.events.recv() {
            if let SortEvent::Done(done) = event {
                outcome = Some(done);
                break;
            }
        }
        self.finish();
        outcome
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn finish(&mut self) {
        self.finished = true;
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::warn!("sort worker panicked");
            }
        }
    }
}
