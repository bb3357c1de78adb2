use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use crate::config::ProgressCadence;
use crate::driver::SortOutcome;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProgressSnapshot {
    pub working: usize,
    pub pending: usize,
    pub passes: u64,
    pub elapsed: Duration,
}

/// Message stream of a background run. `Done` is always the last message.
#[derive(Clone, Debug)]
pub enum SortEvent {
    Progress(ProgressSnapshot),
    Done(SortOutcome),
}

/// Receiver of progress snapshots. Reporting must not block the caller.
pub trait ProgressSink {
    fn report(&mut self, snapshot: ProgressSnapshot);
}

impl<F> ProgressSink for F
where
    F: FnMut(ProgressSnapshot),
{
    fn report(&mut self, snapshot: ProgressSnapshot) {
        self(snapshot)
    }
}

impl ProgressSink for Sender<SortEvent> {
    fn report(&mut self, snapshot: ProgressSnapshot) {
        // A dropped receiver only means nobody is watching.
        let _ = self.send(SortEvent::Progress(snapshot));
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    #[inline]
    fn report(&mut self, _snapshot: ProgressSnapshot) {}
}

/// Rate limiter between the reintegration loop and a sink.
pub(crate) struct ProgressReporter<'a> {
    sink: &'a mut dyn ProgressSink,
    cadence: ProgressCadence,
    start: Instant,
    last_emit: Instant,
    emitted: u64,
}

impl<'a> ProgressReporter<'a> {
    pub(crate) fn new(
        sink: &'a mut dyn ProgressSink,
        cadence: ProgressCadence,
        start: Instant,
    ) -> Self {
        Self {
            sink,
            cadence,
            start,
            last_emit: start,
            emitted: 0,
        }
    }

    /// Called once per pass with the sizes observed after that pass.
    #[inline]
    pub(crate) fn tick(&mut self, passes: u64, working: usize, pending: usize) {
        let due = match self.cadence {
            // `Auto` is resolved by the driver before the reporter is built.
            ProgressCadence::EveryPasses(0) | ProgressCadence::Never | ProgressCadence::Auto => {
                false
            }
            ProgressCadence::EveryPasses(every) => passes % every == 0,
            ProgressCadence::Interval(interval) => self.last_emit.elapsed() >= interval,
        };
        if !due {
            return;
        }

        let now = Instant::now();
        self.last_emit = now;
        self.emitted += 1;
        self.sink.report(ProgressSnapshot {
            working,
            pending,
            passes,
            elapsed: now.duration_since(self.start),
        });
    }

    pub(crate) fn emitted(&self) -> u64 {
        self.emitted
    }
}
