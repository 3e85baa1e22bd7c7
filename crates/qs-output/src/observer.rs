//! `TraceObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use qs_core::Tick;
use qs_sim::SimObserver;
use qs_stats::StatisticsSnapshot;

use crate::row::StepRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes one row per clock step to any
/// [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  They surface from [`finish`][Self::finish], or
/// earlier through [`take_error`][Self::take_error].
pub struct TraceObserver<W: OutputWriter> {
    writer:     W,
    steps:      usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            steps:      0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Step rows handed to the writer so far.
    pub fn steps_written(&self) -> usize {
        self.steps
    }

    /// Write the final snapshot, close the writer and hand it back.
    ///
    /// Returns the first error seen during the run, if any.
    pub fn finish(mut self, snapshot: &StatisticsSnapshot) -> OutputResult<W> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        self.writer.write_snapshot(snapshot)?;
        self.writer.finish()?;
        Ok(self.writer)
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for TraceObserver<W> {
    fn on_step(&mut self, now: Tick, delta: u64, queue_len: usize, busy: usize) {
        let row = StepRow {
            tick:      now.0,
            delta,
            queue_len: queue_len as u64,
            busy:      busy as u64,
        };
        let result = self.writer.write_step(&row);
        if result.is_ok() {
            self.steps += 1;
        }
        self.store_err(result);
    }
}
