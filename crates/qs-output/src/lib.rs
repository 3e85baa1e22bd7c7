//! `qs-output` — output writers for queuesim runs.
//!
//! [`CsvWriter`] creates four files in the output directory:
//!
//! | File           | One row per                                    |
//! |----------------|------------------------------------------------|
//! | `steps.csv`    | clock step (instant, delta, queue, busy)       |
//! | `agents.csv`   | generated agent, final state                   |
//! | `handlers.csv` | handler, processed count and share             |
//! | `summary.csv`  | run (a single row)                             |
//!
//! Writers implement [`OutputWriter`].  [`TraceObserver`] implements
//! `qs_sim::SimObserver` and feeds step rows to a writer while the run is in
//! progress.
//!
//! # Usage
//!
//! ```rust,ignore
//! use qs_output::{CsvWriter, TraceObserver};
//!
//! let mut obs = TraceObserver::new(CsvWriter::new(Path::new("./output"))?);
//! let stats = sim.simulate_with(duration, &mut obs);
//! obs.finish(&stats)?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{AgentRow, HandlerRow, StepRow, SummaryRow};
pub use writer::OutputWriter;
