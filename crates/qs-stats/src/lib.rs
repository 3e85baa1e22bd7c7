//! `qs-stats` — read-only statistics over a finished run.
//!
//! The collector never sees live simulator state.  It receives the final agent
//! list, the handler ids and the queue watermark, and everything else is
//! derived from those.
//!
//! Every ratio whose denominator is zero is reported as exactly `0.0`.

pub mod snapshot;

#[cfg(test)]
mod tests;

pub use snapshot::{HandlerStatistics, StatisticsSnapshot, percent_of};
