//! Run configuration supplied by the caller.

use crate::{QsError, QsResult};

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Inclusive `[min, max]` range for a random draw, in ticks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: u64,
    pub max: u64,
}

impl Bounds {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Degenerate range that always yields `value`.
    pub const fn fixed(value: u64) -> Self {
        Self { min: value, max: value }
    }

    /// Reject inverted ranges and a zero lower bound.
    ///
    /// `what` names the range in the error message.
    pub fn validate(&self, what: &'static str) -> QsResult<()> {
        if self.min == 0 {
            return Err(QsError::ZeroBound { what });
        }
        if self.min > self.max {
            return Err(QsError::InvalidBounds { what, min: self.min, max: self.max });
        }
        Ok(())
    }
}

// ── QueueConfig ───────────────────────────────────────────────────────────────

/// Parameters of one queueing system.  Immutable for the duration of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QueueConfig {
    /// Gap between consecutive arrivals.
    pub arrival: Bounds,

    /// Time one handler spends on one agent.
    pub service: Bounds,

    /// Number of identical handlers.  At least 1.
    pub handler_count: u32,

    /// Maximum number of agents waiting at once.  0 turns the system into a
    /// pure loss system: arrivals are served only if a handler is free.
    pub queue_capacity: u32,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            arrival:        Bounds::new(25, 50),
            service:        Bounds::new(15, 35),
            handler_count:  2,
            queue_capacity: 7,
        }
    }
}

impl QueueConfig {
    /// Check every bound; the first violation is returned.
    pub fn validate(&self) -> QsResult<()> {
        self.arrival.validate("arrival gap")?;
        self.service.validate("service duration")?;
        if self.handler_count == 0 {
            return Err(QsError::NoHandlers);
        }
        Ok(())
    }
}
