//! Simulation time model.
//!
//! # Design
//!
//! Time is an integer `Tick` counter with no wall-clock mapping: a tick is
//! whatever unit the caller's arrival and service bounds are expressed in.
//! Integer ticks keep step arithmetic exact, which matters because the clock
//! jumps by arbitrary deltas rather than by one tick at a time.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation instant.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0.saturating_add(rhs))
    }
}

impl std::ops::AddAssign<u64> for Tick {
    #[inline]
    fn add_assign(&mut self, rhs: u64) {
        self.0 = self.0.saturating_add(rhs);
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Variable-step clock bounded by a run's total duration.
///
/// The driver asks for [`remaining`](Self::remaining) when nothing else is
/// pending and otherwise advances by the delta to the next event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimClock {
    /// Current simulated instant.
    pub now: Tick,
    /// Exclusive end of the simulated window.
    pub end: Tick,
}

impl SimClock {
    /// A clock at tick 0 for a run of `duration` ticks.
    pub fn new(duration: u64) -> Self {
        Self {
            now: Tick::ZERO,
            end: Tick(duration),
        }
    }

    /// Jump forward by `delta` ticks.
    #[inline]
    pub fn advance(&mut self, delta: u64) {
        self.now += delta;
    }

    /// Ticks left until the end of the window (0 once finished).
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.end.since(self.now)
    }

    /// `true` once `now` has reached the end of the window.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.now >= self.end
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.now, self.end)
    }
}
