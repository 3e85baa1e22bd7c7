//! Up-front generation of the arrival timeline.
//!
//! The whole timeline for a run is drawn before the clock starts.  The
//! window is half-open: an agent whose arrival would land at or after the
//! run duration is never generated, so an agent "arriving" exactly at the end
//! of the window does not exist.

use qs_core::{AgentId, QueueConfig, RandomSource, Tick};

use crate::Agent;

/// Draws arrival gaps and service durations from a [`RandomSource`].
pub struct AgentGenerator<'a, S: RandomSource + ?Sized> {
    config: &'a QueueConfig,
    source: &'a mut S,
}

impl<'a, S: RandomSource + ?Sized> AgentGenerator<'a, S> {
    pub fn new(config: &'a QueueConfig, source: &'a mut S) -> Self {
        Self { config, source }
    }

    /// Generate every agent arriving strictly before `duration`.
    ///
    /// Draw order is: first gap, then for each agent its service duration
    /// followed by the next gap.  The last gap drawn (the one that crosses
    /// the window end) is discarded.
    pub fn generate(&mut self, duration: u64) -> Vec<Agent> {
        let mut agents = Vec::new();
        let mut id = AgentId::FIRST;
        let mut gap = self.draw_gap();
        let mut time = gap;

        while time < duration {
            let service = self.draw_service();
            agents.push(Agent::new(id, gap, service));
            id = id.next();
            gap = self.draw_gap();
            time = time.saturating_add(gap);
        }

        agents
    }

    fn draw_gap(&mut self) -> u64 {
        let b = self.config.arrival;
        self.source.next(b.min, b.max)
    }

    fn draw_service(&mut self) -> u64 {
        let b = self.config.service;
        self.source.next(b.min, b.max)
    }
}

/// Absolute arrival instants of a generated timeline (running sum of gaps).
pub fn arrival_times(agents: &[Agent]) -> Vec<Tick> {
    agents
        .iter()
        .scan(Tick::ZERO, |t, a| {
            *t += a.arrival_gap;
            Some(*t)
        })
        .collect()
}
