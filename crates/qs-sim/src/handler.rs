//! Handlers and the fixed-size pool that owns them.

use qs_agent::Agent;
use qs_core::HandlerId;

use crate::AdmissionQueue;

// ── Handler ───────────────────────────────────────────────────────────────────

/// One server.  Owns at most one agent at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Handler {
    pub id:    HandlerId,
    /// Position of the owned agent in the run's agent list.
    pub agent: Option<usize>,
    /// Service ticks left for the owned agent; 0 when idle.
    pub timer: u64,
}

impl Handler {
    pub fn new(id: HandlerId) -> Self {
        Self { id, agent: None, timer: 0 }
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.agent.is_some()
    }

    /// Count the timer down by `delta`, floored at zero.
    #[inline]
    fn process(&mut self, delta: u64) -> u64 {
        self.timer = self.timer.saturating_sub(delta);
        self.timer
    }

    /// Release the current agent (if any) as `Free`, then take the agent at
    /// `next` and start its service timer.
    fn switch(&mut self, next: usize, agents: &mut [Agent]) {
        self.release(agents);
        let agent = &mut agents[next];
        agent.start_service(self.id);
        self.timer = agent.service_duration;
        self.agent = Some(next);
    }

    /// Release the current agent (if any) as `Free` and go idle.
    fn clear(&mut self, agents: &mut [Agent]) {
        self.release(agents);
        self.timer = 0;
    }

    fn release(&mut self, agents: &mut [Agent]) {
        if let Some(done) = self.agent.take() {
            agents[done].finish();
        }
    }
}

// ── HandlerPool ───────────────────────────────────────────────────────────────

/// Handlers `1..=N` in fixed order.
///
/// Iteration order is the tie-break: when several handlers free up in the
/// same step, the lowest-indexed one claims the queue head first.
#[derive(Clone, Debug, Default)]
pub struct HandlerPool {
    handlers: Vec<Handler>,
}

impl HandlerPool {
    pub fn new(count: usize) -> Self {
        Self {
            handlers: (0..count).map(|i| Handler::new(HandlerId::from_slot(i))).collect(),
        }
    }

    /// Advance every handler by `delta`.
    ///
    /// A handler whose timer reaches zero finishes its agent and then either
    /// pulls the next agent from `queue` or goes idle.  Returns the number of
    /// agents finished during this step.
    pub fn process(&mut self, delta: u64, queue: &mut AdmissionQueue, agents: &mut [Agent]) -> usize {
        let mut finished = 0;
        for handler in &mut self.handlers {
            if handler.process(delta) != 0 {
                continue;
            }
            if handler.is_busy() {
                finished += 1;
            }
            match queue.dequeue() {
                Some(next) => handler.switch(next, agents),
                None => handler.clear(agents),
            }
        }
        finished
    }

    /// Smallest remaining timer among busy handlers.
    pub fn next_completion(&self) -> Option<u64> {
        self.handlers
            .iter()
            .filter(|h| h.is_busy())
            .map(|h| h.timer)
            .min()
    }

    pub fn busy_count(&self) -> usize {
        self.handlers.iter().filter(|h| h.is_busy()).count()
    }

    pub fn idle_count(&self) -> usize {
        self.handlers.len() - self.busy_count()
    }

    pub fn ids(&self) -> impl Iterator<Item = HandlerId> + '_ {
        self.handlers.iter().map(|h| h.id)
    }

    pub fn handlers(&self) -> &[Handler] {
        &self.handlers
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
