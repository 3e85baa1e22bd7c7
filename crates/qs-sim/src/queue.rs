//! `AdmissionQueue` — bounded FIFO of agents waiting for a handler.
//!
//! The queue stores positions into the run's agent list rather than the
//! agents themselves; agent data stays in one `Vec` for the whole run so the
//! statistics collector can read every agent afterwards.

use std::collections::VecDeque;

use qs_agent::Agent;

/// Outcome of offering an arriving agent to the queue.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Admission {
    Queued,
    Declined,
}

/// Bounded FIFO.  Strict arrival order, no reordering.
#[derive(Debug, Default)]
pub struct AdmissionQueue {
    waiting:  VecDeque<usize>,
    capacity: usize,
}

impl AdmissionQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            waiting: VecDeque::new(),
            capacity,
        }
    }

    /// Offer the agent at `slot` on arrival.
    ///
    /// Handlers that are idle at the arrival instant take from the queue in
    /// the same step, so each of them adds one place of room.  The agent is
    /// declined only when the queue is full and no handler is idle; the
    /// outcome is recorded on the agent itself.
    pub fn offer(&mut self, slot: usize, agent: &mut Agent, idle_handlers: usize) -> Admission {
        if self.waiting.len() < self.capacity + idle_handlers {
            agent.enqueue();
            self.waiting.push_back(slot);
            Admission::Queued
        } else {
            agent.decline();
            Admission::Declined
        }
    }

    /// Pop the head of the queue, if any agent is waiting.
    #[inline]
    pub fn dequeue(&mut self) -> Option<usize> {
        self.waiting.pop_front()
    }

    /// Add `delta` ticks to the wait counter of every waiting agent.
    pub fn advance_waits(&self, agents: &mut [Agent], delta: u64) {
        for &slot in &self.waiting {
            agents[slot].wait(delta);
        }
    }

    pub fn len(&self) -> usize {
        self.waiting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waiting.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
