//! One arriving entity and its status transitions.

use std::fmt;

use qs_core::{AgentId, HandlerId};

// ── AgentStatus ───────────────────────────────────────────────────────────────

/// Where an agent is in its lifecycle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentStatus {
    /// Not yet arrived.
    #[default]
    None,
    /// Turned away at arrival.  Terminal.
    Declined,
    /// Waiting in the admission queue.
    InQueue,
    /// Owned by a handler.
    OnService,
    /// Service complete.  Terminal.
    Free,
}

impl AgentStatus {
    /// `true` once the agent has reached its arrival instant.
    #[inline]
    pub fn has_arrived(self) -> bool {
        self != AgentStatus::None
    }

    /// `true` for the two statuses in which a handler id is recorded.
    #[inline]
    pub fn has_handler(self) -> bool {
        matches!(self, AgentStatus::OnService | AgentStatus::Free)
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, AgentStatus::Declined | AgentStatus::Free)
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AgentStatus::None      => "none",
            AgentStatus::Declined  => "declined",
            AgentStatus::InQueue   => "in_queue",
            AgentStatus::OnService => "on_service",
            AgentStatus::Free      => "free",
        };
        f.pad(s)
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// A generated agent.
///
/// `arrival_gap` and `service_duration` are drawn once by the generator.  The
/// remaining fields change while the driver runs and are read back by the
/// statistics collector.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id:               AgentId,
    /// Ticks since the previous arrival (or since tick 0 for the first agent).
    pub arrival_gap:      u64,
    /// Ticks a handler spends on this agent.
    pub service_duration: u64,
    /// Ticks spent waiting in the queue so far.
    pub queue_wait:       u64,
    /// Set exactly when `status` is `OnService` or `Free`.
    pub handler:          Option<HandlerId>,
    pub status:           AgentStatus,
}

impl Agent {
    pub fn new(id: AgentId, arrival_gap: u64, service_duration: u64) -> Self {
        Self {
            id,
            arrival_gap,
            service_duration,
            queue_wait: 0,
            handler:    None,
            status:     AgentStatus::None,
        }
    }

    /// `None → Declined`.
    pub fn decline(&mut self) {
        debug_assert_eq!(self.status, AgentStatus::None, "agent {} declined twice", self.id);
        self.status = AgentStatus::Declined;
    }

    /// `None → InQueue`.  The wait counter starts from zero.
    pub fn enqueue(&mut self) {
        debug_assert_eq!(self.status, AgentStatus::None, "agent {} enqueued twice", self.id);
        self.status = AgentStatus::InQueue;
        self.queue_wait = 0;
    }

    /// `InQueue → OnService`, recording the handler.
    pub fn start_service(&mut self, handler: HandlerId) {
        debug_assert_eq!(self.status, AgentStatus::InQueue, "agent {} not queued", self.id);
        self.status = AgentStatus::OnService;
        self.handler = Some(handler);
    }

    /// `OnService → Free`.  The handler id stays recorded.
    pub fn finish(&mut self) {
        debug_assert_eq!(self.status, AgentStatus::OnService, "agent {} not in service", self.id);
        self.status = AgentStatus::Free;
    }

    /// Add `delta` ticks to the wait counter.
    #[inline]
    pub fn wait(&mut self, delta: u64) {
        self.queue_wait += delta;
    }
}
