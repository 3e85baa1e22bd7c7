//! `StatisticsSnapshot` and per-handler statistics.

use qs_agent::{Agent, AgentStatus};
use qs_core::HandlerId;

/// `part / whole * 100`, or `0.0` when `whole` is zero.
#[inline]
pub fn percent_of(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

// ── HandlerStatistics ─────────────────────────────────────────────────────────

/// Load carried by one handler over a run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HandlerStatistics {
    pub id:                HandlerId,
    /// Agents this handler took to `Free`.
    pub processed:         usize,
    /// `processed` as a share of all processed agents.
    pub processed_percent: f64,
}

// ── StatisticsSnapshot ────────────────────────────────────────────────────────

/// Immutable result of one run.
///
/// Presentation code reads [`agents`](Self::agents) and
/// [`handlers`](Self::handlers); the counters are precomputed from them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatisticsSnapshot {
    /// Simulated duration of the run, in ticks.
    pub duration:         u64,
    /// Every generated agent in id order, with its final state.
    pub agents:           Vec<Agent>,
    /// One entry per handler, in pool order.
    pub handlers:         Vec<HandlerStatistics>,
    /// Agents whose status is not `None`.
    pub arrived:          usize,
    /// Agents whose status is `Free`.
    pub processed:        usize,
    /// Agents whose status is `Declined`.
    pub declined:         usize,
    /// Largest queue length recorded during the run.
    pub max_queue_length: usize,
}

impl StatisticsSnapshot {
    /// Build the snapshot from a finished run.
    pub fn collect<I>(
        duration:         u64,
        agents:           Vec<Agent>,
        handler_ids:      I,
        max_queue_length: usize,
    ) -> Self
    where
        I: IntoIterator<Item = HandlerId>,
    {
        let arrived = count(&agents, |s| s.has_arrived());
        let processed = count(&agents, |s| s == AgentStatus::Free);
        let declined = count(&agents, |s| s == AgentStatus::Declined);
        let handlers = handler_ids
            .into_iter()
            .map(|id| {
                let hits = agents
                    .iter()
                    .filter(|a| a.status == AgentStatus::Free && a.handler == Some(id))
                    .count();
                HandlerStatistics {
                    id,
                    processed:         hits,
                    processed_percent: percent_of(hits, processed),
                }
            })
            .collect();

        Self {
            duration,
            agents,
            handlers,
            arrived,
            processed,
            declined,
            max_queue_length,
        }
    }

    /// Processed agents as a share of arrived agents.
    pub fn percent(&self) -> f64 {
        percent_of(self.processed, self.arrived)
    }

    /// `100 - percent()`: arrived agents that did not complete service,
    /// whether declined or still in the system at the end.  `0.0` when
    /// nothing arrived.
    pub fn blocking_percent(&self) -> f64 {
        if self.arrived == 0 {
            0.0
        } else {
            100.0 - self.percent()
        }
    }

    /// Declined agents as a share of arrived agents.
    pub fn decline_percent(&self) -> f64 {
        percent_of(self.declined, self.arrived)
    }

    /// Agents with the given final status.
    pub fn count_status(&self, status: AgentStatus) -> usize {
        count(&self.agents, |s| s == status)
    }

    /// Mean queue wait over agents that reached a handler.
    pub fn mean_queue_wait(&self) -> f64 {
        let (n, total) = self
            .agents
            .iter()
            .filter(|a| a.status.has_handler())
            .fold((0usize, 0u64), |(n, total), a| (n + 1, total + a.queue_wait));
        if n == 0 { 0.0 } else { total as f64 / n as f64 }
    }
}

fn count(agents: &[Agent], pred: impl Fn(AgentStatus) -> bool) -> usize {
    agents.iter().filter(|a| pred(a.status)).count()
}
