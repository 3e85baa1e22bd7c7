//! Plain data row types written by output backends.

use qs_agent::Agent;
use qs_stats::{HandlerStatistics, StatisticsSnapshot};

/// One clock step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRow {
    pub tick:      u64,
    pub delta:     u64,
    pub queue_len: u64,
    pub busy:      u64,
}

/// Final state of one agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRow {
    pub agent_id:         u32,
    pub arrival_gap:      u64,
    pub service_duration: u64,
    pub queue_wait:       u64,
    /// `None` unless the agent reached a handler.
    pub handler_id:       Option<u32>,
    pub status:           String,
}

impl From<&Agent> for AgentRow {
    fn from(a: &Agent) -> Self {
        Self {
            agent_id:         a.id.0,
            arrival_gap:      a.arrival_gap,
            service_duration: a.service_duration,
            queue_wait:       a.queue_wait,
            handler_id:       a.handler.map(|h| h.0),
            status:           a.status.to_string(),
        }
    }
}

/// Load of one handler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandlerRow {
    pub handler_id:        u32,
    pub processed:         u64,
    pub processed_percent: f64,
}

impl From<&HandlerStatistics> for HandlerRow {
    fn from(h: &HandlerStatistics) -> Self {
        Self {
            handler_id:        h.id.0,
            processed:         h.processed as u64,
            processed_percent: h.processed_percent,
        }
    }
}

/// Run-level totals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    pub duration:         u64,
    pub arrived:          u64,
    pub processed:        u64,
    pub declined:         u64,
    pub percent:          f64,
    pub blocking_percent: f64,
    pub decline_percent:  f64,
    pub mean_queue_wait:  f64,
    pub max_queue_length: u64,
}

impl From<&StatisticsSnapshot> for SummaryRow {
    fn from(s: &StatisticsSnapshot) -> Self {
        Self {
            duration:         s.duration,
            arrived:          s.arrived as u64,
            processed:        s.processed as u64,
            declined:         s.declined as u64,
            percent:          s.percent(),
            blocking_percent: s.blocking_percent(),
            decline_percent:  s.decline_percent(),
            mean_queue_wait:  s.mean_queue_wait(),
            max_queue_length: s.max_queue_length as u64,
        }
    }
}
