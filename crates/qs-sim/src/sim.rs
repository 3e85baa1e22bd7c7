//! The `Simulator` and its next-event run loop.

use log::{debug, info, trace};

use qs_agent::{Agent, AgentGenerator};
use qs_core::{QueueConfig, RandomSource, SimClock, Tick};
use qs_stats::StatisticsSnapshot;

use crate::queue::Admission;
use crate::{AdmissionQueue, HandlerPool, NoopObserver, SimObserver};

/// Runs one queueing system.
///
/// A `Simulator` holds every piece of mutable run state, so one instance can
/// be reused: each [`simulate`](Self::simulate) call resets the state and
/// rewinds the random source first.
///
/// # Run loop
///
/// The clock jumps straight to the next instant where something can change:
/// the next arrival or the earliest handler completion.  Each step:
///
/// 1. every waiting agent's wait grows by the step size;
/// 2. the arrival countdown drops; at zero the next agent is queued or
///    declined;
/// 3. every handler's timer drops; handlers at zero finish their agent and
///    pull from the queue (lowest handler first) or go idle;
/// 4. the queue-length watermark is updated.
///
/// A step is only taken when its instant lies strictly before the run end.
///
/// Create via [`SimulatorBuilder`][crate::SimulatorBuilder].
pub struct Simulator {
    config: QueueConfig,
    source: Box<dyn RandomSource>,

    clock:    SimClock,
    agents:   Vec<Agent>,
    queue:    AdmissionQueue,
    pool:     HandlerPool,
    /// Position of the next agent to arrive.
    next_arrival: usize,
    /// Ticks until that agent arrives; `None` once every agent has arrived.
    arrival_countdown: Option<u64>,
    max_queue_length:  usize,
}

impl Simulator {
    pub(crate) fn new(config: QueueConfig, source: Box<dyn RandomSource>) -> Self {
        let queue = AdmissionQueue::new(config.queue_capacity as usize);
        let pool = HandlerPool::new(config.handler_count as usize);
        Self {
            config,
            source,
            clock: SimClock::new(0),
            agents: Vec::new(),
            queue,
            pool,
            next_arrival: 0,
            arrival_countdown: None,
            max_queue_length: 0,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run for `duration` ticks and return the statistics snapshot.
    pub fn simulate(&mut self, duration: u64) -> StatisticsSnapshot {
        self.simulate_with(duration, &mut NoopObserver)
    }

    /// Like [`simulate`](Self::simulate), reporting progress to `observer`.
    pub fn simulate_with<O: SimObserver>(&mut self, duration: u64, observer: &mut O) -> StatisticsSnapshot {
        self.reset(duration);
        self.agents = AgentGenerator::new(&self.config, &mut self.source).generate(duration);
        self.arrival_countdown = self.agents.first().map(|a| a.arrival_gap);
        info!(
            "run start: {} agents over {} ticks, {} handlers, capacity {}",
            self.agents.len(),
            duration,
            self.pool.len(),
            self.queue.capacity(),
        );

        let mut delta = self.find_step();
        self.clock.advance(delta);
        while !self.clock.is_finished() {
            self.step(delta, observer);
            delta = self.find_step();
            self.clock.advance(delta);
        }
        observer.on_sim_end(self.clock.now);

        let snapshot = StatisticsSnapshot::collect(
            duration,
            std::mem::take(&mut self.agents),
            self.pool.ids(),
            self.max_queue_length,
        );
        info!(
            "run end: arrived {}, processed {}, declined {}, max queue {}",
            snapshot.arrived, snapshot.processed, snapshot.declined, snapshot.max_queue_length,
        );
        snapshot
    }

    /// Clear all run state and rewind the random source.
    pub fn reset(&mut self, duration: u64) {
        self.clock = SimClock::new(duration);
        self.agents.clear();
        self.queue = AdmissionQueue::new(self.config.queue_capacity as usize);
        self.pool = HandlerPool::new(self.config.handler_count as usize);
        self.next_arrival = 0;
        self.arrival_countdown = None;
        self.max_queue_length = 0;
        self.source.rewind();
    }

    // ── Step computation ──────────────────────────────────────────────────

    /// Ticks until the next arrival or handler completion, whichever is
    /// sooner.  With nothing pending the rest of the window is returned,
    /// which ends the loop.
    fn find_step(&self) -> u64 {
        let pending = match (self.arrival_countdown, self.pool.next_completion()) {
            (Some(a), Some(h)) => Some(a.min(h)),
            (a, h) => a.or(h),
        };
        pending.unwrap_or_else(|| self.clock.remaining())
    }

    fn step<O: SimObserver>(&mut self, delta: u64, observer: &mut O) {
        let now = self.clock.now;

        self.queue.advance_waits(&mut self.agents, delta);
        self.update_arrival(now, delta, observer);
        let finished = self.pool.process(delta, &mut self.queue, &mut self.agents);

        let queue_len = self.queue.len();
        self.max_queue_length = self.max_queue_length.max(queue_len);
        let busy = self.pool.busy_count();
        trace!("{now}: +{delta}, queue {queue_len}, busy {busy}, finished {finished}");
        observer.on_step(now, delta, queue_len, busy);
    }

    fn update_arrival<O: SimObserver>(&mut self, now: Tick, delta: u64, observer: &mut O) {
        let Some(countdown) = self.arrival_countdown else {
            return;
        };
        let countdown = countdown.saturating_sub(delta);
        if countdown > 0 {
            self.arrival_countdown = Some(countdown);
            return;
        }

        let slot = self.next_arrival;
        self.next_arrival += 1;
        self.arrival_countdown = self.agents.get(self.next_arrival).map(|a| a.arrival_gap);

        let idle = self.pool.idle_count();
        let agent = &mut self.agents[slot];
        match self.queue.offer(slot, agent, idle) {
            Admission::Queued => debug!("{now}: agent {} queued ({} waiting)", agent.id, self.queue.len()),
            Admission::Declined => debug!("{now}: agent {} declined, queue full", agent.id),
        }
        observer.on_arrival(now, agent);
    }
}
