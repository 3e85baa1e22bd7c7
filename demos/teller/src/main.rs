//! `teller` — a bank branch with a few tellers and a short waiting line.
//!
//! Reads an optional JSON run file, simulates one working day, prints the
//! outcome and writes the step trace and statistics as CSV.
//!
//! Run with:
//!   cargo run -p teller --release -- [run.json]
//!
//! A run file may set any subset of the fields of [`RunConfig`]:
//!
//! ```json
//! {
//!   "queue": { "arrival": { "min": 2, "max": 6 }, "handler_count": 3 },
//!   "duration": 480,
//!   "seed": 42,
//!   "output_dir": "output/teller"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Deserializer};

use qs_agent::{Agent, AgentStatus};
use qs_core::{Bounds, QsError, QueueConfig};
use qs_output::{CsvWriter, TraceObserver};
use qs_sim::SimulatorBuilder;
use qs_stats::StatisticsSnapshot;

// ── Run file ──────────────────────────────────────────────────────────────────

/// One working day, in minutes.
const DAY_MINUTES: u64 = 480;
const SEED:        u64 = 42;

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RunConfig {
    /// Fields left out of the run file keep the teller's values, not the
    /// library's `QueueConfig::default()`.
    #[serde(deserialize_with = "queue_over_teller_defaults")]
    queue:       QueueConfig,
    duration:    u64,
    /// `None` draws from OS entropy.
    seed:        Option<u64>,
    output_dir:  PathBuf,
    /// Print one line per agent after the summary.
    list_agents: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            queue:       teller_queue(),
            duration:    DAY_MINUTES,
            seed:        Some(SEED),
            output_dir:  PathBuf::from("output/teller"),
            list_agents: false,
        }
    }
}

fn teller_queue() -> QueueConfig {
    QueueConfig {
        arrival:        Bounds::new(1, 6),
        service:        Bounds::new(4, 12),
        handler_count:  3,
        queue_capacity: 8,
    }
}

/// The `queue` object of a run file; every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct QueueOverrides {
    arrival:        Option<Bounds>,
    service:        Option<Bounds>,
    handler_count:  Option<u32>,
    queue_capacity: Option<u32>,
}

impl QueueOverrides {
    fn apply(self, base: QueueConfig) -> QueueConfig {
        QueueConfig {
            arrival:        self.arrival.unwrap_or(base.arrival),
            service:        self.service.unwrap_or(base.service),
            handler_count:  self.handler_count.unwrap_or(base.handler_count),
            queue_capacity: self.queue_capacity.unwrap_or(base.queue_capacity),
        }
    }
}

fn queue_over_teller_defaults<'de, D>(deserializer: D) -> Result<QueueConfig, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(QueueOverrides::deserialize(deserializer)?.apply(teller_queue()))
}

fn parse_run_config(text: &str) -> serde_json::Result<RunConfig> {
    serde_json::from_str(text)
}

fn load_run_config(path: Option<&Path>) -> Result<RunConfig> {
    let Some(path) = path else {
        return Ok(RunConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading run file {}", path.display()))?;
    parse_run_config(&text).with_context(|| format!("parsing run file {}", path.display()))
}

fn check_duration(run: &RunConfig) -> Result<(), QsError> {
    if run.duration == 0 {
        return Err(QsError::Config("duration must be at least 1".into()));
    }
    Ok(())
}

// ── Report ────────────────────────────────────────────────────────────────────

fn describe(agent: &Agent) -> String {
    let mut line = format!("agent {} {:<10}", agent.id, agent.status);
    if agent.status.has_arrived() {
        line += &format!(" gap {:>3}", agent.arrival_gap);
    }
    if matches!(agent.status, AgentStatus::InQueue | AgentStatus::OnService | AgentStatus::Free) {
        line += &format!("  waited {:>3}", agent.queue_wait);
    }
    if let Some(h) = agent.handler {
        line += &format!("  served {:>3} by handler {h}", agent.service_duration);
    }
    line
}

fn print_report(stats: &StatisticsSnapshot, list_agents: bool) {
    println!();
    println!(
        "Processed:       {} / {} ({:.2}%)",
        stats.processed,
        stats.arrived,
        stats.percent()
    );
    println!(
        "Declined:        {} ({:.2}% of arrivals)",
        stats.declined,
        stats.decline_percent()
    );
    println!("Not completed:   {:.2}%", stats.blocking_percent());
    println!("Still waiting:   {}", stats.count_status(AgentStatus::InQueue));
    println!("Still in service:{:>2}", stats.count_status(AgentStatus::OnService));
    println!("Mean queue wait: {:.2}", stats.mean_queue_wait());
    println!("Max queue:       {}", stats.max_queue_length);
    println!();
    println!("{:<10} {:>10} {:>10}", "handler", "processed", "share");
    for h in &stats.handlers {
        println!("{:<10} {:>10} {:>9.2}%", h.id.to_string(), h.processed, h.processed_percent);
    }

    if list_agents {
        println!();
        for agent in &stats.agents {
            println!("{}", describe(agent));
        }
    }
}

#[cfg(test)]
mod tests;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let run = load_run_config(path.as_deref())?;
    check_duration(&run)?;

    println!("=== teller — queuesim ===");
    println!(
        "Duration: {}  |  Handlers: {}  |  Capacity: {}  |  Seed: {}",
        run.duration,
        run.queue.handler_count,
        run.queue.queue_capacity,
        run.seed.map_or_else(|| "entropy".to_string(), |s| s.to_string()),
    );
    println!(
        "Arrival gap {}..{}  |  Service {}..{}",
        run.queue.arrival.min, run.queue.arrival.max, run.queue.service.min, run.queue.service.max,
    );

    let mut builder = SimulatorBuilder::new(run.queue.clone());
    if let Some(seed) = run.seed {
        builder = builder.seed(seed);
    }
    let mut sim = builder.build().context("invalid queue configuration")?;

    fs::create_dir_all(&run.output_dir)
        .with_context(|| format!("creating {}", run.output_dir.display()))?;
    let writer = CsvWriter::new(&run.output_dir)?;
    let mut observer = TraceObserver::new(writer);

    let stats = sim.simulate_with(run.duration, &mut observer);
    let steps = observer.steps_written();
    observer.finish(&stats)?;
    info!("wrote {steps} step rows to {}", run.output_dir.display());

    print_report(&stats, run.list_agents);
    println!();
    println!("Output written to {}", run.output_dir.display());
    Ok(())
}
