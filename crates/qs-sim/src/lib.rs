//! `qs-sim` — next-event driver for a single-stage queueing system.
//!
//! # Run loop
//!
//! ```text
//! reset; generate the arrival timeline
//! loop:
//!   delta = min(next arrival, earliest handler completion)   (else: rest of window)
//!   now  += delta;  stop unless now < duration
//!   ① Wait     — every queued agent waits delta more ticks.
//!   ② Arrive   — at countdown zero: queue the agent, or decline it when the
//!                queue is full and no handler is idle.
//!   ③ Serve    — handlers count down; at zero: agent → Free, pull the queue
//!                head (lowest handler first) or go idle.
//!   ④ Watermark — record the largest queue length seen.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs [`run_replications`] on Rayon's thread pool.      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use qs_core::QueueConfig;
//! use qs_sim::SimulatorBuilder;
//!
//! let mut sim = SimulatorBuilder::new(QueueConfig::default()).seed(42).build()?;
//! let stats = sim.simulate(10_000);
//! println!("processed {:.2}%", stats.percent());
//! ```

pub mod builder;
pub mod error;
pub mod handler;
pub mod observer;
pub mod queue;
pub mod replicate;
pub mod sim;


pub use builder::SimulatorBuilder;
pub use error::{SimError, SimResult};
pub use handler::{Handler, HandlerPool};
pub use observer::{NoopObserver, SimObserver};
pub use queue::{Admission, AdmissionQueue};
pub use replicate::run_replications;
pub use sim::Simulator;
