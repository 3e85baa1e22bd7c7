//! `qs-core` — foundational types for the `queuesim` workspace.
//!
//! This crate is a dependency of every other `qs-*` crate.  It has no `qs-*`
//! dependencies and few external ones (`rand`, `rand_distr`, `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `HandlerId`                                    |
//! | [`time`]        | `Tick`, `SimClock`                                        |
//! | [`config`]      | `QueueConfig`, `Bounds`                                   |
//! | [`rng`]         | `RandomSource` + `GaussianSource`, `UniformSource`, `FixedSource`, `SequenceSource` |
//! | [`error`]       | `QsError`, `QsResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, ticks and configs.  |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Bounds, QueueConfig};
pub use error::{QsError, QsResult};
pub use ids::{AgentId, HandlerId};
pub use rng::{FixedSource, GaussianSource, RandomSource, SequenceSource, UniformSource};
pub use time::{SimClock, Tick};
