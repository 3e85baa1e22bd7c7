//! `qs-agent` — agents and their arrival timeline.
//!
//! # Crate layout
//!
//! | Module          | Contents                                         |
//! |-----------------|--------------------------------------------------|
//! | [`agent`]       | `Agent`, `AgentStatus` (the per-agent state machine) |
//! | [`generator`]   | `AgentGenerator` (builds the timeline up front)  |
//!
//! # Lifecycle
//!
//! ```text
//!  None ──► Declined                      (queue full, no idle handler)
//!    │
//!    └───► InQueue ──► OnService ──► Free
//! ```
//!
//! `Declined` and `Free` are terminal.  Transitions only move rightwards;
//! the methods on [`Agent`] enforce this with debug assertions.

pub mod agent;
pub mod generator;


pub use agent::{Agent, AgentStatus};
pub use generator::{AgentGenerator, arrival_times};
