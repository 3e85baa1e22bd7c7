//! Workspace error type.
//!
//! Only configuration problems are errors here.  Every outcome of a run
//! (decline, idle handler, agent still queued at the end) is modelled as
//! agent or handler state instead.

use thiserror::Error;

/// The top-level error type for `qs-core` and a common base for sub-crates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QsError {
    #[error("{what} bounds are inverted: min {min} > max {max}")]
    InvalidBounds {
        what: &'static str,
        min:  u64,
        max:  u64,
    },

    #[error("{what} lower bound must be at least 1")]
    ZeroBound { what: &'static str },

    #[error("handler count must be at least 1")]
    NoHandlers,

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `qs-*` crates.
pub type QsResult<T> = Result<T, QsError>;
