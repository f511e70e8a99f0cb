//! Error types for the simulation engine.
//!
//! Every precondition failure is fatal to the run it belongs to: the
//! simulation is deterministic, so nothing is retried.

use thiserror::Error;

/// Errors produced while validating or running a simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A process has a non-positive burst, a negative arrival, a
    /// non-finite time value or an empty identifier.
    #[error("invalid process '{id}': {reason}")]
    InvalidProcess {
        /// Offending process ID (may be empty).
        id: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Two processes share the same ID.
    #[error("duplicate process ID: {0}")]
    DuplicateProcessId(String),

    /// Context-switch cost is negative or not finite.
    #[error("invalid context-switch cost: {0}")]
    InvalidContextSwitch(f64),

    /// Round-Robin quantum is not strictly positive.
    #[error("invalid time quantum: {0} (must be > 0)")]
    InvalidQuantum(f64),

    /// Policy tag not recognised.
    #[error("unknown scheduling policy '{0}' (valid: fcfs, sjf, srtf, rr, priority)")]
    UnknownPolicy(String),

    /// Nothing to schedule or aggregate.
    #[error("process set is empty")]
    EmptyProcessSet,

    /// Metrics are undefined for a run that never advanced the clock.
    #[error("makespan is zero; utilization is undefined")]
    ZeroMakespan,
}

impl SimError {
    pub(crate) fn invalid_process(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidProcess {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type SimResult<T> = Result<T, SimError>;
