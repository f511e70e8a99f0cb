//! Process model.
//!
//! A process is one schedulable unit of CPU work. Callers describe it with
//! a [`ProcessSpec`]; a finished run reports it back as a [`ProcessResult`]
//! carrying the derived completion fields.
//!
//! # Time Representation
//! Times are abstract simulation units (f64) relative to t=0. Fractional
//! values are allowed; unit-step policies (SRTF, idle advance) still move
//! the clock in steps of 1.

use serde::{Deserialize, Serialize};

/// Input description of a process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process identifier.
    pub id: String,
    /// Time at which the process becomes eligible to run.
    pub arrival: f64,
    /// Total CPU time required.
    pub burst: f64,
    /// Priority key (lower = more important). `None` = table position.
    #[serde(default)]
    pub priority: Option<i32>,
}

impl ProcessSpec {
    /// Creates a new process description.
    pub fn new(id: impl Into<String>, arrival: f64, burst: f64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: None,
        }
    }

    /// Sets an explicit priority (lower = more important).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Priority used by the Priority policy.
    ///
    /// Falls back to the 1-based position in the input table.
    pub fn effective_priority(&self, position: usize) -> i32 {
        self.priority.unwrap_or((position + 1) as i32)
    }
}

/// A process after a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process identifier.
    pub id: String,
    /// Arrival time.
    pub arrival: f64,
    /// Burst time.
    pub burst: f64,
    /// Effective priority used for this run.
    pub priority: i32,
    /// First dispatch time. For non-preemptive policies this is the only one.
    pub start: f64,
    /// Completion time.
    pub end: f64,
    /// `end - arrival`.
    pub turnaround: f64,
    /// `turnaround - burst`, never negative.
    pub waiting: f64,
}

impl ProcessResult {
    /// Time from arrival to first dispatch.
    #[inline]
    pub fn response(&self) -> f64 {
        self.start - self.arrival
    }
}
