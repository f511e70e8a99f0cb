//! Scheduling policies and the dispatch machinery they share.
//!
//! Each policy is a variant of the closed [`Policy`] enum. All of them
//! drive the same per-run state (`context::RunState`): a simulated
//! clock, owned copies of the processes, and the execution log.
//!
//! Dynamic-selection policies (SJF, SRTF, Priority) pick among ready
//! processes with a [`DispatchingRule`]; ties always go to the process
//! that appears first in the input table.
//!
//! # Usage
//!
//! ```
//! use u_procsched::dispatching::Policy;
//! use u_procsched::models::ProcessSpec;
//!
//! let processes = vec![
//!     ProcessSpec::new("A", 0.0, 5.0),
//!     ProcessSpec::new("B", 1.0, 2.0),
//! ];
//! let outcome = Policy::Srtf.run(&processes, 0.0).unwrap();
//! assert_eq!(outcome.log.sequence(), vec!["A", "B", "A"]);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod context;
mod fcfs;
mod nonpreemptive;
mod policy;
mod round_robin;
pub mod rules;
mod srtf;

pub use context::ProcessState;
pub use policy::{Policy, SwitchCharge};

use std::fmt::Debug;

/// Default Round-Robin quantum.
pub const DEFAULT_QUANTUM: f64 = 2.0;

/// Granularity of idle time while no process is ready.
pub const IDLE_STEP: f64 = 1.0;

/// SRTF re-evaluation period.
pub const TICK: f64 = 1.0;

/// Leftover work at or below this fraction of the burst counts as done.
///
/// Repeated fractional slices (e.g. a 0.3 quantum) leave rounding residue
/// that would otherwise be dispatched as an empty slice.
pub const REMAINING_TOLERANCE: f64 = 1e-12;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = f64;

/// A rule ranking ready processes for dispatch.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait DispatchingRule: Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores a ready process.
    fn evaluate(&self, process: &ProcessState) -> RuleScore;
}
