//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.
//! Ties are broken by table order when the run state selects among
//! ready processes.

use super::{DispatchingRule, ProcessState, RuleScore};

/// Shortest burst first (SJF).
///
/// Minimizes mean waiting time among non-preemptive policies when all
/// processes are available at once.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &ProcessState) -> RuleScore {
        process.burst
    }
}

/// Shortest remaining time first (SRTF).
///
/// The preemptive variant of [`ShortestBurst`]: scores by the CPU time
/// still owed rather than the original burst.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(&self, process: &ProcessState) -> RuleScore {
        process.remaining
    }
}

/// Lowest priority number first.
#[derive(Debug, Clone, Copy)]
pub struct PriorityKey;

impl DispatchingRule for PriorityKey {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &ProcessState) -> RuleScore {
        process.priority as f64
    }
}
