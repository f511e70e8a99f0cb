//! Simulation entry point.
//!
//! # Flow
//!
//! 1. Caller builds a [`SimulationRequest`] (or deserializes one).
//! 2. [`Simulator::run`] validates it and runs the selected policy over a
//!    private copy of the processes.
//! 3. The [`SimulationOutcome`] carries the execution log, the per-process
//!    results in input order, and the aggregate [`Metrics`].

use serde::{Deserialize, Serialize};

use super::Metrics;
use crate::dispatching::Policy;
use crate::error::SimResult;
use crate::models::{ExecutionLog, ProcessResult, ProcessSpec};

/// Input container for one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes in table order.
    pub processes: Vec<ProcessSpec>,
    /// Cost charged when the CPU changes process.
    #[serde(default)]
    pub context_switch: f64,
    /// Policy to simulate.
    pub policy: Policy,
}

impl SimulationRequest {
    /// Creates a request with zero context-switch cost.
    pub fn new(processes: Vec<ProcessSpec>, policy: Policy) -> Self {
        Self {
            processes,
            context_switch: 0.0,
            policy,
        }
    }

    /// Sets the context-switch cost.
    pub fn with_context_switch(mut self, context_switch: f64) -> Self {
        self.context_switch = context_switch;
        self
    }

    /// Replaces the policy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }
}

/// Result of one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Policy that produced this outcome.
    pub policy: Policy,
    /// Chronological execution segments.
    pub log: ExecutionLog,
    /// Per-process results in input order.
    pub processes: Vec<ProcessResult>,
    /// Aggregate statistics.
    pub metrics: Metrics,
}

impl SimulationOutcome {
    /// Result for a given process.
    pub fn process(&self, id: &str) -> Option<&ProcessResult> {
        self.processes.iter().find(|p| p.id == id)
    }
}

/// Runs simulation requests and policy comparisons.
///
/// # Example
///
/// ```
/// use u_procsched::dispatching::Policy;
/// use u_procsched::models::ProcessSpec;
/// use u_procsched::scheduler::{SimulationRequest, Simulator};
///
/// let request = SimulationRequest::new(
///     vec![ProcessSpec::new("A", 0.0, 5.0), ProcessSpec::new("B", 1.0, 3.0)],
///     Policy::round_robin(2.0),
/// );
/// let outcome = Simulator::new().run(&request).unwrap();
/// assert_eq!(outcome.process("A").unwrap().end, 8.0);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    policies: Vec<Policy>,
}

impl Simulator {
    /// Creates a simulator comparing all five policies.
    pub fn new() -> Self {
        Self {
            policies: Policy::ALL.to_vec(),
        }
    }

    /// Sets the policies used by [`compare`](Self::compare).
    pub fn with_policies(mut self, policies: Vec<Policy>) -> Self {
        self.policies = policies;
        self
    }

    /// Runs one request.
    pub fn run(&self, request: &SimulationRequest) -> SimResult<SimulationOutcome> {
        request
            .policy
            .run(&request.processes, request.context_switch)
    }

    /// Runs every configured policy over the same process set.
    ///
    /// Stops at the first invalid input; since validation does not depend
    /// on the policy except for the quantum, this is usually the first run.
    pub fn compare(
        &self,
        processes: &[ProcessSpec],
        context_switch: f64,
    ) -> SimResult<Vec<SimulationOutcome>> {
        self.policies
            .iter()
            .map(|policy| policy.run(processes, context_switch))
            .collect()
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}
