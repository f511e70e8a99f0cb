//! Policy selection.
//!
//! The five policies form a closed set; callers pick one explicitly and
//! [`Policy::run`] dispatches to its algorithm with a `match`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::context::RunState;
use super::rules::{PriorityKey, ShortestBurst};
use super::{fcfs, nonpreemptive, round_robin, srtf, DEFAULT_QUANTUM};
use crate::error::{SimError, SimResult};
use crate::models::ProcessSpec;
use crate::scheduler::{Metrics, SimulationOutcome};
use crate::validation::validate_input;

/// When Round-Robin charges the context-switch cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwitchCharge {
    /// Charge when the dispatched process has run before and its last
    /// slice ended at a different clock value than now. A process's first
    /// dispatch is never charged.
    #[default]
    LastExecution,
    /// Charge whenever the dispatched process differs from the previously
    /// dispatched one.
    ProcessChange,
}

/// A CPU scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Shortest-Remaining-Time-First, preemptive.
    Srtf,
    /// Round-Robin with a fixed quantum.
    #[serde(rename = "rr")]
    RoundRobin {
        /// Maximum slice per dispatch.
        quantum: f64,
        /// Context-switch charging rule.
        #[serde(default)]
        charge: SwitchCharge,
    },
    /// Non-preemptive priority (lower number first).
    Priority,
}

impl Policy {
    /// Every policy, Round-Robin with the default quantum.
    pub const ALL: [Policy; 5] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::Srtf,
        Policy::RoundRobin {
            quantum: DEFAULT_QUANTUM,
            charge: SwitchCharge::LastExecution,
        },
        Policy::Priority,
    ];

    /// Round-Robin with the given quantum and the default charging rule.
    pub fn round_robin(quantum: f64) -> Self {
        Self::RoundRobin {
            quantum,
            charge: SwitchCharge::default(),
        }
    }

    /// Short tag (`fcfs`, `sjf`, `srtf`, `rr`, `priority`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Srtf => "srtf",
            Self::RoundRobin { .. } => "rr",
            Self::Priority => "priority",
        }
    }

    /// Whether a running process can lose the CPU before finishing.
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::Srtf | Self::RoundRobin { .. })
    }

    /// Round-Robin quantum, if any.
    pub fn quantum(&self) -> Option<f64> {
        match self {
            Self::RoundRobin { quantum, .. } => Some(*quantum),
            _ => None,
        }
    }

    /// Simulates this policy over `processes`.
    ///
    /// Validates the input first; on any problem the run is not attempted
    /// and the first error is returned.
    ///
    /// # Errors
    /// - [`SimError::InvalidProcess`] / [`SimError::DuplicateProcessId`]
    /// - [`SimError::InvalidContextSwitch`]
    /// - [`SimError::InvalidQuantum`] (Round-Robin only)
    /// - [`SimError::EmptyProcessSet`]
    pub fn run(
        &self,
        processes: &[ProcessSpec],
        context_switch: f64,
    ) -> SimResult<SimulationOutcome> {
        if let Err(mut errors) = validate_input(processes, context_switch, self.quantum()) {
            warn!(policy = self.as_str(), problems = errors.len(), "rejected simulation input");
            return Err(errors.remove(0));
        }

        let mut state = RunState::new(processes, context_switch);
        match *self {
            Self::Fcfs => fcfs::run(&mut state),
            Self::Sjf => nonpreemptive::run(&mut state, &ShortestBurst),
            Self::Srtf => srtf::run(&mut state),
            Self::RoundRobin { quantum, charge } => round_robin::run(&mut state, quantum, charge),
            Self::Priority => nonpreemptive::run(&mut state, &PriorityKey),
        }

        let (log, results) = state.finish();
        let metrics = Metrics::calculate(&results, &log)?;
        info!(
            policy = self.as_str(),
            processes = results.len(),
            segments = log.len(),
            makespan = metrics.makespan,
            "simulation complete"
        );

        Ok(SimulationOutcome {
            policy: *self,
            log,
            processes: results,
            metrics,
        })
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum, .. } => write!(f, "rr(q={quantum})"),
            other => f.write_str(other.as_str()),
        }
    }
}

impl FromStr for Policy {
    type Err = SimError;

    /// Parses a policy tag. `rr` gets [`DEFAULT_QUANTUM`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fcfs" | "fifo" | "first_come_first_served" => Ok(Self::Fcfs),
            "sjf" | "shortest_job_first" => Ok(Self::Sjf),
            "srtf" | "shortest_remaining_time_first" => Ok(Self::Srtf),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::round_robin(DEFAULT_QUANTUM)),
            "priority" | "prio" => Ok(Self::Priority),
            _ => Err(SimError::UnknownPolicy(s.to_string())),
        }
    }
}
