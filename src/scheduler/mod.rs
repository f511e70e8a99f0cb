//! Simulation runner and metrics.
//!
//! # Simulator
//!
//! [`Simulator`] accepts a [`SimulationRequest`] (processes, context-switch
//! cost, policy), runs it through [`Policy::run`](crate::dispatching::Policy::run)
//! and returns a [`SimulationOutcome`]. [`Simulator::compare`] runs several
//! policies over the same process set.
//!
//! # Metrics
//!
//! [`Metrics`] computes CPU utilization, mean waiting, turnaround and
//! response time, throughput and idle time from a finished run.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2-5.3

mod metrics;
mod simulator;

pub use metrics::Metrics;
pub use simulator::{SimulationOutcome, SimulationRequest, Simulator};
