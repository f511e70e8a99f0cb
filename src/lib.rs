//! Single-CPU process scheduling simulator.
//!
//! Simulates how a single CPU would execute a set of processes under a
//! chosen scheduling policy, producing a chronological execution log,
//! per-process timing results and aggregate metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessSpec`, `ProcessResult`, `Segment`, `ExecutionLog`
//! - **`dispatching`**: The five policies (FCFS, SJF, SRTF, RR, Priority) and their rules
//! - **`scheduler`**: `Simulator` entry point and `Metrics`
//! - **`validation`**: Input integrity checks (duplicate IDs, non-positive bursts, quantum)
//! - **`workload`**: Seeded random process sets
//! - **`contention`**: Dining-philosophers lock contention and deadlock detection
//!
//! # Example
//!
//! ```
//! use u_procsched::dispatching::Policy;
//! use u_procsched::models::ProcessSpec;
//!
//! let processes = vec![
//!     ProcessSpec::new("P1", 0.0, 6.0),
//!     ProcessSpec::new("P2", 1.0, 8.0),
//!     ProcessSpec::new("P3", 2.0, 7.0),
//!     ProcessSpec::new("P4", 3.0, 3.0),
//! ];
//! let outcome = Policy::Sjf.run(&processes, 0.0).unwrap();
//! assert_eq!(outcome.log.sequence(), vec!["P1", "P4", "P3", "P2"]);
//! assert_eq!(outcome.metrics.makespan, 24.0);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts"
//! - Tanenbaum & Bos (2015), "Modern Operating Systems"

pub mod contention;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{SimError, SimResult};
