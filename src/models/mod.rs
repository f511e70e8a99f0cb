//! Simulation domain models.
//!
//! Provides the data types exchanged between the engine and its callers:
//! process descriptions, per-process results and the execution log.
//!
//! # Domain Mappings
//!
//! | u-procsched | OS textbook | Gantt chart |
//! |-------------|-------------|-------------|
//! | ProcessSpec | PCB (input) | Row label |
//! | ProcessResult | PCB (accounting) | Output table row |
//! | Segment | CPU burst slice | Bar |
//! | ExecutionLog | Dispatch trace | Chart |

mod process;
mod schedule;

pub use process::{ProcessResult, ProcessSpec};
pub use schedule::{ExecutionLog, Segment};
