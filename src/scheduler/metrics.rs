//! Run metrics.
//!
//! Reduces the per-process results of a completed run into summary
//! statistics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | CPU Utilization | sum(burst) / makespan |
//! | Mean Waiting | mean(turnaround - burst) |
//! | Mean Turnaround | mean(end - arrival) |
//! | Mean Response | mean(first dispatch - arrival) |
//! | Throughput | processes / makespan |
//! | Idle Time | makespan - sum(burst), switch overhead included |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::models::{ExecutionLog, ProcessResult};

/// Summary statistics of a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Number of processes.
    pub process_count: usize,
    /// Latest completion time.
    pub makespan: f64,
    /// Sum of all bursts.
    pub total_burst: f64,
    /// `total_burst / makespan` (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Mean waiting time.
    pub mean_waiting: f64,
    /// Mean turnaround time.
    pub mean_turnaround: f64,
    /// Mean time from arrival to first dispatch.
    pub mean_response: f64,
    /// Largest waiting time of any process.
    pub max_waiting: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Time the CPU ran no process.
    pub idle_time: f64,
    /// Adjacent log segments with different processes.
    pub context_switches: usize,
}

impl Metrics {
    /// Computes metrics from per-process results and the execution log.
    ///
    /// # Errors
    /// - [`SimError::EmptyProcessSet`] if `processes` is empty.
    /// - [`SimError::ZeroMakespan`] if no process ever ended after t=0.
    pub fn calculate(processes: &[ProcessResult], log: &ExecutionLog) -> SimResult<Self> {
        if processes.is_empty() {
            return Err(SimError::EmptyProcessSet);
        }

        let makespan = processes.iter().map(|p| p.end).fold(0.0, f64::max);
        if makespan <= 0.0 {
            return Err(SimError::ZeroMakespan);
        }

        let n = processes.len() as f64;
        let total_burst: f64 = processes.iter().map(|p| p.burst).sum();
        let total_waiting: f64 = processes.iter().map(|p| p.waiting).sum();
        let total_turnaround: f64 = processes.iter().map(|p| p.turnaround).sum();
        let total_response: f64 = processes.iter().map(|p| p.response()).sum();
        let max_waiting = processes.iter().map(|p| p.waiting).fold(0.0, f64::max);

        Ok(Self {
            process_count: processes.len(),
            makespan,
            total_burst,
            cpu_utilization: total_burst / makespan,
            mean_waiting: total_waiting / n,
            mean_turnaround: total_turnaround / n,
            mean_response: total_response / n,
            max_waiting,
            throughput: n / makespan,
            idle_time: (makespan - total_burst).max(0.0),
            context_switches: log.context_switches(),
        })
    }

    /// CPU utilization as a percentage.
    pub fn cpu_utilization_percent(&self) -> f64 {
        self.cpu_utilization * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Segment;

    fn result(id: &str, arrival: f64, burst: f64, start: f64, end: f64) -> ProcessResult {
        let turnaround = end - arrival;
        ProcessResult {
            id: id.into(),
            arrival,
            burst,
            priority: 1,
            start,
            end,
            turnaround,
            waiting: turnaround - burst,
        }
    }

    #[test]
    fn test_metrics_basic() {
        let procs = vec![
            result("P1", 0.0, 2.0, 0.0, 2.0),
            result("P2", 1.0, 3.0, 2.0, 5.0),
        ];
        let mut log = ExecutionLog::new();
        log.push(Segment::new("P1", 0.0, 2.0));
        log.push(Segment::new("P2", 2.0, 5.0));

        let m = Metrics::calculate(&procs, &log).unwrap();
        assert_eq!(m.process_count, 2);
        assert_eq!(m.makespan, 5.0);
        assert!((m.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((m.mean_waiting - 0.5).abs() < 1e-10); // (0 + 1) / 2
        assert!((m.mean_turnaround - 3.0).abs() < 1e-10); // (2 + 4) / 2
        assert!((m.mean_response - 0.5).abs() < 1e-10);
        assert!((m.throughput - 0.4).abs() < 1e-10);
        assert_eq!(m.max_waiting, 1.0);
        assert_eq!(m.idle_time, 0.0);
        assert_eq!(m.context_switches, 1);
    }

    #[test]
    fn test_metrics_with_idle_gap() {
        let procs = vec![
            result("P1", 0.0, 1.0, 0.0, 1.0),
            result("P2", 3.0, 1.0, 3.0, 4.0),
        ];
        let m = Metrics::calculate(&procs, &ExecutionLog::new()).unwrap();
        assert!((m.cpu_utilization - 0.5).abs() < 1e-10);
        assert!((m.cpu_utilization_percent() - 50.0).abs() < 1e-10);
        assert_eq!(m.idle_time, 2.0);
    }

    #[test]
    fn test_metrics_empty() {
        assert_eq!(
            Metrics::calculate(&[], &ExecutionLog::new()),
            Err(SimError::EmptyProcessSet)
        );
    }

    #[test]
    fn test_metrics_zero_makespan() {
        let procs = vec![result("P1", 0.0, 0.0, 0.0, 0.0)];
        assert_eq!(
            Metrics::calculate(&procs, &ExecutionLog::new()),
            Err(SimError::ZeroMakespan)
        );
    }
}
