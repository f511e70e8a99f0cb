//! Round-Robin with a fixed quantum and a FIFO ready queue.
//!
//! # Algorithm
//!
//! 1. Enqueue, in arrival order and at most once each, every process that
//!    has arrived by the current clock. If the queue is empty, idle up
//!    to the next arrival and retry.
//! 2. Dequeue the head and decide whether to charge a context switch
//!    (see [`SwitchCharge`]).
//! 3. Run it for `min(remaining, quantum)` as one segment.
//! 4. Enqueue processes that arrived during the slice, then push the
//!    just-run process to the tail if it still has work.

use std::collections::VecDeque;

use super::context::RunState;
use super::SwitchCharge;

pub(super) fn run(state: &mut RunState, quantum: f64, charge: SwitchCharge) {
    let order = state.arrival_order();
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(order.len());

    while !state.all_done() {
        enqueue_arrivals(state, &order, &mut queue);

        let Some(i) = queue.pop_front() else {
            state.idle();
            continue;
        };

        if should_charge(state, i, charge) {
            state.charge_switch();
        }

        let slice = state.processes[i].remaining.min(quantum);
        state.execute(i, slice);

        // Arrivals during the slice go ahead of the preempted process
        enqueue_arrivals(state, &order, &mut queue);

        if state.processes[i].remaining > 0.0 {
            queue.push_back(i);
        } else {
            state.complete(i);
        }
    }
}

fn enqueue_arrivals(state: &mut RunState, order: &[usize], queue: &mut VecDeque<usize>) {
    let clock = state.clock;
    for &i in order {
        let p = &mut state.processes[i];
        if !p.queued && p.arrival <= clock {
            p.queued = true;
            queue.push_back(i);
        }
    }
}

fn should_charge(state: &RunState, i: usize, charge: SwitchCharge) -> bool {
    match charge {
        SwitchCharge::LastExecution => state.processes[i]
            .last_exec
            .is_some_and(|t| t != state.clock),
        SwitchCharge::ProcessChange => state.last_dispatched().is_some_and(|prev| prev != i),
    }
}

#[cfg(test)]
mod tests {
    use crate::dispatching::{Policy, SwitchCharge};
    use crate::models::{ProcessSpec, Segment};

    fn two_processes() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new("A", 0.0, 5.0),
            ProcessSpec::new("B", 1.0, 3.0),
        ]
    }

    #[test]
    fn test_rr_quantum_two() {
        let out = Policy::round_robin(2.0).run(&two_processes(), 0.0).unwrap();
        assert_eq!(
            out.log.segments,
            vec![
                Segment::new("A", 0.0, 2.0),
                Segment::new("B", 2.0, 4.0),
                Segment::new("A", 4.0, 6.0),
                Segment::new("B", 6.0, 7.0),
                Segment::new("A", 7.0, 8.0),
            ]
        );
        assert_eq!(out.processes[0].end, 8.0);
        assert_eq!(out.processes[1].end, 7.0);
    }

    #[test]
    fn test_rr_new_arrival_before_returning_process() {
        let procs = vec![
            ProcessSpec::new("A", 0.0, 4.0),
            ProcessSpec::new("B", 0.0, 2.0),
            ProcessSpec::new("C", 3.0, 1.0),
        ];
        let out = Policy::round_robin(2.0).run(&procs, 0.0).unwrap();
        // C arrives during B's slice, after A was already re-queued
        assert_eq!(out.log.sequence(), vec!["A", "B", "A", "C"]);
    }

    #[test]
    fn test_rr_arrival_during_slice_precedes_requeue() {
        let procs = vec![
            ProcessSpec::new("A", 0.0, 4.0),
            ProcessSpec::new("B", 1.0, 1.0),
        ];
        let out = Policy::round_robin(2.0).run(&procs, 0.0).unwrap();
        // B arrives during A's first slice and runs before A resumes
        assert_eq!(out.log.sequence(), vec!["A", "B", "A"]);
        assert_eq!(out.processes[1].end, 3.0);
        assert_eq!(out.processes[0].end, 5.0);
    }

    #[test]
    fn test_rr_sole_process_resumes_without_charge() {
        let procs = vec![ProcessSpec::new("A", 0.0, 5.0)];
        let out = Policy::round_robin(2.0).run(&procs, 1.0).unwrap();
        assert_eq!(out.processes[0].end, 5.0);
        assert_eq!(out.log.len(), 3);
        assert_eq!(out.log.coalesced().len(), 1);
    }

    #[test]
    fn test_rr_last_execution_rule() {
        let out = Policy::round_robin(2.0).run(&two_processes(), 1.0).unwrap();
        // First dispatches are never charged under the literal rule
        assert_eq!(out.log.segments[0], Segment::new("A", 0.0, 2.0));
        assert_eq!(out.log.segments[1], Segment::new("B", 2.0, 4.0));
        assert_eq!(out.log.segments[2], Segment::new("A", 5.0, 7.0));
        assert_eq!(out.log.segments[3], Segment::new("B", 8.0, 9.0));
        assert_eq!(out.log.segments[4], Segment::new("A", 10.0, 11.0));
    }

    #[test]
    fn test_rr_process_change_rule() {
        let policy = Policy::RoundRobin {
            quantum: 2.0,
            charge: SwitchCharge::ProcessChange,
        };
        let out = policy.run(&two_processes(), 1.0).unwrap();
        assert_eq!(out.log.segments[0], Segment::new("A", 0.0, 2.0));
        assert_eq!(out.log.segments[1], Segment::new("B", 3.0, 5.0));
        assert_eq!(out.log.segments[2], Segment::new("A", 6.0, 8.0));
        assert_eq!(out.log.segments[3], Segment::new("B", 9.0, 10.0));
        assert_eq!(out.log.segments[4], Segment::new("A", 11.0, 12.0));
    }

    #[test]
    fn test_rr_fractional_quantum_no_residue_slices() {
        let procs = vec![
            ProcessSpec::new("A", 0.0, 0.9),
            ProcessSpec::new("B", 0.0, 0.9),
        ];
        let policy = Policy::RoundRobin {
            quantum: 0.3,
            charge: SwitchCharge::ProcessChange,
        };
        let out = policy.run(&procs, 1.0).unwrap();
        // A B A B A B, one switch charge between each pair
        assert_eq!(out.log.sequence(), vec!["A", "B", "A", "B", "A", "B"]);
        assert_eq!(out.log.context_switches(), 5);
        assert!((out.metrics.makespan - 6.8).abs() < 1e-9);
        assert!(out.log.iter().all(|s| s.duration > 1e-9));
    }

    #[test]
    fn test_rr_fractional_quantum_single_process() {
        let procs = vec![ProcessSpec::new("A", 0.0, 0.7)];
        let out = Policy::round_robin(0.1).run(&procs, 0.0).unwrap();
        assert_eq!(out.log.len(), 7);
        assert!(out.log.iter().all(|s| s.duration > 1e-9));
        assert!((out.processes[0].end - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_rr_idle_until_arrival() {
        let procs = vec![ProcessSpec::new("A", 2.0, 1.0)];
        let out = Policy::round_robin(4.0).run(&procs, 0.0).unwrap();
        assert_eq!(out.log.segments, vec![Segment::new("A", 2.0, 3.0)]);
    }

    #[test]
    fn test_rr_large_quantum_is_fcfs() {
        let procs = vec![
            ProcessSpec::new("P1", 1.0, 3.0),
            ProcessSpec::new("P2", 0.0, 2.0),
        ];
        let rr = Policy::round_robin(100.0).run(&procs, 0.0).unwrap();
        let fcfs = Policy::Fcfs.run(&procs, 0.0).unwrap();
        assert_eq!(rr.log, fcfs.log);
    }
}
