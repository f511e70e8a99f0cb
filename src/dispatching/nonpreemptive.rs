//! Non-preemptive dynamic selection (SJF, Priority).
//!
//! # Algorithm
//!
//! At each decision point:
//! 1. Among arrived, undispatched processes, pick the best by rule score
//!    (ties by table order).
//! 2. If none is ready, idle up to the next arrival and retry.
//! 3. Charge a context switch unless this is the very first dispatch.
//! 4. Run the selected process to completion.
//!
//! Idle time is counted in whole steps, so a process arriving at
//! a fractional time starts at the next whole step after it.

use tracing::debug;

use super::context::RunState;
use super::DispatchingRule;

pub(super) fn run<R: DispatchingRule>(state: &mut RunState, rule: &R) {
    while !state.all_done() {
        let Some(i) = state.select_ready(rule) else {
            state.idle();
            continue;
        };
        debug!(
            rule = rule.name(),
            process = %state.processes[i].id,
            clock = state.clock,
            "selected"
        );
        if state.has_dispatched() {
            state.charge_switch();
        }
        let burst = state.processes[i].burst;
        state.execute(i, burst);
        state.complete(i);
    }
}
