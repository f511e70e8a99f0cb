//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival.
//! 2. For each process in that order, move the clock up to its arrival.
//! 3. Charge a context switch before every dispatch except the first.
//! 4. Run the process to completion in one segment.
//!
//! The order is fixed once sorted; nothing is re-evaluated.

use super::context::RunState;

pub(super) fn run(state: &mut RunState) {
    for (position, i) in state.arrival_order().into_iter().enumerate() {
        let arrival = state.processes[i].arrival;
        state.advance_to(arrival);
        if position != 0 {
            state.charge_switch();
        }
        let burst = state.processes[i].burst;
        state.execute(i, burst);
        state.complete(i);
    }
}
