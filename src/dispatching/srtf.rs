//! Shortest-Remaining-Time-First (preemptive).
//!
//! # Algorithm
//!
//! The clock advances one tick at a time. Each tick:
//! 1. Pick the ready process with the least remaining time (ties by table
//!    order). If none is ready, idle up to the next arrival.
//! 2. If it differs from the previous tick's process, charge a context
//!    switch (never before the first dispatch) and open a new segment;
//!    otherwise extend the current segment.
//! 3. Run it for one tick, or for its leftover if that is shorter.
//!
//! Consecutive ticks of the same process therefore end up as one span in
//! the log, and every span ends at the tick it actually stopped running.

use super::context::RunState;
use super::rules::ShortestRemaining;
use super::TICK;

pub(super) fn run(state: &mut RunState) {
    let mut previous: Option<usize> = None;
    while !state.all_done() {
        let Some(i) = state.select_ready(&ShortestRemaining) else {
            state.idle();
            continue;
        };
        let slice = state.processes[i].remaining.min(TICK);
        if previous == Some(i) {
            state.continue_execution(i, slice);
        } else {
            if previous.is_some() {
                state.charge_switch();
            }
            state.execute(i, slice);
        }
        if state.processes[i].remaining <= 0.0 {
            state.complete(i);
        }
        previous = Some(i);
    }
}
