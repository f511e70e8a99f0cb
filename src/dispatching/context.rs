//! Per-run simulation state.
//!
//! A [`RunState`] owns a private copy of every process for the duration of
//! one run. Policies mutate only this copy; the caller's specs are never
//! touched, and nothing survives into the next run.

use tracing::debug;

use super::{DispatchingRule, IDLE_STEP, REMAINING_TOLERANCE};
use crate::models::{ExecutionLog, ProcessResult, ProcessSpec, Segment};

/// Mutable bookkeeping for one process during a run.
#[derive(Debug, Clone)]
pub struct ProcessState {
    /// Position in the input table (stable tie-break key).
    pub index: usize,
    /// Process identifier.
    pub id: String,
    /// Arrival time.
    pub arrival: f64,
    /// Total CPU time required.
    pub burst: f64,
    /// Effective priority (lower = more important).
    pub priority: i32,
    /// CPU time still owed.
    pub remaining: f64,
    /// Whether the process has completed.
    pub done: bool,
    /// Whether the process has entered the Round-Robin queue.
    pub queued: bool,
    /// First dispatch time.
    pub first_start: Option<f64>,
    /// Clock value at the end of the most recent slice.
    pub last_exec: Option<f64>,
    /// Completion time.
    pub end: Option<f64>,
}

impl ProcessState {
    fn from_spec(index: usize, spec: &ProcessSpec) -> Self {
        Self {
            index,
            id: spec.id.clone(),
            arrival: spec.arrival,
            burst: spec.burst,
            priority: spec.effective_priority(index),
            remaining: spec.burst,
            done: false,
            queued: false,
            first_start: None,
            last_exec: None,
            end: None,
        }
    }

    /// Arrived and not yet finished at `clock`.
    #[inline]
    pub fn is_ready(&self, clock: f64) -> bool {
        !self.done && self.arrival <= clock
    }
}

/// Clock, processes and execution log of a single run.
#[derive(Debug)]
pub(crate) struct RunState {
    pub clock: f64,
    pub processes: Vec<ProcessState>,
    pub log: ExecutionLog,
    context_switch: f64,
    completed: usize,
    last_dispatched: Option<usize>,
}

impl RunState {
    pub fn new(specs: &[ProcessSpec], context_switch: f64) -> Self {
        Self {
            clock: 0.0,
            processes: specs
                .iter()
                .enumerate()
                .map(|(i, s)| ProcessState::from_spec(i, s))
                .collect(),
            log: ExecutionLog::new(),
            context_switch,
            completed: 0,
            last_dispatched: None,
        }
    }

    /// Every process has completed.
    pub fn all_done(&self) -> bool {
        self.completed == self.processes.len()
    }

    /// Whether any process has been dispatched yet.
    pub fn has_dispatched(&self) -> bool {
        self.last_dispatched.is_some()
    }

    /// Index of the most recently dispatched process.
    pub fn last_dispatched(&self) -> Option<usize> {
        self.last_dispatched
    }

    /// Indices of processes sorted by arrival, ties in table order.
    pub fn arrival_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.processes.len()).collect();
        order.sort_by(|&a, &b| {
            self.processes[a]
                .arrival
                .total_cmp(&self.processes[b].arrival)
        });
        order
    }

    /// Picks the ready process with the lowest rule score.
    ///
    /// Ties go to the lowest table index.
    pub fn select_ready<R: DispatchingRule>(&self, rule: &R) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for p in self.processes.iter().filter(|p| p.is_ready(self.clock)) {
            let score = rule.evaluate(p);
            match best {
                Some((_, best_score)) if score >= best_score => {}
                _ => best = Some((p.index, score)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Advances an idle CPU to the next process arrival.
    ///
    /// The clock stays on the `IDLE_STEP` grid anchored at its current
    /// value: it lands on the first whole step at or past the earliest
    /// pending arrival, the same point repeated single steps would reach.
    /// Processes already finished or sitting in a ready queue are ignored.
    pub fn idle(&mut self) {
        let clock = self.clock;
        let next_arrival = self
            .processes
            .iter()
            .filter(|p| !p.done && !p.queued && p.arrival > clock)
            .map(|p| p.arrival)
            .min_by(f64::total_cmp);

        self.clock = match next_arrival {
            Some(next) => {
                let steps = ((next - clock) / IDLE_STEP).ceil();
                // Rounding at large magnitudes must never leave us short
                (clock + steps * IDLE_STEP).max(next)
            }
            None => clock + IDLE_STEP,
        };
        debug!(from = clock, to = self.clock, "cpu idle");
    }

    /// Jumps the clock forward to `time` if it is in the future.
    pub fn advance_to(&mut self, time: f64) {
        if self.clock < time {
            debug!(from = self.clock, to = time, "cpu idle until arrival");
            self.clock = time;
        }
    }

    /// Charges one context switch.
    pub fn charge_switch(&mut self) {
        self.clock += self.context_switch;
    }

    /// Runs process `i` for `amount`, opening a new log segment.
    pub fn execute(&mut self, i: usize, amount: f64) {
        let start = self.clock;
        self.run_for(i, amount);
        let p = &self.processes[i];
        debug!(process = %p.id, start, end = self.clock, "dispatch");
        self.log.push(Segment::new(p.id.clone(), start, self.clock));
    }

    /// Runs process `i` for `amount`, extending the current log segment.
    ///
    /// Falls back to [`execute`](Self::execute) when the last segment
    /// belongs to another process.
    pub fn continue_execution(&mut self, i: usize, amount: f64) {
        let owns_last = self
            .log
            .segments
            .last()
            .is_some_and(|s| s.process_id == self.processes[i].id);
        if !owns_last {
            self.execute(i, amount);
            return;
        }
        self.run_for(i, amount);
        let clock = self.clock;
        if let Some(seg) = self.log.last_mut() {
            seg.extend_to(clock);
        }
    }

    fn run_for(&mut self, i: usize, amount: f64) {
        let clock = self.clock;
        let p = &mut self.processes[i];
        p.first_start.get_or_insert(clock);
        p.remaining -= amount;
        if p.remaining <= p.burst * REMAINING_TOLERANCE {
            p.remaining = 0.0;
        }
        p.last_exec = Some(clock + amount);
        self.clock = clock + amount;
        self.last_dispatched = Some(i);
    }

    /// Marks process `i` as completed at the current clock.
    pub fn complete(&mut self, i: usize) {
        let p = &mut self.processes[i];
        p.remaining = 0.0;
        p.done = true;
        p.end = Some(self.clock);
        self.completed += 1;
        debug!(process = %p.id, end = self.clock, "completed");
    }

    /// Consumes the state, producing the log and per-process results in
    /// input order.
    pub fn finish(self) -> (ExecutionLog, Vec<ProcessResult>) {
        let results = self
            .processes
            .into_iter()
            .map(|p| {
                let end = p.end.unwrap_or(self.clock);
                let start = p.first_start.unwrap_or(end);
                let turnaround = end - p.arrival;
                ProcessResult {
                    id: p.id,
                    arrival: p.arrival,
                    burst: p.burst,
                    priority: p.priority,
                    start,
                    end,
                    turnaround,
                    waiting: (turnaround - p.burst).max(0.0),
                }
            })
            .collect();
        (self.log, results)
    }
}
