//! Execution log (Gantt) model.
//!
//! An execution log is the chronological list of spans during which a
//! single process occupied the CPU. Gaps between segments are idle time or
//! context-switch overhead.

use serde::{Deserialize, Serialize};

/// A contiguous span of CPU occupancy by one process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Process occupying the CPU.
    pub process_id: String,
    /// Span start.
    pub start: f64,
    /// Span end.
    pub end: f64,
    /// `end - start`.
    pub duration: f64,
}

impl Segment {
    /// Creates a segment covering `[start, end)`.
    pub fn new(process_id: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
            duration: end - start,
        }
    }

    /// Moves the end of this segment, keeping `duration` in sync.
    pub(crate) fn extend_to(&mut self, end: f64) {
        self.end = end;
        self.duration = end - self.start;
    }
}

/// Ordered, non-overlapping list of execution segments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionLog {
    /// Segments in chronological order.
    pub segments: Vec<Segment>,
}

impl ExecutionLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Mutable access to the most recent segment.
    pub(crate) fn last_mut(&mut self) -> Option<&mut Segment> {
        self.segments.last_mut()
    }

    /// Latest segment end (0 for an empty log).
    pub fn makespan(&self) -> f64 {
        self.segments.iter().map(|s| s.end).fold(0.0, f64::max)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the log has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates segments in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// All segments belonging to a process.
    pub fn segments_for(&self, process_id: &str) -> Vec<&Segment> {
        self.segments
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Total CPU time granted to a process.
    pub fn busy_time_for(&self, process_id: &str) -> f64 {
        self.segments_for(process_id)
            .iter()
            .map(|s| s.duration)
            .sum()
    }

    /// Total CPU time granted to all processes.
    pub fn busy_time(&self) -> f64 {
        self.segments.iter().map(|s| s.duration).sum()
    }

    /// Completion time of a process (end of its last segment).
    pub fn completion_time(&self, process_id: &str) -> Option<f64> {
        self.segments
            .iter()
            .rev()
            .find(|s| s.process_id == process_id)
            .map(|s| s.end)
    }

    /// Process IDs in segment order.
    pub fn sequence(&self) -> Vec<&str> {
        self.segments.iter().map(|s| s.process_id.as_str()).collect()
    }

    /// Number of adjacent segment pairs whose processes differ.
    pub fn context_switches(&self) -> usize {
        self.segments
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count()
    }

    /// Returns a copy with back-to-back segments of the same process merged.
    ///
    /// Segments merge only when the second starts exactly where the first
    /// ends; a same-process resumption after a gap stays separate.
    pub fn coalesced(&self) -> ExecutionLog {
        let mut merged = ExecutionLog::new();
        for seg in &self.segments {
            match merged.last_mut() {
                Some(last) if last.process_id == seg.process_id && last.end == seg.start => {
                    last.extend_to(seg.end);
                }
                _ => merged.push(seg.clone()),
            }
        }
        merged
    }
}
