//! Reproducible random process sets.
//!
//! Stands in for the interactive process table when exercising the
//! engine: the same seed always yields the same processes.
//!
//! Times are quantized to a resolution (1.0 by default) so that schedules
//! stay free of floating-point noise.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::ProcessSpec;

/// Seeded generator of [`ProcessSpec`] sets.
///
/// # Example
/// ```
/// use u_procsched::workload::WorkloadGenerator;
///
/// let procs = WorkloadGenerator::new(4).with_seed(42).generate();
/// assert_eq!(procs.len(), 4);
/// assert_eq!(procs[0].id, "P1");
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    seed: u64,
    arrival_spread: f64,
    burst_min: f64,
    burst_max: f64,
    resolution: f64,
    random_priorities: bool,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            seed: 0,
            arrival_spread: 10.0,
            burst_min: 1.0,
            burst_max: 10.0,
            resolution: 1.0,
            random_priorities: false,
        }
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Arrivals are drawn from `[0, spread]`. Zero puts every arrival at 0.
    pub fn with_arrival_spread(mut self, spread: f64) -> Self {
        self.arrival_spread = spread.max(0.0);
        self
    }

    /// Bursts are drawn from `[min, max]`.
    pub fn with_burst_range(mut self, min: f64, max: f64) -> Self {
        self.burst_min = min;
        self.burst_max = max.max(min);
        self
    }

    /// Quantizes every generated time to a multiple of `resolution`.
    pub fn with_resolution(mut self, resolution: f64) -> Self {
        if resolution > 0.0 {
            self.resolution = resolution;
        }
        self
    }

    /// Assigns random explicit priorities in `1..=count`.
    pub fn with_random_priorities(mut self, enabled: bool) -> Self {
        self.random_priorities = enabled;
        self
    }

    /// Generates the process set. IDs are `P1..Pn` in table order.
    pub fn generate(&self) -> Vec<ProcessSpec> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..self.count)
            .map(|i| {
                let arrival = if self.arrival_spread > 0.0 {
                    self.quantize(rng.random_range(0.0..=self.arrival_spread))
                } else {
                    0.0
                };
                let burst = if self.burst_max > self.burst_min {
                    rng.random_range(self.burst_min..=self.burst_max)
                } else {
                    self.burst_min
                };
                // Never round a burst down to zero
                let burst = self.quantize(burst).max(self.resolution);

                let spec = ProcessSpec::new(format!("P{}", i + 1), arrival, burst);
                if self.random_priorities {
                    spec.with_priority(rng.random_range(1..=self.count.max(1) as i32))
                } else {
                    spec
                }
            })
            .collect()
    }

    fn quantize(&self, value: f64) -> f64 {
        (value / self.resolution).round() * self.resolution
    }
}
