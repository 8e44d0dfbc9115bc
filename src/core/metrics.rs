use average::{Estimate, Mean};

use super::process::Ticks;

/// Accumulates per-process waiting times as processes complete.
///
/// Waiting time is `completion - arrival - burst`. The average is taken over
/// the whole input population; by the time a policy returns, every process
/// has completed exactly once.
#[derive(Debug, Default)]
pub struct WaitTally {
    waits: Vec<f64>,
}

impl WaitTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn complete(&mut self, completion: Ticks, arrival: Ticks, burst: Ticks) {
        debug_assert!(
            completion >= arrival + burst,
            "completion at {completion} precedes arrival {arrival} + burst {burst}"
        );
        self.waits.push((completion - arrival - burst) as f64);
    }

    /// Mean waiting time over a population of `total` processes.
    pub fn average(&self, total: usize) -> f64 {
        debug_assert_eq!(self.waits.len(), total, "not every process completed");
        if total == 0 {
            return 0.0;
        }
        self.waits.iter().copied().collect::<Mean>().estimate()
    }
}
