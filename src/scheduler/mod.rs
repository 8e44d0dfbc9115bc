pub mod fcfs;
pub mod rr;
pub mod sjf;
pub mod srtf;

pub use fcfs::fcfs;
pub use rr::round_robin;
pub use sjf::predicted_sjf;
pub use srtf::srtf;

use crate::core::{PolicyRun, Process, SimError, Ticks};

/// A scheduling policy with its parameters bound, so drivers can iterate
/// policies uniformly.
pub trait Policy {
    fn name(&self) -> &'static str;

    fn run(&self, processes: &[Process]) -> Result<PolicyRun, SimError>;
}

pub struct Fcfs;

impl Policy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&self, processes: &[Process]) -> Result<PolicyRun, SimError> {
        Ok(fcfs(processes))
    }
}

pub struct RoundRobin {
    pub quantum: Ticks,
}

impl Policy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn run(&self, processes: &[Process]) -> Result<PolicyRun, SimError> {
        round_robin(processes, self.quantum)
    }
}

pub struct Srtf;

impl Policy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn run(&self, processes: &[Process]) -> Result<PolicyRun, SimError> {
        srtf(processes)
    }
}

pub struct PredictedSjf {
    pub alpha: f64,
}

impl Policy for PredictedSjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn run(&self, processes: &[Process]) -> Result<PolicyRun, SimError> {
        predicted_sjf(processes, self.alpha)
    }
}
