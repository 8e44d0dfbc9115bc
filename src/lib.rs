//! Offline, deterministic simulation of CPU scheduling policies.
//!
//! Each policy consumes an arrival-ordered process list and independently
//! produces a dispatch schedule plus the average waiting time over all
//! processes. Nothing is shared between invocations; callers keep ownership
//! of their input.

pub mod core;
pub mod scheduler;
pub mod sim;

pub use crate::core::{DispatchEvent, Pid, PolicyRun, Process, Schedule, SimError, Ticks};
pub use crate::scheduler::{
    fcfs, predicted_sjf, round_robin, srtf, Fcfs, Policy, PredictedSjf, RoundRobin, Srtf,
};
pub use crate::sim::{load_processes, write_schedule};
