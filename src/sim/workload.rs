use rand::prelude::*;

use crate::core::{Pid, Process, Ticks};

/// Generates a random workload: at each tick a process arrives with
/// probability `p_arrival`, and an arriving process is short (burst
/// `short_burst`) with probability `p_short`, otherwise long (`long_burst`).
///
/// Deterministic for a fixed seed; the result is already ordered by arrival
/// time with sequential ids, as the policy functions require.
pub fn bernoulli_processes(
    ticks: Ticks,
    p_arrival: f64,
    p_short: f64,
    short_burst: Ticks,
    long_burst: Ticks,
    seed: u64,
) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut processes = Vec::new();

    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            let burst = if rng.random::<f64>() < p_short {
                short_burst
            } else {
                long_burst
            };
            processes.push(Process::new(processes.len() as Pid, t, burst));
        }
    }

    processes
}
