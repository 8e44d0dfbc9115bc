use rustc_hash::FxHashMap;

use crate::core::{Pid, PolicyRun, Process, Schedule, SimError, Ticks, WaitTally};

/// Neutral prior for a process that has never been observed running.
const INITIAL_PREDICTION: f64 = 5.0;

/// Exponential smoothing: weight `alpha` on the latest observed burst.
fn smoothed(prediction: f64, observed: Ticks, alpha: f64) -> f64 {
    alpha * observed as f64 + (1.0 - alpha) * prediction
}

/// Shortest-Job-First over *predicted* burst times.
///
/// Non-preemptive; models a scheduler that cannot see true burst times.
/// Selection picks the ready process with the least predicted burst (ties go
/// to the earliest-admitted), but the clock advances by the true burst. The
/// prediction for a dispatched process is refreshed by exponential smoothing
/// even though each process runs exactly once per invocation.
pub fn predicted_sjf(processes: &[Process], alpha: f64) -> Result<PolicyRun, SimError> {
    if !(alpha > 0.0 && alpha <= 1.0) {
        return Err(SimError::InvalidAlpha(alpha));
    }

    let mut predictions: FxHashMap<Pid, f64> = processes
        .iter()
        .map(|p| (p.id, INITIAL_PREDICTION))
        .collect();
    let mut ready: Vec<&Process> = Vec::new();
    let mut schedule = Schedule::new();
    let mut tally = WaitTally::new();
    let mut now = 0;
    let mut cursor = 0;

    while cursor < processes.len() || !ready.is_empty() {
        while cursor < processes.len() && processes[cursor].arrival_time <= now {
            ready.push(&processes[cursor]);
            cursor += 1;
        }

        if !ready.is_empty() {
            let mut pick = 0;
            for (i, p) in ready.iter().enumerate().skip(1) {
                if predictions[&p.id] < predictions[&ready[pick].id] {
                    pick = i;
                }
            }
            let p = ready.remove(pick);

            schedule.record(now, p.id);
            now += p.burst_time;
            tally.complete(now, p.arrival_time, p.burst_time);
            let next = smoothed(predictions[&p.id], p.burst_time, alpha);
            predictions.insert(p.id, next);
        } else if let Some(next) = processes.get(cursor) {
            now = next.arrival_time;
        } else {
            return Err(SimError::Stalled { at: now });
        }
    }

    Ok(PolicyRun {
        schedule,
        avg_waiting_time: tally.average(processes.len()),
    })
}
