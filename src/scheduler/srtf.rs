use std::cmp::Ordering;

use keyed_priority_queue::KeyedPriorityQueue;
use rustc_hash::FxHashMap;

use crate::core::{Pid, PolicyRun, Process, Schedule, SimError, Ticks, WaitTally};

/// Ready-set rank: remaining time ascending, then arrival time, then pid.
///
/// KeyedPriorityQueue pops its greatest priority first, so the comparison is
/// inverted to surface the shortest remaining time at the head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rank {
    remaining: Ticks,
    arrival: Ticks,
    pid: Pid,
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .remaining
            .cmp(&self.remaining)
            .then_with(|| other.arrival.cmp(&self.arrival))
            .then_with(|| other.pid.cmp(&self.pid))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest-Remaining-Time-First: fully preemptive.
///
/// At every decision point the arrived, incomplete process with the least
/// remaining time runs, until either it completes or the next arrival occurs.
/// The input must be ordered by arrival time.
pub fn srtf(processes: &[Process]) -> Result<PolicyRun, SimError> {
    let bursts: FxHashMap<Pid, Ticks> = processes
        .iter()
        .map(|p| (p.id, p.burst_time))
        .collect();
    let mut ready: KeyedPriorityQueue<Pid, Rank> = KeyedPriorityQueue::new();
    let mut schedule = Schedule::new();
    let mut tally = WaitTally::new();
    let mut now = 0;
    let mut cursor = 0;

    while cursor < processes.len() || !ready.is_empty() {
        while cursor < processes.len() && processes[cursor].arrival_time <= now {
            let p = &processes[cursor];
            ready.push(
                p.id,
                Rank {
                    remaining: p.burst_time,
                    arrival: p.arrival_time,
                    pid: p.id,
                },
            );
            cursor += 1;
        }

        if let Some((pid, mut rank)) = ready.pop() {
            schedule.record(now, pid);

            // Run until completion or the next arrival, whichever is sooner.
            let mut run_time = rank.remaining;
            if let Some(next) = processes.get(cursor) {
                run_time = run_time.min(next.arrival_time - now);
            }
            now += run_time;
            rank.remaining -= run_time;

            if rank.remaining == 0 {
                let burst = bursts[&pid];
                tally.complete(now, rank.arrival, burst);
            } else {
                ready.push(pid, rank);
            }
        } else if let Some(next) = processes.get(cursor) {
            // Idle period: no dispatch event, only a time jump.
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
