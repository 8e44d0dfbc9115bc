use crate::core::{PolicyRun, Process, Schedule, WaitTally};

/// First-Come-First-Served: non-preemptive, runs each process to completion
/// in input order.
///
/// The input must be ordered by arrival time (ties keep input order). Every
/// process produces exactly one dispatch event.
pub fn fcfs(processes: &[Process]) -> PolicyRun {
    let mut schedule = Schedule::new();
    let mut tally = WaitTally::new();
    let mut now = 0;

    for p in processes {
        now = now.max(p.arrival_time);
        schedule.record(now, p.id);
        now += p.burst_time;
        tally.complete(now, p.arrival_time, p.burst_time);
    }

    PolicyRun {
        schedule,
        avg_waiting_time: tally.average(processes.len()),
    }
}
