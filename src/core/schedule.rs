use super::process::{Pid, Ticks};

/// One context switch: `pid` starts executing at time `at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchEvent {
    pub at: Ticks,
    pub pid: Pid,
}

/// Ordered log of context switches.
///
/// An event is appended only when the executing pid changes; a process that
/// keeps the CPU across consecutive slices produces a single event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    events: Vec<DispatchEvent>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `pid` is executing at `at`; coalesces repeat dispatches.
    pub fn record(&mut self, at: Ticks, pid: Pid) {
        if self.events.last().map(|e| e.pid) == Some(pid) {
            return;
        }
        debug_assert!(
            self.events.last().map_or(true, |e| e.at < at),
            "dispatch events must advance in time"
        );
        self.events.push(DispatchEvent { at, pid });
    }

    pub fn events(&self) -> &[DispatchEvent] {
        &self.events
    }

    pub fn pairs(&self) -> impl Iterator<Item = (Ticks, Pid)> + '_ {
        self.events.iter().map(|e| (e.at, e.pid))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Result of one policy invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyRun {
    pub schedule: Schedule,
    pub avg_waiting_time: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_dispatches_coalesce() {
        let mut s = Schedule::new();
        s.record(0, 1);
        s.record(2, 1);
        s.record(4, 2);
        s.record(5, 1);
        assert_eq!(s.pairs().collect::<Vec<_>>(), vec![(0, 1), (4, 2), (5, 1)]);
    }

    #[test]
    fn empty_schedule() {
        let s = Schedule::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }
}
