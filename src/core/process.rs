pub type Pid = u64;
pub type Ticks = u64;

/// Immutable description of one task.
///
/// `burst_time` is ground truth. Policies that need mutable remaining-time
/// state build their own working copy per invocation; this record is never
/// mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Process {
    pub id: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
}

impl Process {
    pub fn new(id: Pid, arrival_time: Ticks, burst_time: Ticks) -> Self {
        debug_assert!(burst_time > 0, "process {id} has zero burst");
        Self {
            id,
            arrival_time,
            burst_time,
        }
    }
}
