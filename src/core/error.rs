use thiserror::Error;

use super::process::Ticks;

/// Failures of a policy invocation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// Round Robin requires a positive time quantum.
    #[error("time quantum must be a positive number of ticks")]
    InvalidQuantum,

    /// The SJF smoothing factor must lie in (0, 1].
    #[error("smoothing factor must be in (0, 1], got {0}")]
    InvalidAlpha(f64),

    /// Both the ready and not-yet-arrived partitions were empty while the
    /// simulation loop still believed work remained. Unreachable unless the
    /// policy loop itself is defective.
    #[error("scheduler stalled at t={at}: no ready or future process")]
    Stalled { at: Ticks },
}
