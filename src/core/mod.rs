pub mod error;
pub mod metrics;
pub mod process;
pub mod schedule;

pub use error::SimError;
pub use metrics::WaitTally;
pub use process::{Pid, Process, Ticks};
pub use schedule::{DispatchEvent, PolicyRun, Schedule};
