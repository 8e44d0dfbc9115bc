pub mod input;
pub mod output;
pub mod sweep;
pub mod workload;

pub use input::{load_processes, parse_processes, InputError};
pub use output::{render_schedule, write_schedule};
pub use sweep::{append_alpha_csv, append_quantum_csv, sweep_rr_quantum, sweep_sjf_alpha};
pub use workload::bernoulli_processes;
