use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use log::{error, info};

use schedsim::sim::{
    append_alpha_csv, append_quantum_csv, bernoulli_processes, load_processes, sweep_rr_quantum,
    sweep_sjf_alpha, write_schedule,
};
use schedsim::{Fcfs, Policy, PredictedSjf, Process, RoundRobin, Srtf, Ticks};

const DEFAULT_QUANTUM: Ticks = 2;
const DEFAULT_ALPHA: f64 = 0.5;

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        error!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), Box<dyn Error>> {
    let processes = match env::args().nth(1) {
        Some(path) => load_processes(Path::new(&path))?,
        None => {
            info!("no input file given, generating a Bernoulli workload");
            bernoulli_processes(50, 0.3, 0.3, 2, 6, 0)
        }
    };

    info!("loaded {} processes", processes.len());
    for p in &processes {
        info!(
            "[id {} : arrival_time {}, burst_time {}]",
            p.id, p.arrival_time, p.burst_time
        );
    }

    let policies: Vec<Box<dyn Policy>> = vec![
        Box::new(Fcfs),
        Box::new(RoundRobin {
            quantum: DEFAULT_QUANTUM,
        }),
        Box::new(Srtf),
        Box::new(PredictedSjf {
            alpha: DEFAULT_ALPHA,
        }),
    ];

    for policy in &policies {
        info!("simulating {}", policy.name());
        let run = policy.run(&processes)?;
        let out = PathBuf::from(format!("{}.txt", policy.name()));
        write_schedule(&out, &run)?;
        info!(
            "{}: {} dispatches, average waiting time {:.2}",
            policy.name(),
            run.schedule.len(),
            run.avg_waiting_time
        );
    }

    sweep(&processes)?;
    Ok(())
}

/// Parameter sweeps over the RR quantum and the SJF smoothing factor,
/// appended to CSV result files for plotting.
fn sweep(processes: &[Process]) -> Result<(), Box<dyn Error>> {
    info!("sweeping RR quantum 1..=12");
    let rows = sweep_rr_quantum(processes, 1..=12)?;
    append_quantum_csv(Path::new("RR_quantum.csv"), &rows)?;

    info!("sweeping SJF alpha 0.1..=0.9");
    let alphas = (1..10).map(|i| f64::from(i) * 0.1);
    let rows = sweep_sjf_alpha(processes, alphas)?;
    append_alpha_csv(Path::new("SJF_alpha.csv"), &rows)?;

    Ok(())
}
