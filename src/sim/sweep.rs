use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::core::{Process, SimError, Ticks};
use crate::scheduler::{predicted_sjf, round_robin};

/// Runs Round Robin once per quantum, collecting `(quantum, average wait)`.
pub fn sweep_rr_quantum(
    processes: &[Process],
    quanta: impl IntoIterator<Item = Ticks>,
) -> Result<Vec<(Ticks, f64)>, SimError> {
    let mut rows = Vec::new();
    for quantum in quanta {
        let run = round_robin(processes, quantum)?;
        debug!("RR quantum={quantum} avg={:.2}", run.avg_waiting_time);
        rows.push((quantum, run.avg_waiting_time));
    }
    Ok(rows)
}

/// Runs predicted SJF once per smoothing factor, collecting `(alpha, average
/// wait)`.
pub fn sweep_sjf_alpha(
    processes: &[Process],
    alphas: impl IntoIterator<Item = f64>,
) -> Result<Vec<(f64, f64)>, SimError> {
    let mut rows = Vec::new();
    for alpha in alphas {
        let run = predicted_sjf(processes, alpha)?;
        debug!("SJF alpha={alpha:.1} avg={:.2}", run.avg_waiting_time);
        rows.push((alpha, run.avg_waiting_time));
    }
    Ok(rows)
}

fn append_csv(path: &Path, lines: impl IntoIterator<Item = String>) -> io::Result<()> {
    let file = OpenOptions::new().append(true).create(true).open(path)?;
    let mut w = BufWriter::new(file);
    for line in lines {
        writeln!(w, "{line}")?;
    }
    w.flush()
}

pub fn append_quantum_csv(path: &Path, rows: &[(Ticks, f64)]) -> io::Result<()> {
    append_csv(path, rows.iter().map(|(q, avg)| format!("{q},{avg:.2}")))
}

pub fn append_alpha_csv(path: &Path, rows: &[(f64, f64)]) -> io::Result<()> {
    append_csv(path, rows.iter().map(|(a, avg)| format!("{a:.1},{avg:.2}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::fcfs;

    fn input() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5),
            Process::new(2, 0, 3),
            Process::new(3, 0, 8),
        ]
    }

    #[test]
    fn quantum_sweep_covers_range() {
        let rows = sweep_rr_quantum(&input(), 1..=12).unwrap();
        assert_eq!(rows.len(), 12);
        assert_eq!(rows.first().unwrap().0, 1);
        // Once the quantum covers the longest burst, RR collapses to FCFS.
        let fc = fcfs(&input());
        assert_eq!(rows.last().unwrap().1, fc.avg_waiting_time);
    }

    #[test]
    fn alpha_sweep_covers_range() {
        let alphas: Vec<f64> = (1..10).map(|i| f64::from(i) * 0.1).collect();
        let rows = sweep_sjf_alpha(&input(), alphas).unwrap();
        assert_eq!(rows.len(), 9);
    }

    #[test]
    fn invalid_parameter_aborts_sweep() {
        assert!(sweep_rr_quantum(&input(), [1, 0]).is_err());
    }

    #[test]
    fn csv_appends_across_calls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("RR_quantum.csv");
        append_quantum_csv(&path, &[(1, 6.0)]).unwrap();
        append_quantum_csv(&path, &[(2, 5.5)]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "1,6.00\n2,5.50\n");
    }
}
