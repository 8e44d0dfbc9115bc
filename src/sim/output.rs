use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::PolicyRun;

/// Serializes a run: one `(time, pid)` line per dispatch event, then the
/// average waiting time to two decimal places.
pub fn render_schedule(w: &mut impl Write, run: &PolicyRun) -> io::Result<()> {
    for (at, pid) in run.schedule.pairs() {
        writeln!(w, "({at}, {pid})")?;
    }
    writeln!(w, "average waiting time {:.2}", run.avg_waiting_time)
}

pub fn write_schedule(path: &Path, run: &PolicyRun) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    render_schedule(&mut w, run)?;
    w.flush()
}
