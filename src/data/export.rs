use std::io::Write;
use std::path::Path;

use super::history::History;

/// Write the history as CSV: `time_seconds,other,optimal`.
pub fn write_history_csv<W: Write>(mut w: W, history: &History) -> std::io::Result<()> {
    writeln!(w, "time_seconds,other,optimal")?;
    for s in history {
        writeln!(w, "{:.9},{},{}", s.time, s.value_a, s.value_b)?;
    }
    Ok(())
}

/// Save the history to a CSV file at `path`.
pub fn save_history_csv<P: AsRef<Path>>(path: P, history: &History) -> std::io::Result<()> {
    let f = std::fs::File::create(path)?;
    let mut w = std::io::BufWriter::new(f);
    write_history_csv(&mut w, history)?;
    w.flush()
}

/// Suggested file name for an export started now.
pub fn default_export_name() -> String {
    format!("history_{}.csv", chrono::Local::now().format("%Y%m%d_%H%M%S"))
}
