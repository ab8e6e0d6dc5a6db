//! Plain-text report for a counting run.

use std::io::{self, Write};

use semicountlib::{FileCounts, SkippedFile};

/// Render the two total lines printed on stdout.
pub fn render_totals(total: &FileCounts) -> String {
    format!("LOC: {}\nSEMICOLONS: {}\n", total.lines, total.semicolons)
}

/// Render one `Skipping <path>: <error>` line per skipped file.
pub fn render_skipped(skipped: &[SkippedFile]) -> String {
    skipped.iter().map(|s| format!("{s}\n")).collect()
}

/// Write rendered text, treating a closed pipe as success.
pub fn write_report(out: &mut impl Write, text: &str) -> io::Result<()> {
    match out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
