//! JSON summary output

use std::io::{self, Write};

use super::ChangeReporter;
use crate::config::RewriteConfig;
use crate::runner::{FileChange, RunSummary};

/// Writes the run summary as pretty-printed JSON once the run finishes.
pub struct JsonReporter<W: Write> {
    out: W,
}

impl JsonReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChangeReporter for JsonReporter<W> {
    fn start(&mut self, _config: &RewriteConfig) -> io::Result<()> {
        Ok(())
    }

    fn file_changed(&mut self, _change: &FileChange) -> io::Result<()> {
        Ok(())
    }

    fn finish(&mut self, summary: &RunSummary) -> io::Result<()> {
        let json = serde_json::to_string_pretty(summary).map_err(io::Error::other)?;
        writeln!(self.out, "{}", json)?;
        self.out.flush()
    }
}
