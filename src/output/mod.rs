//! Change reporting
//!
//! A run reports through a [`ChangeReporter`]: once at the start, once per
//! changed file in walk order, and once at the end.
//!
//! - `ConsoleReporter`: one human-readable line per file, optionally coloured
//! - `JsonReporter`: a single JSON summary after the run

mod console;
mod json;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

use std::io;

use crate::config::RewriteConfig;
use crate::runner::{FileChange, RunSummary};

/// Receives progress of a rewrite run.
pub trait ChangeReporter {
    fn start(&mut self, config: &RewriteConfig) -> io::Result<()>;

    fn file_changed(&mut self, change: &FileChange) -> io::Result<()>;

    fn finish(&mut self, summary: &RunSummary) -> io::Result<()>;
}
