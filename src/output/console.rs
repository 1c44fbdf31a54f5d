//! Console output
//!
//! Wording follows the mode: the folder rewrite prints absolute paths, the
//! resolve rewrite prints paths relative to the root, and consolidation
//! prints root-joined paths.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::ChangeReporter;
use crate::config::{RewriteConfig, RewriteMode};
use crate::runner::{FileChange, RunSummary};

/// Line-per-file reporter writing to a colour-capable stream.
pub struct ConsoleReporter<W: WriteColor> {
    out: W,
    mode: RewriteMode,
}

impl ConsoleReporter<StandardStream> {
    pub fn stdout(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            mode: RewriteMode::default(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn label(&self) -> &'static str {
        match self.mode {
            RewriteMode::Folder => "Fixed imports in:",
            RewriteMode::Resolve => "Refactored:",
            RewriteMode::Consolidate => "Updated:",
        }
    }

    fn shown_path(&self, change: &FileChange) -> String {
        match self.mode {
            RewriteMode::Folder => absolute(&change.path).display().to_string(),
            RewriteMode::Resolve => change.relative_path.clone(),
            RewriteMode::Consolidate => change.path.display().to_string(),
        }
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

impl<W: WriteColor> ChangeReporter for ConsoleReporter<W> {
    fn start(&mut self, config: &RewriteConfig) -> io::Result<()> {
        self.mode = config.mode;
        let banner = match config.mode {
            RewriteMode::Folder => {
                format!("Starting import refactor in {}", absolute(&config.root).display())
            }
            RewriteMode::Resolve => {
                format!("Starting robust import refactor in {}", config.root.display())
            }
            RewriteMode::Consolidate => {
                format!("Consolidating shared imports in {}", config.root.display())
            }
        };
        writeln!(self.out, "{}", banner)
    }

    fn file_changed(&mut self, change: &FileChange) -> io::Result<()> {
        let label = self.label();
        let path = self.shown_path(change);
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(self.out, "{}", label)?;
        self.out.reset()?;
        writeln!(self.out, " {}", path)
    }

    fn finish(&mut self, summary: &RunSummary) -> io::Result<()> {
        if summary.dry_run {
            writeln!(
                self.out,
                "Done! (dry run: {} file(s) would change)",
                summary.files_changed
            )?;
        } else {
            writeln!(self.out, "Done!")?;
        }
        self.out.flush()
    }
}
