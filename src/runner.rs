//! One rewrite pass over a source tree

use std::path::PathBuf;

use log::{debug, info, warn};
use serde::Serialize;

use crate::config::{RewriteConfig, RewriteMode};
use crate::error::Result;
use crate::output::ChangeReporter;
use crate::rules::build_rules;
use crate::source::SourceFile;
use crate::walk::walk_sources;

/// A file whose content differed after rewriting.
#[derive(Debug, Clone, Serialize)]
pub struct FileChange {
    /// Root-joined path as found by the walk
    pub path: PathBuf,
    /// Path relative to the root, with forward slashes
    pub relative_path: String,
    /// Number of import clauses replaced in this file
    pub rewrites: usize,
}

/// Outcome of a run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub mode: RewriteMode,
    pub root: PathBuf,
    pub dry_run: bool,
    pub files_scanned: usize,
    pub files_changed: usize,
    pub imports_rewritten: usize,
    pub changed: Vec<FileChange>,
}

impl RunSummary {
    fn new(config: &RewriteConfig) -> Self {
        Self {
            mode: config.mode,
            root: config.root.clone(),
            dry_run: config.dry_run,
            files_scanned: 0,
            files_changed: 0,
            imports_rewritten: 0,
            changed: Vec::new(),
        }
    }

    fn record(&mut self, change: FileChange) {
        self.files_changed += 1;
        self.imports_rewritten += change.rewrites;
        self.changed.push(change);
    }
}

/// Rewrite every source file under `config.root` with the configured rule set.
///
/// Files are processed one at a time in walk order. A file is written only
/// when its rewritten content differs, and never in dry-run mode. The first
/// read, decode or write error aborts the run.
pub fn run(config: &RewriteConfig, reporter: &mut dyn ChangeReporter) -> Result<RunSummary> {
    let rules = build_rules(config)?;
    let files = walk_sources(&config.root, &config.walk_config())?;
    let mut summary = RunSummary::new(config);

    reporter.start(config)?;

    for path in files {
        let file = SourceFile::read(&config.root, path?)?;
        summary.files_scanned += 1;
        debug!("scanning {}", file.display_path());

        let rewritten = rules.rewrite(&file);
        for target in &rewritten.skipped {
            warn!(
                "{}: skipping import with escaped quote: {}",
                file.display_path(),
                target
            );
        }

        if rewritten.content == file.content {
            continue;
        }

        if !config.dry_run {
            file.write_back(&rewritten.content)?;
        }
        info!(
            "{}: rewrote {} import(s)",
            file.display_path(),
            rewritten.rewrites
        );

        let change = FileChange {
            path: file.path.clone(),
            relative_path: file.display_path(),
            rewrites: rewritten.rewrites,
        };
        reporter.file_changed(&change)?;
        summary.record(change);
    }

    reporter.finish(&summary)?;
    Ok(summary)
}
