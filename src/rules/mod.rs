//! Rewrite rule sets
//!
//! Each rule set turns the content of one source file into its rewritten
//! form. Exactly one rule set is active per run; they are never combined.
//!
//! - [`FolderAnchored`]: rewrite from the first known top-level folder segment
//! - [`Resolve`]: resolve against the importing file's directory
//! - [`Consolidation`]: collapse whole `from` clauses into a shared package

mod consolidate;
mod folder;
mod resolve;

pub use consolidate::{Consolidation, DEFAULT_CONSOLIDATION_PATTERNS};
pub use folder::FolderAnchored;
pub use resolve::{Resolve, resolve_import};

use crate::config::{RewriteConfig, RewriteMode};
use crate::error::Result;
use crate::imports::Rewritten;
use crate::source::SourceFile;

/// A rewrite applied to every file of a run.
pub trait RuleSet {
    /// Rewrite the content of `file`, borrowing it when nothing changes.
    fn rewrite<'a>(&self, file: &'a SourceFile) -> Rewritten<'a>;

    /// The mode this rule set implements.
    fn mode(&self) -> RewriteMode;
}

/// Build the rule set selected by `config.mode`.
pub fn build_rules(config: &RewriteConfig) -> Result<Box<dyn RuleSet>> {
    let rules: Box<dyn RuleSet> = match config.mode {
        RewriteMode::Folder => Box::new(FolderAnchored::new(&config.alias, &config.folders)),
        RewriteMode::Resolve => Box::new(Resolve::new(&config.alias)),
        RewriteMode::Consolidate => Box::new(Consolidation::new(
            DEFAULT_CONSOLIDATION_PATTERNS,
            &config.shared_target,
        )?),
    };
    Ok(rules)
}
