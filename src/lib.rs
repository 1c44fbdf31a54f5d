//! importfix - rewrite relative TypeScript imports into alias-prefixed form

pub mod config;
pub mod error;
pub mod imports;
pub mod output;
pub mod rules;
pub mod runner;
pub mod source;
pub mod walk;

pub use config::{RewriteConfig, RewriteMode};
pub use error::{Result, RewriteError};
pub use imports::{ImportLiteral, Quote, Rewritten, find_imports, rewrite_imports};
pub use output::{ChangeReporter, ConsoleReporter, JsonReporter};
pub use rules::{Consolidation, FolderAnchored, Resolve, RuleSet, build_rules, resolve_import};
pub use runner::{FileChange, RunSummary, run};
pub use source::SourceFile;
pub use walk::{SourceFiles, WalkConfig, walk_sources};
