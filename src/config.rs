//! Run configuration
//!
//! No config files are read. Defaults reproduce the layout of the web app
//! these rewrites were written for; the CLI overrides individual fields.

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;

use crate::walk::WalkConfig;

/// Root scanned when no path is given.
pub const DEFAULT_ROOT: &str = "apps/web/src";

/// Alias prefix used by the folder-anchored and resolve rules.
pub const DEFAULT_ALIAS: &str = "@/";

/// Replacement target for alias consolidation.
pub const DEFAULT_SHARED_TARGET: &str = "@tgt/shared";

/// Top-level source folders recognised by the folder-anchored rule.
pub const DEFAULT_FOLDERS: &[&str] = &[
    "components",
    "contexts",
    "hooks",
    "utils",
    "services",
    "pages",
    "constants",
    "lib",
    "types",
    "data",
];

pub const DEFAULT_EXTENSIONS: &[&str] = &["ts", "tsx"];

/// Which rule set is active. Chosen once for the whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RewriteMode {
    /// Rewrite from the first known top-level folder segment
    #[default]
    Folder,
    /// Resolve the import against the importing file's directory
    Resolve,
    /// Collapse legacy types/supabase imports into the shared package
    Consolidate,
}

impl fmt::Display for RewriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RewriteMode::Folder => "folder",
            RewriteMode::Resolve => "resolve",
            RewriteMode::Consolidate => "consolidate",
        };
        f.write_str(name)
    }
}

/// Configuration for a single rewrite run.
#[derive(Debug, Clone)]
pub struct RewriteConfig {
    pub root: PathBuf,
    pub mode: RewriteMode,
    pub alias: String,
    pub folders: Vec<String>,
    pub shared_target: String,
    pub extensions: Vec<String>,
    pub ignore_patterns: Vec<String>,
    /// Report changes without writing any file
    pub dry_run: bool,
}

impl RewriteConfig {
    pub fn walk_config(&self) -> WalkConfig {
        WalkConfig {
            extensions: self.extensions.clone(),
            ignore_patterns: self.ignore_patterns.clone(),
        }
    }
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            mode: RewriteMode::default(),
            alias: DEFAULT_ALIAS.to_string(),
            folders: DEFAULT_FOLDERS.iter().map(|s| s.to_string()).collect(),
            shared_target: DEFAULT_SHARED_TARGET.to_string(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            ignore_patterns: Vec::new(),
            dry_run: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_web_app_layout() {
        let config = RewriteConfig::default();
        assert_eq!(config.root, PathBuf::from("apps/web/src"));
        assert_eq!(config.mode, RewriteMode::Folder);
        assert_eq!(config.alias, "@/");
        assert_eq!(config.shared_target, "@tgt/shared");
        assert_eq!(config.extensions, vec!["ts", "tsx"]);
        assert_eq!(config.folders.len(), 10);
        assert!(config.folders.iter().any(|f| f == "lib"));
        assert!(!config.dry_run);
    }

    #[test]
    fn test_walk_config_carries_filters() {
        let config = RewriteConfig {
            ignore_patterns: vec!["node_modules".to_string()],
            ..Default::default()
        };
        let walk = config.walk_config();
        assert_eq!(walk.extensions, vec!["ts", "tsx"]);
        assert_eq!(walk.ignore_patterns, vec!["node_modules"]);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(RewriteMode::Folder.to_string(), "folder");
        assert_eq!(RewriteMode::Resolve.to_string(), "resolve");
        assert_eq!(RewriteMode::Consolidate.to_string(), "consolidate");
    }
}
