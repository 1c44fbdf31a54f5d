//! Configuration types for source tree walking

use crate::config::DEFAULT_EXTENSIONS;

/// Configuration for source file discovery.
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// File extensions (without the dot) that are rewritten
    pub extensions: Vec<String>,
    /// Entry names or globs to skip; matching directories are not descended
    pub ignore_patterns: Vec<String>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            ignore_patterns: Vec::new(),
        }
    }
}
