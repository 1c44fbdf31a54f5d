//! Folder-anchored rewrite

use std::collections::HashSet;

use log::debug;

use super::RuleSet;
use crate::config::RewriteMode;
use crate::imports::{Rewritten, rewrite_imports};
use crate::source::SourceFile;

/// Rewrites a relative target from its first known top-level folder onward.
///
/// `../../components/Button` becomes `@/components/Button` no matter where
/// the importing file lives. Targets without a known folder segment are kept.
#[derive(Debug, Clone)]
pub struct FolderAnchored {
    alias: String,
    folders: HashSet<String>,
}

impl FolderAnchored {
    pub fn new(alias: &str, folders: &[String]) -> Self {
        Self {
            alias: alias.to_string(),
            folders: folders.iter().cloned().collect(),
        }
    }

    /// Compute the new target, or `None` to leave it unchanged.
    pub fn rewrite_target(&self, target: &str) -> Option<String> {
        if !target.starts_with('.') {
            return None;
        }
        let parts: Vec<&str> = target.split('/').collect();
        let anchor = parts.iter().position(|part| self.folders.contains(*part))?;
        Some(format!("{}{}", self.alias, parts[anchor..].join("/")))
    }
}

impl RuleSet for FolderAnchored {
    fn rewrite<'a>(&self, file: &'a SourceFile) -> Rewritten<'a> {
        rewrite_imports(&file.content, |literal| {
            let new_target = self.rewrite_target(literal.target)?;
            debug!("{}: {} -> {}", file.display_path(), literal.target, new_target);
            Some(new_target)
        })
    }

    fn mode(&self) -> RewriteMode {
        RewriteMode::Folder
    }
}
