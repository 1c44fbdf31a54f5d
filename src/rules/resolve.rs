//! Full path resolution rewrite

use std::path::Path;

use log::debug;
use path_slash::PathExt;

use super::RuleSet;
use crate::config::RewriteMode;
use crate::imports::{Rewritten, rewrite_imports};
use crate::source::SourceFile;

/// Resolves a relative target against the importing file's directory.
///
/// In `pages/pro/DashboardPage.tsx`, `../../contexts/CompanyContext`
/// becomes `@/contexts/CompanyContext`.
#[derive(Debug, Clone)]
pub struct Resolve {
    alias: String,
}

impl Resolve {
    pub fn new(alias: &str) -> Self {
        Self {
            alias: alias.to_string(),
        }
    }

    /// Compute the new target for an import in `importer`, or `None` to keep it.
    pub fn rewrite_target(&self, importer: &Path, target: &str) -> Option<String> {
        if !target.starts_with('.') {
            return None;
        }
        Some(format!("{}{}", self.alias, resolve_import(importer, target)))
    }
}

impl RuleSet for Resolve {
    fn rewrite<'a>(&self, file: &'a SourceFile) -> Rewritten<'a> {
        rewrite_imports(&file.content, |literal| {
            let new_target = self.rewrite_target(&file.relative_path, literal.target)?;
            debug!("{}: {} -> {}", file.display_path(), literal.target, new_target);
            Some(new_target)
        })
    }

    fn mode(&self) -> RewriteMode {
        RewriteMode::Resolve
    }
}

/// Resolve `target` against the directory of `importer`, both relative to
/// the scan root, and return it with forward slashes.
///
/// `..` drops one trailing directory, `.` and empty segments vanish. A path
/// climbing above the root keeps its leading `..` segments, and a path that
/// resolves to the root itself is `.`.
pub fn resolve_import(importer: &Path, target: &str) -> String {
    let base = importer
        .parent()
        .map(|dir| dir.to_slash_lossy().into_owned())
        .unwrap_or_default();

    let mut segments: Vec<&str> = Vec::new();
    for segment in base.split('/').chain(target.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else {
                    segments.push("..");
                }
            }
            name => segments.push(name),
        }
    }

    if segments.is_empty() {
        ".".to_string()
    } else {
        segments.join("/")
    }
}
