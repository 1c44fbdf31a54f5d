//! Alias consolidation rewrite
//!
//! A fixed table of whole-clause patterns, each collapsing a legacy import
//! into the shared package. Patterns run in table order over the whole file,
//! each one seeing the output of the previous.

use std::borrow::Cow;

use log::debug;
use regex::{Captures, Regex};

use super::RuleSet;
use crate::config::RewriteMode;
use crate::error::Result;
use crate::imports::Rewritten;
use crate::source::SourceFile;

/// Legacy `types` and `supabase` imports, relative or `@/`-aliased.
///
/// Group 1 must capture the opening quote; it is reused in the replacement.
pub const DEFAULT_CONSOLIDATION_PATTERNS: &[&str] = &[
    r#"from\s+(['"])(?:\.\.?/)+types['"]"#,
    r#"from\s+(['"])@/types['"]"#,
    r#"from\s+(['"])(?:\.\.?/)+(?:lib/)?supabase['"]"#,
    r#"from\s+(['"])@/(?:lib/)?supabase['"]"#,
];

/// Replaces whole `from` clauses matching any pattern with one target.
#[derive(Debug, Clone)]
pub struct Consolidation {
    patterns: Vec<Regex>,
    target: String,
}

impl Consolidation {
    pub fn new(patterns: &[&str], target: &str) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self {
            patterns,
            target: target.to_string(),
        })
    }

    /// Apply every pattern in order, returning the text and substitution count.
    pub fn consolidate<'a>(&self, content: &'a str) -> (Cow<'a, str>, usize) {
        let mut current = Cow::Borrowed(content);
        let mut total = 0;

        for pattern in &self.patterns {
            let mut count = 0;
            let replaced = pattern.replace_all(&current, |caps: &Captures<'_>| {
                count += 1;
                let quote = caps.get(1).map_or("'", |m| m.as_str());
                format!("from {quote}{}{quote}", self.target)
            });
            if count > 0 {
                let next = replaced.into_owned();
                current = Cow::Owned(next);
                total += count;
            }
        }

        (current, total)
    }
}

impl RuleSet for Consolidation {
    fn rewrite<'a>(&self, file: &'a SourceFile) -> Rewritten<'a> {
        let (content, rewrites) = self.consolidate(&file.content);
        if rewrites > 0 {
            debug!(
                "{}: {} clause(s) -> {}",
                file.display_path(),
                rewrites,
                self.target
            );
        }
        Rewritten {
            content,
            rewrites,
            skipped: Vec::new(),
        }
    }

    fn mode(&self) -> RewriteMode {
        RewriteMode::Consolidate
    }
}
