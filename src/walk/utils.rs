//! Shared predicates for source tree walking

use std::path::Path;

use glob::Pattern;

/// Check if a file name ends in one of the given extensions.
///
/// The match is a case-sensitive suffix test on the whole name, so
/// `types.d.ts` counts as a `ts` file and `App.TSX` does not.
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();
    extensions
        .iter()
        .any(|ext| name.ends_with(&format!(".{ext}")))
}

/// Check if a path should be skipped based on its name and ignore patterns.
pub fn should_ignore_path(path: &Path, ignore_patterns: &[String]) -> bool {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    ignore_patterns
        .iter()
        .any(|pattern| name == *pattern || glob_match(pattern, &name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}
