//! Source tree walking
//!
//! Produces the candidate files for a rewrite run: every regular file under
//! the root whose name ends in a recognised extension, in file-name order.
//! The sequence is lazy and built fresh for each run.

mod config;
mod utils;

use std::path::{Path, PathBuf};

use ignore::{Walk, WalkBuilder};

use crate::error::{Result, RewriteError};

pub use config::WalkConfig;
pub use utils::{glob_match, has_extension, should_ignore_path};

/// Lazy iterator over the source files of a tree.
pub struct SourceFiles {
    inner: Walk,
    extensions: Vec<String>,
}

impl Iterator for SourceFiles {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(RewriteError::Walk(e))),
            };

            // Symlinks are not followed, so a symlinked file reports as a symlink here
            let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
            if is_file && has_extension(entry.path(), &self.extensions) {
                return Some(Ok(entry.into_path()));
            }
        }
    }
}

/// Start walking `root` for source files.
///
/// Every directory is visited, hidden and gitignored ones included. Entries
/// whose names match an ignore pattern are skipped, and ignored directories
/// are not descended.
pub fn walk_sources(root: &Path, config: &WalkConfig) -> Result<SourceFiles> {
    if !root.is_dir() {
        return Err(RewriteError::RootNotFound(root.to_path_buf()));
    }

    let ignore_patterns = config.ignore_patterns.clone();
    let inner = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            entry.depth() == 0 || !should_ignore_path(entry.path(), &ignore_patterns)
        })
        .build();

    Ok(SourceFiles {
        inner,
        extensions: config.extensions.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, rel: &str) {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "export {};\n").unwrap();
    }

    fn collect(dir: &TempDir, config: &WalkConfig) -> Vec<String> {
        walk_sources(dir.path(), config)
            .unwrap()
            .map(|p| {
                p.unwrap()
                    .strip_prefix(dir.path())
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_walk_filters_by_extension() {
        let dir = TempDir::new().unwrap();
        write(&dir, "App.tsx");
        write(&dir, "main.ts");
        write(&dir, "index.css");
        write(&dir, "README.md");

        let files = collect(&dir, &WalkConfig::default());
        assert_eq!(files, vec!["App.tsx", "main.ts"]);
    }

    #[test]
    fn test_walk_recurses_in_name_order() {
        let dir = TempDir::new().unwrap();
        write(&dir, "pages/pro/DashboardPage.tsx");
        write(&dir, "components/Button.tsx");
        write(&dir, "App.tsx");
        write(&dir, "components/forms/Input.tsx");

        let files = collect(&dir, &WalkConfig::default());
        assert_eq!(
            files,
            vec![
                "App.tsx",
                "components/Button.tsx",
                "components/forms/Input.tsx",
                "pages/pro/DashboardPage.tsx",
            ]
        );
    }

    #[test]
    fn test_walk_visits_hidden_directories() {
        let dir = TempDir::new().unwrap();
        write(&dir, ".storybook/preview.ts");
        fs::write(dir.path().join(".gitignore"), ".storybook\n").unwrap();

        let files = collect(&dir, &WalkConfig::default());
        assert_eq!(files, vec![".storybook/preview.ts"]);
    }

    #[test]
    fn test_walk_prunes_ignored_directories() {
        let dir = TempDir::new().unwrap();
        write(&dir, "node_modules/pkg/index.ts");
        write(&dir, "lib/api.ts");
        write(&dir, "lib/api.test.ts");

        let config = WalkConfig {
            ignore_patterns: vec!["node_modules".to_string(), "*.test.ts".to_string()],
            ..Default::default()
        };
        let files = collect(&dir, &config);
        assert_eq!(files, vec!["lib/api.ts"]);
    }

    #[test]
    fn test_walk_custom_extensions() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.ts");
        write(&dir, "b.mts");

        let config = WalkConfig {
            extensions: vec!["mts".to_string()],
            ..Default::default()
        };
        assert_eq!(collect(&dir, &config), vec!["b.mts"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_skips_symlinks() {
        let dir = TempDir::new().unwrap();
        write(&dir, "real/a.ts");
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("linkdir")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real/a.ts"), dir.path().join("link.ts"))
            .unwrap();

        let files = collect(&dir, &WalkConfig::default());
        assert_eq!(files, vec!["real/a.ts"]);
    }

    #[test]
    fn test_walk_missing_root() {
        let result = walk_sources(Path::new("/nonexistent/importfix/root"), &WalkConfig::default());
        assert!(matches!(result, Err(RewriteError::RootNotFound(_))));
    }
}
