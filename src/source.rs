//! Source file reading and conditional write-back

use std::fs;
use std::path::{Path, PathBuf};

use path_slash::PathExt;

use crate::error::{Result, RewriteError};

/// One file of the tree, held only while it is processed.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path as produced by the walk (root-joined)
    pub path: PathBuf,
    /// Path relative to the scan root
    pub relative_path: PathBuf,
    pub content: String,
}

impl SourceFile {
    /// Read `path`, which must lie under `root`.
    ///
    /// Content must be valid UTF-8; anything else is a decode error. The
    /// bytes are kept as-is, line endings included.
    pub fn read(root: &Path, path: PathBuf) -> Result<Self> {
        let bytes = fs::read(&path).map_err(|source| RewriteError::Read {
            path: path.clone(),
            source,
        })?;
        let content =
            String::from_utf8(bytes).map_err(|_| RewriteError::Decode { path: path.clone() })?;
        let relative_path = path
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.clone());

        Ok(Self {
            path,
            relative_path,
            content,
        })
    }

    /// Relative path with forward slashes, for logs and reports.
    pub fn display_path(&self) -> String {
        self.relative_path.to_slash_lossy().into_owned()
    }

    /// Replace the file's content with `new_content`.
    ///
    /// Does nothing when the content is unchanged, so untouched files keep
    /// their modification time.
    pub fn write_back(&self, new_content: &str) -> Result<bool> {
        if new_content == self.content {
            return Ok(false);
        }
        fs::write(&self.path, new_content).map_err(|source| RewriteError::Write {
            path: self.path.clone(),
            source,
        })?;
        Ok(true)
    }

    #[cfg(test)]
    pub(crate) fn in_memory(relative_path: &str, content: &str) -> Self {
        Self {
            path: PathBuf::from(relative_path),
            relative_path: PathBuf::from(relative_path),
            content: content.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_relative_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pages").join("Home.tsx");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "export {};\n").unwrap();

        let file = SourceFile::read(dir.path(), path.clone()).unwrap();
        assert_eq!(file.path, path);
        assert_eq!(file.display_path(), "pages/Home.tsx");
        assert_eq!(file.content, "export {};\n");
    }

    #[test]
    fn test_read_keeps_line_endings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.ts");
        fs::write(&path, "import a from './a';\r\n").unwrap();

        let file = SourceFile::read(dir.path(), path).unwrap();
        assert_eq!(file.content, "import a from './a';\r\n");
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.ts");
        fs::write(&path, [0x66, 0x72, 0xff, 0xfe]).unwrap();

        let result = SourceFile::read(dir.path(), path);
        assert!(matches!(result, Err(RewriteError::Decode { .. })));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = SourceFile::read(dir.path(), dir.path().join("missing.ts"));
        assert!(matches!(result, Err(RewriteError::Read { .. })));
    }

    #[test]
    fn test_write_back_only_when_changed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.ts");
        fs::write(&path, "old").unwrap();
        let file = SourceFile::read(dir.path(), path.clone()).unwrap();

        assert!(!file.write_back("old").unwrap());
        assert!(file.write_back("new").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
