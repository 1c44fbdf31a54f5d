//! Error types for a rewrite run

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a rewrite run.
///
/// There is no per-file isolation: the first error stops the pass and is
/// returned to the caller.
#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("cannot access '{}': No such file or directory", .0.display())]
    RootNotFound(PathBuf),

    #[error("failed to walk source tree: {0}")]
    Walk(#[from] ignore::Error),

    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("'{}' is not valid UTF-8 text", path.display())]
    Decode { path: PathBuf },

    #[error("failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("invalid rewrite pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, RewriteError>;
