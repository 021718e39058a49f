//! Error types for test case generation

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while scaffolding a test case or rebuilding the index
#[derive(Error, Debug)]
pub enum GenError {
    /// The template file is not present in the working directory
    #[error("Template file '{}' does not exist.", .path.display())]
    MissingTemplate { path: PathBuf },

    /// Filesystem failure on a specific path
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        GenError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
