use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for manifest generation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure outside template or manifest access.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Template file is missing or unreadable.
    #[error("Failed to read template '{}': {source}", path.display())]
    TemplateRead { path: PathBuf, source: io::Error },

    /// Output path cannot be created or written.
    #[error("Failed to write manifest '{}': {source}", path.display())]
    ManifestWrite { path: PathBuf, source: io::Error },
}

impl AppError {
    pub fn template_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::TemplateRead { path: path.into(), source }
    }

    pub fn manifest_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::ManifestWrite { path: path.into(), source }
    }
}
