use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ManifestStore;

/// In-memory manifest store for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryManifestStore {
    // Shared so clones observe each other's writes.
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    read_only: bool,
}

impl MemoryManifestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes all fail with `PermissionDenied`.
    pub fn read_only() -> Self {
        Self { read_only: true, ..Self::default() }
    }

    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.lock().unwrap().insert(path.into(), contents.into());
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }
}

impl ManifestStore for MemoryManifestStore {
    fn read_template(&self, path: &Path) -> Result<String, AppError> {
        self.get(path).ok_or_else(|| {
            AppError::template_read(path, io::Error::new(io::ErrorKind::NotFound, "not found"))
        })
    }

    fn write_manifest(&self, path: &Path, contents: &str) -> Result<(), AppError> {
        if self.read_only {
            return Err(AppError::manifest_write(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "read-only store"),
            ));
        }
        self.insert(path, contents);
        Ok(())
    }
}
