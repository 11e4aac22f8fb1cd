use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::ManifestStore;

/// Filesystem-backed manifest store.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemManifestStore;

impl FilesystemManifestStore {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestStore for FilesystemManifestStore {
    fn read_template(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(|err| AppError::template_read(path, err))
    }

    fn write_manifest(&self, path: &Path, contents: &str) -> Result<(), AppError> {
        // Parent directories are the pipeline's responsibility.
        fs::write(path, contents).map_err(|err| AppError::manifest_write(path, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_and_writes_files() {
        let dir = TempDir::new().unwrap();
        let template = dir.path().join("app.json.tpl");
        let output = dir.path().join("app.json");
        fs::write(&template, "{\"version\": \"${version64}\"}").unwrap();

        let store = FilesystemManifestStore::new();
        let text = store.read_template(&template).unwrap();
        store.write_manifest(&output, &text).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), text);
    }

    #[test]
    fn write_truncates_existing_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("formula.rb");
        fs::write(&output, "a much longer previous manifest body").unwrap();

        FilesystemManifestStore::new().write_manifest(&output, "short").unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "short");
    }

    #[test]
    fn missing_template_is_template_read_error() {
        let dir = TempDir::new().unwrap();
        let err = FilesystemManifestStore::new()
            .read_template(&dir.path().join("missing.tpl"))
            .unwrap_err();
        assert!(matches!(err, AppError::TemplateRead { .. }));
    }

    #[test]
    fn missing_parent_dir_is_manifest_write_error() {
        let dir = TempDir::new().unwrap();
        let err = FilesystemManifestStore::new()
            .write_manifest(&dir.path().join("absent/formula.rb"), "x")
            .unwrap_err();
        assert!(matches!(err, AppError::ManifestWrite { .. }));
    }
}
