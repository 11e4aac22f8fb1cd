use std::path::Path;

use crate::domain::AppError;

/// Access to template sources and rendered manifest destinations.
pub trait ManifestStore {
    /// Read the full template text at `path`.
    fn read_template(&self, path: &Path) -> Result<String, AppError>;

    /// Create or truncate `path` and write `contents` to it.
    fn write_manifest(&self, path: &Path, contents: &str) -> Result<(), AppError>;
}
