//! manifestgen: render package-manager release manifests from templates.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

use std::io;
use std::path::Path;

use adapters::FilesystemManifestStore;
use app::AppContext;

pub use domain::{AppError, ManifestKind, SubstitutionMap, Template};

/// Render `template_path` for `kind` and write the manifest to `output_path`.
///
/// Inputs and the rendered manifest are echoed to stdout for the build log.
/// Returns the rendered manifest text.
pub fn generate(
    kind: &ManifestKind,
    template_path: &Path,
    output_path: &Path,
) -> Result<String, AppError> {
    let ctx = AppContext::new(FilesystemManifestStore::new());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    app::commands::generate::execute(&ctx, kind, template_path, output_path, &mut out)
}
