//! Build-log summary written to stdout around manifest generation.

use std::io::Write;
use std::path::Path;

use crate::domain::{AppError, ManifestKind};

const GENERATED_HEADER: &str = "================== Generated package file ==================";
const GENERATED_FOOTER: &str = "============================================================";

/// Echo the invocation inputs.
pub fn write_inputs<W: Write>(
    out: &mut W,
    kind: &ManifestKind,
    template_path: &Path,
    output_path: &Path,
) -> Result<(), AppError> {
    writeln!(out, "Generating formula")?;
    writeln!(out, "     VERSION: {}", kind.version())?;
    writeln!(out, "     TEMPLATE PATH: {}", template_path.display())?;
    writeln!(out, "     SAVING AT: {}", output_path.display())?;
    for (label, hash) in kind.labeled_hashes() {
        writeln!(out, "     {label}: {hash}")?;
    }
    Ok(())
}

/// Echo the rendered manifest between separator lines.
pub fn write_rendered<W: Write>(out: &mut W, rendered: &str) -> Result<(), AppError> {
    writeln!(out, "\n{GENERATED_HEADER}\n")?;
    writeln!(out, "{rendered}")?;
    writeln!(out, "\n{GENERATED_FOOTER}\n")?;
    Ok(())
}
