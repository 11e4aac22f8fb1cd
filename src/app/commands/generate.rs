use std::io::Write;
use std::path::Path;

use tracing::debug;

use super::report;
use crate::app::AppContext;
use crate::domain::{AppError, ManifestKind, Template};
use crate::ports::ManifestStore;

/// Render `template_path` with the values of `kind` and write it to `output_path`.
///
/// Inputs and the rendered manifest are echoed to `out`. The rendered text is
/// echoed before it is written, so a failed write still leaves it in the log.
///
/// Returns the rendered manifest.
pub fn execute<S, W>(
    ctx: &AppContext<S>,
    kind: &ManifestKind,
    template_path: &Path,
    output_path: &Path,
    out: &mut W,
) -> Result<String, AppError>
where
    S: ManifestStore,
    W: Write,
{
    report::write_inputs(out, kind, template_path, output_path)?;

    let template = Template::new(ctx.store().read_template(template_path)?);
    let values = kind.substitutions();
    debug!(
        manifest = %kind,
        template = %template_path.display(),
        bytes = template.as_str().len(),
        "rendering template"
    );

    let unresolved: Vec<String> = template
        .placeholders()
        .into_iter()
        .filter(|name| !values.contains_key(name.as_str()))
        .collect();
    if !unresolved.is_empty() {
        debug!(?unresolved, "leaving unknown placeholders in place");
    }

    let rendered = template.safe_substitute(&values);
    report::write_rendered(out, &rendered)?;

    ctx.store().write_manifest(output_path, &rendered)?;
    debug!(output = %output_path.display(), "manifest written");
    Ok(rendered)
}
