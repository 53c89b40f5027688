use std::fs;
use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::ManifestSource;

/// Result of rendering a template file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    pub content: String,
    /// Where the output was written, if anywhere.
    pub written_to: Option<PathBuf>,
}

/// Render the template at `template_path`, writing to `output` when given.
pub fn execute<S>(
    ctx: &AppContext<S>,
    template_path: &Path,
    output: Option<&Path>,
) -> Result<RenderOutcome, AppError>
where
    S: ManifestSource + Clone + Send + Sync + 'static,
{
    let template = fs::read_to_string(template_path).map_err(|source| AppError::TemplateRead {
        path: template_path.display().to_string(),
        source,
    })?;
    let name = template_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| template_path.display().to_string());

    let content = ctx.template_helpers().render(&name, &template)?;

    if let Some(output) = output {
        if let Some(parent) = output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(output, &content)?;
    }

    Ok(RenderOutcome { content, written_to: output.map(Path::to_path_buf) })
}
