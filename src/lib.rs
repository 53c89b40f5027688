//! epf-release: resolve the bundled epf package version and derive its release
//! download path (`/releases/epf-<version>.zip`) for template rendering.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;

use adapters::FilesystemManifestSource;
use app::AppContext;

pub use app::commands::path::PathOutcome;
pub use app::commands::render::RenderOutcome;
pub use app::config::{CONFIG_FILE, ReleaseConfig};
pub use app::services::{PathFormatter, ResolvedVersion, TemplateHelpers, VersionResolver};
pub use domain::{AppError, MANIFEST_PATH, MissingVersionPolicy, ReleasePath};
pub use ports::ManifestSource;

fn context_at(root: PathBuf) -> Result<AppContext<FilesystemManifestSource>, AppError> {
    AppContext::load(root)
}

// =============================================================================
// Current-directory API
// =============================================================================

/// Read the epf version from `node_modules/epf/package.json` in the current directory.
pub fn resolve_version() -> Result<String, AppError> {
    resolve_version_at(std::env::current_dir()?)
}

/// Release path for the epf version installed in the current directory.
pub fn release_path() -> Result<ReleasePath, AppError> {
    release_path_at(std::env::current_dir()?)
}

// =============================================================================
// Root-scoped API
// =============================================================================

/// Read the epf version for the project at `root`.
///
/// Honors `epf-release.toml` in `root` when present.
pub fn resolve_version_at(root: PathBuf) -> Result<String, AppError> {
    context_at(root)?.resolver().resolve_version()
}

/// Release path for the project at `root`.
pub fn release_path_at(root: PathBuf) -> Result<ReleasePath, AppError> {
    context_at(root)?.formatter().format_release_path()
}

/// Release path joined onto `base_url` (or the configured base URL).
pub fn release_url_at(root: PathBuf, base_url: Option<&str>) -> Result<PathOutcome, AppError> {
    let ctx = context_at(root)?;
    let base_url = base_url.map(domain::parse_base_url).transpose()?;
    app::commands::path::execute(&ctx, base_url.as_ref())
}

/// Render a template string with `release_path()` and `epf_version()` available.
pub fn render_template_at(root: PathBuf, name: &str, template: &str) -> Result<String, AppError> {
    context_at(root)?.template_helpers().render(name, template)
}

/// Template helpers bound to the project at `root`, for registering into an
/// existing `minijinja::Environment`.
pub fn template_helpers_at(
    root: PathBuf,
) -> Result<TemplateHelpers<FilesystemManifestSource>, AppError> {
    Ok(context_at(root)?.template_helpers())
}
