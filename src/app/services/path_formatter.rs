use crate::app::services::version_resolver::{ResolvedVersion, VersionResolver};
use crate::domain::{AppError, ReleasePath};
use crate::ports::ManifestSource;

/// Formats the release archive path from a freshly resolved version.
#[derive(Debug, Clone)]
pub struct PathFormatter<S: ManifestSource> {
    resolver: VersionResolver<S>,
}

impl<S: ManifestSource> PathFormatter<S> {
    pub fn new(resolver: VersionResolver<S>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &VersionResolver<S> {
        &self.resolver
    }

    /// Resolve the version once and build its release path.
    pub fn format_resolved(&self) -> Result<(ReleasePath, ResolvedVersion), AppError> {
        let version = self.resolver.resolve()?;
        Ok((ReleasePath::from_version(version.as_str()), version))
    }

    /// `/releases/epf-<version>.zip` for the current manifest.
    pub fn format_release_path(&self) -> Result<ReleasePath, AppError> {
        self.format_resolved().map(|(path, _)| path)
    }
}
