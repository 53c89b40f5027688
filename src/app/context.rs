use std::path::PathBuf;

use crate::adapters::FilesystemManifestSource;
use crate::app::config::ReleaseConfig;
use crate::app::services::{PathFormatter, TemplateHelpers, VersionResolver};
use crate::domain::{AppError, MissingVersionPolicy};
use crate::ports::ManifestSource;

/// Application context holding dependencies for command execution.
#[derive(Debug, Clone)]
pub struct AppContext<S: ManifestSource> {
    formatter: PathFormatter<S>,
    // Parsed only by commands that build absolute links.
    base_url: Option<String>,
}

impl<S: ManifestSource> AppContext<S> {
    /// Create a new application context.
    pub fn new(source: S, policy: MissingVersionPolicy, base_url: Option<String>) -> Self {
        let resolver = VersionResolver::new(source).with_policy(policy);
        Self { formatter: PathFormatter::new(resolver), base_url }
    }

    /// Get a reference to the path formatter.
    pub fn formatter(&self) -> &PathFormatter<S> {
        &self.formatter
    }

    /// Get a reference to the version resolver.
    pub fn resolver(&self) -> &VersionResolver<S> {
        self.formatter.resolver()
    }

    /// Configured base URL for absolute release links, unvalidated.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Template helpers sharing this context's manifest source.
    pub fn template_helpers(&self) -> TemplateHelpers<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        TemplateHelpers::new(self.formatter.clone())
    }
}

impl AppContext<FilesystemManifestSource> {
    /// Build a filesystem-backed context for `root` from its configuration.
    pub fn from_config(root: PathBuf, config: &ReleaseConfig) -> Self {
        Self::new(config.manifest_source(root), config.policy(), config.base_url.clone())
    }

    /// Load `epf-release.toml` from `root` and build a context from it.
    pub fn load(root: PathBuf) -> Result<Self, AppError> {
        let config = ReleaseConfig::load(&root)?;
        Ok(Self::from_config(root, &config))
    }
}
