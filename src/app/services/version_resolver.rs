//! Resolves the epf version from the package manifest.

use crate::domain::{AppError, MissingVersionPolicy, PackageManifest};
use crate::ports::ManifestSource;

/// Version string produced by [`VersionResolver::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    value: String,
    absent: bool,
}

impl ResolvedVersion {
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }

    /// True when the manifest had no version and an empty one was substituted.
    pub fn is_absent(&self) -> bool {
        self.absent
    }
}

/// Reads the manifest on every call and extracts its `version` field.
#[derive(Debug, Clone)]
pub struct VersionResolver<S: ManifestSource> {
    source: S,
    policy: MissingVersionPolicy,
}

impl<S: ManifestSource> VersionResolver<S> {
    /// Create a permissive resolver over `source`.
    pub fn new(source: S) -> Self {
        Self { source, policy: MissingVersionPolicy::default() }
    }

    pub fn with_policy(mut self, policy: MissingVersionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> MissingVersionPolicy {
        self.policy
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Read and parse the manifest.
    pub fn read_manifest(&self) -> Result<PackageManifest, AppError> {
        let content = self.source.read_manifest()?;
        PackageManifest::parse(&content, &self.source.location())
    }

    /// Resolve the version, reporting whether it was absent from the manifest.
    pub fn resolve(&self) -> Result<ResolvedVersion, AppError> {
        let manifest = self.read_manifest()?;
        let absent = manifest.version().is_none();
        let value = self.policy.apply(manifest.version(), &self.source.location())?;
        Ok(ResolvedVersion { value, absent })
    }

    /// Resolve the version string.
    pub fn resolve_version(&self) -> Result<String, AppError> {
        self.resolve().map(ResolvedVersion::into_string)
    }
}
