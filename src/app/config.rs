//! Project configuration loaded from `epf-release.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::adapters::FilesystemManifestSource;
use crate::domain::{AppError, MANIFEST_PATH, MissingVersionPolicy, parse_base_url};

/// Name of the optional configuration file in the project root.
pub const CONFIG_FILE: &str = "epf-release.toml";

/// Settings for resolving and publishing release paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReleaseConfig {
    /// Manifest path relative to the project root.
    #[serde(default)]
    pub manifest: Option<PathBuf>,
    /// Fail instead of embedding an empty version.
    #[serde(default)]
    pub strict: bool,
    /// Default base URL for absolute release links.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl ReleaseConfig {
    /// Parse configuration text.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(content)?)
    }

    /// Load `epf-release.toml` from `root`, or defaults when it does not exist.
    pub fn load(root: &Path) -> Result<Self, AppError> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Self::parse(&content)
    }

    /// Apply command-line overrides. `strict` can only tighten the file setting.
    pub fn with_overrides(
        mut self,
        manifest: Option<PathBuf>,
        strict: bool,
        base_url: Option<String>,
    ) -> Self {
        if manifest.is_some() {
            self.manifest = manifest;
        }
        self.strict |= strict;
        if base_url.is_some() {
            self.base_url = base_url;
        }
        self
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.manifest.clone().unwrap_or_else(|| PathBuf::from(MANIFEST_PATH))
    }

    pub fn policy(&self) -> MissingVersionPolicy {
        MissingVersionPolicy::from_strict(self.strict)
    }

    /// The configured base URL, validated.
    pub fn base_url(&self) -> Result<Option<Url>, AppError> {
        self.base_url.as_deref().map(parse_base_url).transpose()
    }

    /// Manifest source for this configuration under `root`.
    pub fn manifest_source(&self, root: PathBuf) -> FilesystemManifestSource {
        FilesystemManifestSource::with_manifest_path(root, self.manifest_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_bundled_layout() {
        let config = ReleaseConfig::default();
        assert_eq!(config.manifest_path(), PathBuf::from("node_modules/epf/package.json"));
        assert_eq!(config.policy(), MissingVersionPolicy::Permissive);
        assert_eq!(config.base_url().unwrap(), None);
    }

    #[test]
    fn parses_all_fields() {
        let config = ReleaseConfig::parse(
            r#"
manifest = "vendor/epf/package.json"
strict = true
base_url = "https://downloads.example.com/"
"#,
        )
        .unwrap();
        assert_eq!(config.manifest_path(), PathBuf::from("vendor/epf/package.json"));
        assert_eq!(config.policy(), MissingVersionPolicy::Strict);
        assert_eq!(
            config.base_url().unwrap().map(String::from).as_deref(),
            Some("https://downloads.example.com/")
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = ReleaseConfig::parse("versoin = \"1.0.0\"").unwrap_err();
        assert!(matches!(err, AppError::ConfigParse(_)));
    }

    #[test]
    fn invalid_base_url_surfaces_on_use() {
        let config = ReleaseConfig::parse("base_url = \"::nope\"").unwrap();
        assert!(matches!(config.base_url(), Err(AppError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn overrides_take_precedence() {
        let config = ReleaseConfig::parse("manifest = \"a.json\"\nbase_url = \"https://a.example\"")
            .unwrap()
            .with_overrides(Some(PathBuf::from("b.json")), true, None);
        assert_eq!(config.manifest_path(), PathBuf::from("b.json"));
        assert!(config.strict);
        assert_eq!(config.base_url.as_deref(), Some("https://a.example"));
    }

    #[test]
    fn load_without_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(ReleaseConfig::load(dir.path()).unwrap(), ReleaseConfig::default());
    }

    #[test]
    fn load_reads_file_from_root() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "strict = true\n").unwrap();
        assert!(ReleaseConfig::load(dir.path()).unwrap().strict);
    }
}
