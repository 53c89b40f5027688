//! Release archive path derivation.

use std::fmt;

use url::Url;

use crate::domain::AppError;

/// Fixed prefix of every release path.
pub const RELEASE_PREFIX: &str = "/releases/epf-";

/// Fixed suffix of every release path.
pub const RELEASE_SUFFIX: &str = ".zip";

/// Path of the downloadable archive for one epf version, e.g.
/// `/releases/epf-1.0.0.zip`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReleasePath(String);

impl ReleasePath {
    /// Build the release path for `version`. The version is embedded as-is.
    pub fn from_version(version: &str) -> Self {
        Self(format!("{RELEASE_PREFIX}{version}{RELEASE_SUFFIX}"))
    }

    /// Recognize an existing release path.
    ///
    /// Returns `None` unless `path` starts with [`RELEASE_PREFIX`] and ends
    /// with [`RELEASE_SUFFIX`].
    pub fn parse(path: &str) -> Option<Self> {
        path.strip_prefix(RELEASE_PREFIX)?.strip_suffix(RELEASE_SUFFIX)?;
        Some(Self(path.to_string()))
    }

    /// The version embedded in this path.
    pub fn version(&self) -> &str {
        self.0
            .strip_prefix(RELEASE_PREFIX)
            .and_then(|rest| rest.strip_suffix(RELEASE_SUFFIX))
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Resolve this path under `base`, keeping the base path as a mount point.
    ///
    /// `https://cdn.example.com/mirror` joined with `/releases/epf-1.0.0.zip`
    /// gives `https://cdn.example.com/mirror/releases/epf-1.0.0.zip`. Query and
    /// fragment of the base are dropped.
    pub fn join_base(&self, base: &Url) -> Result<Url, AppError> {
        let mut url = base.clone();
        let archive = format!("epf-{}{RELEASE_SUFFIX}", self.version());
        url.path_segments_mut()
            .map_err(|()| AppError::InvalidBaseUrl {
                url: base.to_string(),
                details: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .extend(["releases", archive.as_str()]);
        url.set_query(None);
        url.set_fragment(None);
        Ok(url)
    }
}

/// Parse a base URL for [`ReleasePath::join_base`].
pub fn parse_base_url(raw: &str) -> Result<Url, AppError> {
    let url = Url::parse(raw).map_err(|e| AppError::InvalidBaseUrl {
        url: raw.to_string(),
        details: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(AppError::InvalidBaseUrl {
            url: raw.to_string(),
            details: "URL cannot be used as a base".to_string(),
        });
    }
    Ok(url)
}

impl fmt::Display for ReleasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ReleasePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ReleasePath> for String {
    fn from(path: ReleasePath) -> Self {
        path.0
    }
}
