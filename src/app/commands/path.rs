use url::Url;

use crate::app::AppContext;
use crate::app::services::ResolvedVersion;
use crate::domain::{AppError, ReleasePath, parse_base_url};
use crate::ports::ManifestSource;

/// Result of resolving the release path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathOutcome {
    pub path: ReleasePath,
    /// Absolute link, when a base URL was given.
    pub url: Option<Url>,
    pub version: ResolvedVersion,
}

impl PathOutcome {
    /// The absolute URL if one was built, otherwise the bare path.
    pub fn display_target(&self) -> String {
        match &self.url {
            Some(url) => url.to_string(),
            None => self.path.to_string(),
        }
    }
}

/// Build the release path, joined with `base_url` or the configured base URL.
///
/// The configured base URL is only validated when no explicit one is given.
pub fn execute<S: ManifestSource>(
    ctx: &AppContext<S>,
    base_url: Option<&Url>,
) -> Result<PathOutcome, AppError> {
    let configured = match base_url {
        Some(_) => None,
        None => ctx.base_url().map(parse_base_url).transpose()?,
    };
    let (path, version) = ctx.formatter().format_resolved()?;
    let url = base_url.or(configured.as_ref()).map(|base| path.join_base(base)).transpose()?;
    Ok(PathOutcome { path, url, version })
}
