use crate::domain::AppError;

/// What to do when a manifest has no `version` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingVersionPolicy {
    /// Treat the version as empty, yielding `/releases/epf-.zip`.
    #[default]
    Permissive,
    /// Fail with [`AppError::MissingVersion`].
    Strict,
}

impl MissingVersionPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Permissive }
    }

    /// Turn an optional manifest version into the version string to embed.
    pub fn apply(self, version: Option<&str>, location: &str) -> Result<String, AppError> {
        match (version, self) {
            (Some(version), _) => Ok(version.to_string()),
            (None, Self::Permissive) => Ok(String::new()),
            (None, Self::Strict) => Err(AppError::MissingVersion { path: location.to_string() }),
        }
    }
}
