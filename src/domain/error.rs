use std::io;

use thiserror::Error;

/// Library-wide error type for epf-release operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure other than a missing manifest.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The package manifest does not exist or cannot be opened.
    #[error("Package manifest not found: {path}")]
    ManifestNotFound { path: String },

    /// The package manifest is not valid JSON or has an unusable shape.
    #[error("Failed to parse package manifest {path}: {details}")]
    ManifestParse { path: String, details: String },

    /// The manifest has no `version` field and strict resolution was requested.
    #[error("Package manifest {path} has no 'version' field")]
    MissingVersion { path: String },

    /// `epf-release.toml` could not be parsed.
    #[error("Invalid epf-release.toml: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The base URL for absolute release links is malformed.
    #[error("Invalid base URL '{url}': {details}")]
    InvalidBaseUrl { url: String, details: String },

    /// A template file could not be read.
    #[error("Failed to read template {path}: {source}")]
    TemplateRead {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Template registration or rendering failed.
    #[error("Template error: {0}")]
    Template(String),
}

impl AppError {
    pub(crate) fn manifest_parse(path: impl Into<String>, details: impl ToString) -> Self {
        AppError::ManifestParse { path: path.into(), details: details.to_string() }
    }

    /// Classify the error as an `io::ErrorKind`, e.g. for mapping to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) | AppError::TemplateRead { source: err, .. } => err.kind(),
            AppError::ManifestNotFound { .. } => io::ErrorKind::NotFound,
            AppError::ManifestParse { .. }
            | AppError::MissingVersion { .. }
            | AppError::ConfigParse(_) => io::ErrorKind::InvalidData,
            AppError::InvalidBaseUrl { .. } => io::ErrorKind::InvalidInput,
            AppError::Template(_) => io::ErrorKind::Other,
        }
    }
}

impl From<minijinja::Error> for AppError {
    fn from(err: minijinja::Error) -> Self {
        AppError::Template(err.to_string())
    }
}
