use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, MANIFEST_PATH};
use crate::ports::ManifestSource;

/// Filesystem-based manifest source rooted at a project directory.
#[derive(Debug, Clone)]
pub struct FilesystemManifestSource {
    root: PathBuf,
    manifest_path: PathBuf,
}

impl FilesystemManifestSource {
    /// Read `node_modules/epf/package.json` under `root`.
    pub fn new(root: PathBuf) -> Self {
        Self::with_manifest_path(root, PathBuf::from(MANIFEST_PATH))
    }

    /// Read a manifest at `manifest_path`, resolved against `root` when relative.
    pub fn with_manifest_path(root: PathBuf, manifest_path: PathBuf) -> Self {
        Self { root, manifest_path }
    }

    /// Create a manifest source for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute (or root-joined) path of the manifest file.
    pub fn path(&self) -> PathBuf {
        self.root.join(&self.manifest_path)
    }
}

impl ManifestSource for FilesystemManifestSource {
    fn read_manifest(&self) -> Result<String, AppError> {
        let path = self.path();
        fs::read_to_string(&path).map_err(|err| match err.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => {
                AppError::ManifestNotFound { path: path.display().to_string() }
            }
            // Not UTF-8, so not JSON either.
            ErrorKind::InvalidData => AppError::manifest_parse(path.display().to_string(), err),
            _ => AppError::Io(err),
        })
    }

    fn location(&self) -> String {
        self.path().display().to_string()
    }
}
