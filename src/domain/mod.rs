pub mod error;
pub mod manifest;
pub mod missing_version;
pub mod release_path;

pub use error::AppError;
pub use manifest::{MANIFEST_PATH, PackageManifest};
pub use missing_version::MissingVersionPolicy;
pub use release_path::{RELEASE_PREFIX, RELEASE_SUFFIX, ReleasePath, parse_base_url};
