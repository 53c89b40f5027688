pub mod manifest_filesystem;

pub use manifest_filesystem::FilesystemManifestSource;
