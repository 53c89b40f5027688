mod manifest_source;

pub use manifest_source::ManifestSource;
