mod memory_manifest_source;

pub use memory_manifest_source::MemoryManifestSource;
