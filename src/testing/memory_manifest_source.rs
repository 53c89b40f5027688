use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ManifestSource;

/// In-memory manifest source for testing.
///
/// Content can be swapped between reads; `reads()` counts how often the
/// resolver went back to the source.
#[derive(Debug, Clone, Default)]
pub struct MemoryManifestSource {
    // None means the manifest does not exist.
    content: Arc<Mutex<Option<String>>>,
    reads: Arc<Mutex<usize>>,
}

impl MemoryManifestSource {
    pub fn new(content: &str) -> Self {
        let source = Self::default();
        source.set(content);
        source
    }

    pub fn missing() -> Self {
        Self::default()
    }

    pub fn set(&self, content: &str) {
        *self.content.lock().unwrap() = Some(content.to_string());
    }

    pub fn reads(&self) -> usize {
        *self.reads.lock().unwrap()
    }
}

impl ManifestSource for MemoryManifestSource {
    fn read_manifest(&self) -> Result<String, AppError> {
        *self.reads.lock().unwrap() += 1;
        self.content
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| AppError::ManifestNotFound { path: self.location() })
    }

    fn location(&self) -> String {
        "memory://node_modules/epf/package.json".to_string()
    }
}
