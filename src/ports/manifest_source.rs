use crate::domain::AppError;

/// Where package manifest text comes from.
///
/// Implementations must read fresh content on every call.
pub trait ManifestSource {
    /// Read the full manifest text.
    fn read_manifest(&self) -> Result<String, AppError>;

    /// Human-readable location used in error messages.
    fn location(&self) -> String;
}

impl<S: ManifestSource + ?Sized> ManifestSource for &S {
    fn read_manifest(&self) -> Result<String, AppError> {
        (**self).read_manifest()
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
