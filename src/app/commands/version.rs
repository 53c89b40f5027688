use crate::app::AppContext;
use crate::app::services::ResolvedVersion;
use crate::domain::AppError;
use crate::ports::ManifestSource;

/// Resolve the epf version from the context's manifest.
pub fn execute<S: ManifestSource>(ctx: &AppContext<S>) -> Result<ResolvedVersion, AppError> {
    ctx.resolver().resolve()
}
