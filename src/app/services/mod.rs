pub mod path_formatter;
pub mod template_helpers;
pub mod version_resolver;

pub use path_formatter::PathFormatter;
pub use template_helpers::TemplateHelpers;
pub use version_resolver::{ResolvedVersion, VersionResolver};
