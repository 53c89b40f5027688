//! Template functions exposing the release path to minijinja templates.
//!
//! Registered functions:
//! - `release_path()` returns `/releases/epf-<version>.zip`
//! - `epf_version()` returns the bare version
//!
//! Both re-read the manifest each time they are called. Their output is marked
//! safe so `.html` templates embed the path without HTML escaping.

use std::sync::Arc;

use minijinja::{Environment, Error, ErrorKind, Value, context};

use crate::app::services::path_formatter::PathFormatter;
use crate::domain::AppError;
use crate::ports::ManifestSource;

/// Registers release helpers into a template environment.
#[derive(Debug)]
pub struct TemplateHelpers<S: ManifestSource> {
    formatter: Arc<PathFormatter<S>>,
}

impl<S: ManifestSource> Clone for TemplateHelpers<S> {
    fn clone(&self) -> Self {
        Self { formatter: Arc::clone(&self.formatter) }
    }
}

impl<S> TemplateHelpers<S>
where
    S: ManifestSource + Send + Sync + 'static,
{
    pub fn new(formatter: PathFormatter<S>) -> Self {
        Self { formatter: Arc::new(formatter) }
    }

    /// Add `release_path` and `epf_version` to `env`.
    pub fn register(&self, env: &mut Environment<'_>) {
        let formatter = Arc::clone(&self.formatter);
        env.add_function("release_path", move || -> Result<Value, Error> {
            formatter
                .format_release_path()
                .map(|path| Value::from_safe_string(path.into_string()))
                .map_err(helper_error)
        });

        let formatter = Arc::clone(&self.formatter);
        env.add_function("epf_version", move || -> Result<Value, Error> {
            formatter
                .resolver()
                .resolve_version()
                .map(Value::from_safe_string)
                .map_err(helper_error)
        });
    }

    /// Render `template` (registered as `name`) with the helpers available.
    pub fn render(&self, name: &str, template: &str) -> Result<String, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        self.register(&mut env);

        env.add_template(name, template).map_err(|e| {
            AppError::Template(format!("Failed to register template '{}': {}", name, e))
        })?;
        let template = env.get_template(name)?;
        template.render(context! {}).map_err(|e| {
            AppError::Template(format!("Failed to render template '{}': {}", name, e))
        })
    }
}

fn helper_error(err: AppError) -> Error {
    Error::new(ErrorKind::InvalidOperation, err.to_string()).with_source(err)
}
