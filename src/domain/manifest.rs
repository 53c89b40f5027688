//! Package manifest (`package.json`) model.

use serde_json::{Map, Value};

use crate::domain::AppError;

/// Location of the epf package manifest, relative to the project root.
pub const MANIFEST_PATH: &str = "node_modules/epf/package.json";

/// The subset of a `package.json` this crate interprets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManifest {
    version: Option<String>,
}

impl PackageManifest {
    /// Parse manifest text. `location` is only used in error messages.
    ///
    /// A missing or `null` version is not an error here; whether that is
    /// acceptable is decided by [`crate::domain::MissingVersionPolicy`].
    ///
    /// Numeric and boolean versions are taken as their JSON text. An array or
    /// object `version` is rejected with [`AppError::ManifestParse`] instead of
    /// being stringified, since neither has a usable path form.
    pub fn parse(content: &str, location: &str) -> Result<Self, AppError> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| AppError::manifest_parse(location, e))?;

        let fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(AppError::manifest_parse(
                    location,
                    format!("expected a JSON object at the top level, found {}", type_name(&other)),
                ));
            }
        };

        Ok(Self { version: version_field(&fields, location)? })
    }

    /// The `version` value, if the manifest carries one.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

fn version_field(fields: &Map<String, Value>, location: &str) -> Result<Option<String>, AppError> {
    match fields.get("version") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(version)) => Ok(Some(version.clone())),
        // Scalars interpolate as their JSON text.
        Some(scalar @ (Value::Number(_) | Value::Bool(_))) => Ok(Some(scalar.to_string())),
        Some(other) => Err(AppError::manifest_parse(
            location,
            format!("'version' must be a string, found {}", type_name(other)),
        )),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
