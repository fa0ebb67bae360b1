//! Checking custom property values against a loaded property registry.
//!
//! Object versions carry custom properties whose names, shapes and
//! required-ness are governed by the property registry. Nested `object`
//! properties are checked against the descriptor's `properties` mapping and
//! reported with dotted paths (`origin.country`).

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{RegistryError, Result};
use crate::property_registry::{is_required, PropertyType, CONFIG_FILE};

/// A property value that does not conform to the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyViolation {
    #[error("unknown property: {path}")]
    Unknown { path: String },

    #[error("missing required property: {path}")]
    MissingRequired { path: String },

    #[error("property '{path}' must be of type {expected}")]
    TypeMismatch { path: String, expected: PropertyType },

    #[error("unsupported property type in registry for '{path}': {declared}")]
    UnsupportedType { path: String, declared: String },

    #[error("registry descriptor for object property '{path}' must define an object 'properties'")]
    MissingProperties { path: String },
}

/// The descriptors of a property registry, ready to check values against.
#[derive(Debug, Clone)]
pub struct PropertyRegistry {
    descriptors: Map<String, Value>,
}

impl PropertyRegistry {
    /// Load the registry from the `config.json` in `dir`.
    ///
    /// Only the `propertyRegistry` object is required; run
    /// [`crate::validate_property_registry`] for the full rule set.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        let content = std::fs::read(&path)?;
        let config: Value = serde_json::from_slice(&content)?;
        Self::from_config(&config).ok_or_else(|| RegistryError::InvalidRegistry {
            path,
            detail: "config.json must contain an object 'propertyRegistry'".to_string(),
        })
    }

    /// Build from a parsed `config.json` document.
    pub fn from_config(config: &Value) -> Option<Self> {
        let descriptors = config.get("propertyRegistry")?.as_object()?.clone();
        Some(PropertyRegistry { descriptors })
    }

    /// Names of all registered properties.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.descriptors.keys().map(String::as_str)
    }

    /// Check a set of custom properties, returning every violation found.
    pub fn check_properties(&self, properties: &Map<String, Value>) -> Vec<PropertyViolation> {
        let mut violations = Vec::new();
        check_level(&self.descriptors, properties, "", &mut violations);
        violations
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn check_level(
    descriptors: &Map<String, Value>,
    values: &Map<String, Value>,
    prefix: &str,
    violations: &mut Vec<PropertyViolation>,
) {
    for (key, value) in values {
        let path = join_path(prefix, key);
        match descriptors.get(key) {
            Some(descriptor) => check_value(&path, value, descriptor, violations),
            None => violations.push(PropertyViolation::Unknown { path }),
        }
    }

    for (key, descriptor) in descriptors {
        let required = descriptor.as_object().is_some_and(is_required);
        if required && !values.contains_key(key) {
            violations.push(PropertyViolation::MissingRequired {
                path: join_path(prefix, key),
            });
        }
    }
}

fn check_value(
    path: &str,
    value: &Value,
    descriptor: &Value,
    violations: &mut Vec<PropertyViolation>,
) {
    // Descriptors without a type describe strings.
    let declared = descriptor
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("string");
    let expected = match declared.parse::<PropertyType>() {
        Ok(t) => t,
        Err(declared) => {
            violations.push(PropertyViolation::UnsupportedType {
                path: path.to_string(),
                declared,
            });
            return;
        }
    };

    if !expected.accepts(value) {
        violations.push(PropertyViolation::TypeMismatch {
            path: path.to_string(),
            expected,
        });
        return;
    }

    if expected == PropertyType::Object {
        let Some(nested) = descriptor.get("properties").and_then(Value::as_object) else {
            violations.push(PropertyViolation::MissingProperties {
                path: path.to_string(),
            });
            return;
        };
        if let Some(fields) = value.as_object() {
            check_level(nested, fields, path, violations);
        }
    }
}
