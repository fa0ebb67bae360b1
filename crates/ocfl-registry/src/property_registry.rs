//! Validation of the property registry.
//!
//! `config.json` holds exactly two top-level keys, `extensionName` and
//! `propertyRegistry`. The latter maps property names to descriptors:
//!
//! ```json
//! {
//!   "description": "Who packaged the object",
//!   "type": "string",
//!   "constraints": "free text",
//!   "required": false,
//!   "default": "unknown"
//! }
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::document::{quoted_list, read_json};
use crate::validation::ValidationError;

/// Required value of `extensionName`.
pub const EXTENSION_NAME: &str = "property-registry";
pub const CONFIG_FILE: &str = "config.json";

/// The keys allowed at the top level of `config.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    ExtensionName,
    PropertyRegistry,
}

impl ConfigKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::ExtensionName => "extensionName",
            ConfigKey::PropertyRegistry => "propertyRegistry",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "extensionName" => Some(ConfigKey::ExtensionName),
            "propertyRegistry" => Some(ConfigKey::PropertyRegistry),
            _ => None,
        }
    }
}

/// The value type a property descriptor declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PropertyType {
    Boolean,
    Number,
    Object,
    String,
}

impl PropertyType {
    /// Every property type, sorted by name.
    pub const ALL: [PropertyType; 4] = [
        PropertyType::Boolean,
        PropertyType::Number,
        PropertyType::Object,
        PropertyType::String,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Boolean => "boolean",
            PropertyType::Number => "number",
            PropertyType::Object => "object",
            PropertyType::String => "string",
        }
    }

    /// Whether `value` is of this type.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            PropertyType::Boolean => value.is_boolean(),
            PropertyType::Number => value.is_number(),
            PropertyType::Object => value.is_object(),
            PropertyType::String => value.is_string(),
        }
    }
}

impl FromStr for PropertyType {
    type Err = String;

    /// Type names are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boolean" => Ok(PropertyType::Boolean),
            "number" => Ok(PropertyType::Number),
            "object" => Ok(PropertyType::Object),
            "string" => Ok(PropertyType::String),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate the property registry in `dir`.
///
/// Checking stops early only when `config.json` is missing, unparsable, not
/// an object, or lacks an object `propertyRegistry`.
pub fn validate_property_registry(dir: &Path) -> Vec<ValidationError> {
    tracing::debug!(dir = %dir.display(), "validating property registry");
    let mut errors = Vec::new();

    let config_path = dir.join(CONFIG_FILE);
    if !config_path.is_file() {
        errors.push(ValidationError::new(&config_path, "Missing config.json"));
        return errors;
    }

    let config = match read_json(&config_path) {
        Ok(value) => value,
        Err(e) => {
            errors.push(ValidationError::new(&config_path, format!("Invalid JSON: {e}")));
            return errors;
        }
    };
    let Some(config) = config.as_object() else {
        errors.push(ValidationError::new(
            &config_path,
            "config.json must be a JSON object",
        ));
        return errors;
    };

    let mut unexpected: Vec<&str> = config
        .keys()
        .map(String::as_str)
        .filter(|key| ConfigKey::from_key(key).is_none())
        .collect();
    unexpected.sort_unstable();
    if !unexpected.is_empty() {
        errors.push(ValidationError::new(
            &config_path,
            format!("Unexpected top-level keys: {}", unexpected.join(", ")),
        ));
    }

    if config
        .get(ConfigKey::ExtensionName.as_str())
        .and_then(Value::as_str)
        != Some(EXTENSION_NAME)
    {
        errors.push(ValidationError::new(
            &config_path,
            format!("extensionName must be \"{EXTENSION_NAME}\""),
        ));
    }

    let Some(registry) = config
        .get(ConfigKey::PropertyRegistry.as_str())
        .and_then(Value::as_object)
    else {
        errors.push(ValidationError::new(
            &config_path,
            "propertyRegistry must be an object",
        ));
        return errors;
    };

    for (name, descriptor) in registry {
        check_descriptor(name, descriptor, &config_path, &mut errors);
    }

    if !errors.is_empty() {
        tracing::warn!(count = errors.len(), "property registry has errors");
    }
    errors
}

/// Check one descriptor. Checks are cumulative; only a missing or
/// non-string `type` skips the rest.
fn check_descriptor(
    name: &str,
    descriptor: &Value,
    config_path: &Path,
    errors: &mut Vec<ValidationError>,
) {
    let mut report = |message: String| errors.push(ValidationError::new(config_path, message));

    let Some(descriptor) = descriptor.as_object() else {
        report(format!("Property '{name}' description must be an object"));
        return;
    };

    if !descriptor.get("description").is_some_and(Value::is_string) {
        report(format!("Property '{name}' must have string 'description'"));
    }

    let Some(type_name) = descriptor.get("type").and_then(Value::as_str) else {
        report(format!("Property '{name}' must have string 'type'"));
        return;
    };
    let property_type = type_name.parse::<PropertyType>().ok();
    if property_type.is_none() {
        report(format!(
            "Property '{name}' type must be one of {}",
            quoted_list(PropertyType::ALL.iter().map(PropertyType::as_str))
        ));
    }

    if descriptor.get("constraints").is_some_and(|v| !v.is_string()) {
        report(format!(
            "Property '{name}' optional 'constraints' must be a string if present"
        ));
    }
    if descriptor.get("required").is_some_and(|v| !v.is_boolean()) {
        report(format!(
            "Property '{name}' optional 'required' must be a boolean if present"
        ));
    }
    if descriptor.contains_key("default") && is_required(descriptor) {
        report(format!(
            "Property '{name}' cannot specify 'default' when 'required' is true"
        ));
    }

    if property_type == Some(PropertyType::Object)
        && !descriptor.get("properties").is_some_and(Value::is_object)
    {
        report(format!(
            "Property '{name}' of type object must have 'properties' object mapping"
        ));
    }
}

/// `required` is exactly boolean `true`.
pub(crate) fn is_required(descriptor: &Map<String, Value>) -> bool {
    descriptor.get("required") == Some(&Value::Bool(true))
}
