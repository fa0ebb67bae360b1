//! Validation of the OCFL root extension registries.
//!
//! Two registries live under the `ocfl-root-extensions` directory:
//! - **packaging-format-registry** — a digest-keyed manifest of packaging
//!   formats, an inventory sidecar checksum, and one directory per format
//! - **property-registry** — descriptors for the custom properties that
//!   object versions may carry
//!
//! Each validator is a pure function from directory contents to a list of
//! [`ValidationError`]s. Defects never surface as `Err`; only a missing
//! root directory stops a run before the validators execute.

pub mod error;
pub mod packaging_format;
pub mod properties;
pub mod property_registry;
pub mod report;
pub mod root;
pub mod validation;

mod document;

#[cfg(test)]
mod test_support;

// Re-exports for convenience.
pub use error::{RegistryError, Result};
pub use packaging_format::validate_packaging_format_registry;
pub use properties::{PropertyRegistry, PropertyViolation};
pub use property_registry::{validate_property_registry, PropertyType};
pub use report::{Report, Status};
pub use root::{default_root, validate_root, RootNotFound};
pub use validation::ValidationError;
