//! The `ocfl-root-extensions` directory and the combined validation run.

use std::path::{Path, PathBuf};

use crate::packaging_format::validate_packaging_format_registry;
use crate::property_registry::validate_property_registry;
use crate::validation::ValidationError;

/// Root location relative to the program's base directory.
pub const DEFAULT_ROOT_RELATIVE: &str = "src/main/assembly/dist/cfg/ocfl-root-extensions";
pub const PACKAGING_FORMAT_REGISTRY_DIR: &str = "packaging-format-registry";
pub const PROPERTY_REGISTRY_DIR: &str = "property-registry";

/// The registry root is not a directory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not locate ocfl-root-extensions directory at {}", root.display())]
pub struct RootNotFound {
    pub root: PathBuf,
}

/// The default registry root under `base`.
pub fn default_root(base: &Path) -> PathBuf {
    base.join(DEFAULT_ROOT_RELATIVE)
}

/// Validate both registries under `root`.
///
/// Both validators always run; packaging-format errors come first.
pub fn validate_root(root: &Path) -> Result<Vec<ValidationError>, RootNotFound> {
    if !root.is_dir() {
        return Err(RootNotFound {
            root: root.to_path_buf(),
        });
    }
    tracing::info!(root = %root.display(), "validating OCFL extension registries");

    let mut errors = validate_packaging_format_registry(&root.join(PACKAGING_FORMAT_REGISTRY_DIR));
    errors.extend(validate_property_registry(&root.join(PROPERTY_REGISTRY_DIR)));
    Ok(errors)
}
