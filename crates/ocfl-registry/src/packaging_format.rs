//! Validation of the packaging-format registry.
//!
//! Layout:
//! ```text
//! <dir>/
//!   config.json
//!   packaging_format_inventory.json
//!   packaging_format_inventory.json.<digestAlgorithm>
//!   packaging_formats/<manifest-key>/
//! ```
//!
//! Every manifest key is the digest of `"<name>/<version>"` under
//! `packagingFormatDigestAlgorithm`, and the keys correspond one-to-one with
//! the directories under `packaging_formats`.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use ocfl_digest::{ContentDigest, DigestAlgorithm, DigestError};
use serde_json::{Map, Value};

use crate::document::{parse_json, quoted_list, read_json};
use crate::validation::ValidationError;

/// Required value of `extensionName`.
pub const EXTENSION_NAME: &str = "packaging-format-registry";
pub const CONFIG_FILE: &str = "config.json";
pub const INVENTORY_FILE: &str = "packaging_format_inventory.json";
pub const FORMATS_DIR: &str = "packaging_formats";

/// Failure while checking the inventory sidecar.
#[derive(Debug, thiserror::Error)]
enum SidecarError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Digest(#[from] DigestError),
}

/// Validate the packaging-format registry in `dir`.
///
/// Checking stops early only when a required file is missing, a JSON
/// document cannot be parsed or has the wrong top-level shape, or the
/// `packaging_formats` directory is absent. All other problems are
/// collected.
pub fn validate_packaging_format_registry(dir: &Path) -> Vec<ValidationError> {
    tracing::debug!(dir = %dir.display(), "validating packaging-format registry");
    let mut errors = Vec::new();

    let config_path = dir.join(CONFIG_FILE);
    let inventory_path = dir.join(INVENTORY_FILE);

    if !config_path.is_file() {
        errors.push(ValidationError::new(&config_path, "Missing config.json"));
        return errors;
    }
    if !inventory_path.is_file() {
        errors.push(ValidationError::new(
            &inventory_path,
            "Missing packaging_format_inventory.json",
        ));
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

    if config.get("extensionName").and_then(Value::as_str) != Some(EXTENSION_NAME) {
        errors.push(ValidationError::new(
            &config_path,
            format!("extensionName must be \"{EXTENSION_NAME}\""),
        ));
    }

    let pf_name = algorithm_name(
        config,
        "packagingFormatDigestAlgorithm",
        DigestAlgorithm::PACKAGING_FORMAT_DEFAULT,
    );
    let pf_algorithm = pf_name.parse::<DigestAlgorithm>().ok();
    if pf_algorithm.is_none() {
        errors.push(ValidationError::new(
            &config_path,
            format!(
                "packagingFormatDigestAlgorithm must be one of {}",
                supported_algorithms()
            ),
        ));
    }

    let digest_name = algorithm_name(config, "digestAlgorithm", DigestAlgorithm::INVENTORY_DEFAULT);
    if digest_name.parse::<DigestAlgorithm>().is_err() {
        errors.push(ValidationError::new(
            &config_path,
            format!("digestAlgorithm must be one of {}", supported_algorithms()),
        ));
    }

    // The inventory is read once; the sidecar check and the parse share the bytes.
    let inventory_bytes = std::fs::read(&inventory_path);

    let sidecar_path = dir.join(format!("{INVENTORY_FILE}.{digest_name}"));
    if !sidecar_path.is_file() {
        errors.push(ValidationError::new(
            &sidecar_path,
            format!("Missing sidecar file for digest {digest_name}"),
        ));
    } else {
        match check_sidecar(&sidecar_path, inventory_bytes.as_deref(), &digest_name) {
            Ok(None) => {}
            Ok(Some((recorded, actual))) => errors.push(ValidationError::new(
                &sidecar_path,
                format!("Sidecar digest does not match inventory ({recorded} != {actual})"),
            )),
            Err(e) => errors.push(ValidationError::new(
                &sidecar_path,
                format!("Error reading sidecar: {e}"),
            )),
        }
    }

    let inventory = match inventory_bytes
        .map_err(|e| e.to_string())
        .and_then(|bytes| parse_json(&bytes))
    {
        Ok(value) => value,
        Err(e) => {
            errors.push(ValidationError::new(&inventory_path, format!("Invalid JSON: {e}")));
            return errors;
        }
    };

    let Some(manifest) = inventory.get("manifest").and_then(Value::as_object) else {
        errors.push(ValidationError::new(
            &inventory_path,
            "Top-level key 'manifest' must be an object",
        ));
        return errors;
    };

    let formats_dir = dir.join(FORMATS_DIR);
    if !formats_dir.is_dir() {
        errors.push(ValidationError::new(
            &formats_dir,
            "Missing packaging_formats directory",
        ));
        return errors;
    }

    check_manifest_entries(
        manifest,
        pf_algorithm,
        &inventory_path,
        &formats_dir,
        &mut errors,
    );
    check_directory_correspondence(manifest, &formats_dir, &mut errors);

    if !errors.is_empty() {
        tracing::warn!(count = errors.len(), "packaging-format registry has errors");
    }
    errors
}

/// Lowercased algorithm name from `config[key]`, or the default's name.
///
/// Non-string values are rendered as JSON text so they fail membership.
fn algorithm_name(config: &Map<String, Value>, key: &str, default: DigestAlgorithm) -> String {
    match config.get(key) {
        None => default.as_str().to_string(),
        Some(Value::String(s)) => s.to_lowercase(),
        Some(other) => other.to_string().to_lowercase(),
    }
}

fn supported_algorithms() -> String {
    quoted_list(DigestAlgorithm::ALL.iter().map(DigestAlgorithm::as_str))
}

/// Compare the sidecar's first token with the inventory digest.
///
/// Returns `Some((recorded, actual))` on mismatch.
fn check_sidecar(
    sidecar_path: &Path,
    inventory: Result<&[u8], &std::io::Error>,
    algorithm: &str,
) -> Result<Option<(String, String)>, SidecarError> {
    let content = std::fs::read_to_string(sidecar_path)?;
    let recorded = content.split_whitespace().next().unwrap_or("").to_string();

    let inventory = inventory.map_err(|e| std::io::Error::new(e.kind(), e.to_string()))?;
    let actual = ContentDigest::compute(algorithm.parse::<DigestAlgorithm>()?, inventory);

    if actual.matches_hex(&recorded) {
        Ok(None)
    } else {
        Ok(Some((recorded, actual.to_string())))
    }
}

fn check_manifest_entries(
    manifest: &Map<String, Value>,
    pf_algorithm: Option<DigestAlgorithm>,
    inventory_path: &Path,
    formats_dir: &Path,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen_pairs: HashSet<(&str, &str)> = HashSet::new();

    for (key, entry) in manifest {
        let Some(entry) = entry.as_object() else {
            errors.push(ValidationError::new(
                inventory_path,
                format!("Manifest entry for key '{key}' must be an object"),
            ));
            continue;
        };

        let name = entry.get("name").and_then(Value::as_str);
        let version = entry.get("version").and_then(Value::as_str);
        let (Some(name), Some(version)) = (name, version) else {
            errors.push(ValidationError::new(
                inventory_path,
                format!("Manifest entry '{key}' must contain string 'name' and 'version'"),
            ));
            continue;
        };

        if !seen_pairs.insert((name, version)) {
            errors.push(ValidationError::new(
                inventory_path,
                format!("Duplicate name/version pair: {name}/{version}"),
            ));
        }

        if !entry.get("summary").is_some_and(Value::is_string) {
            errors.push(ValidationError::new(
                inventory_path,
                format!("Manifest entry '{key}' must contain string 'summary'"),
            ));
        }

        // An unsupported algorithm has already been reported against config.json.
        if let Some(algorithm) = pf_algorithm {
            let expected = algorithm.hexdigest(format!("{name}/{version}").as_bytes());
            if *key != expected {
                errors.push(ValidationError::new(
                    inventory_path,
                    format!("Manifest key {key} != {algorithm}({name}/{version}) {expected}"),
                ));
            }
        }

        let format_dir = formats_dir.join(key);
        if !format_dir.is_dir() {
            errors.push(ValidationError::new(
                &format_dir,
                format!("Missing {FORMATS_DIR}/{key} directory for {name}/{version}"),
            ));
        }
    }
}

fn check_directory_correspondence(
    manifest: &Map<String, Value>,
    formats_dir: &Path,
    errors: &mut Vec<ValidationError>,
) {
    let dir_keys = match list_subdirectories(formats_dir) {
        Ok(keys) => keys,
        Err(e) => {
            errors.push(ValidationError::new(
                formats_dir,
                format!("Cannot list {FORMATS_DIR} directory: {e}"),
            ));
            return;
        }
    };
    let manifest_keys: BTreeSet<String> = manifest.keys().cloned().collect();

    let extra_dirs: Vec<&str> = dir_keys.difference(&manifest_keys).map(String::as_str).collect();
    let missing_dirs: Vec<&str> = manifest_keys.difference(&dir_keys).map(String::as_str).collect();

    if !extra_dirs.is_empty() {
        errors.push(ValidationError::new(
            formats_dir,
            format!("Directories with no manifest entries: {}", extra_dirs.join(", ")),
        ));
    }
    if !missing_dirs.is_empty() {
        errors.push(ValidationError::new(
            formats_dir,
            format!("Manifest entries without directories: {}", missing_dirs.join(", ")),
        ));
    }
}

/// Names of the immediate subdirectories of `dir`, sorted.
fn list_subdirectories(dir: &Path) -> std::io::Result<BTreeSet<String>> {
    let mut names = BTreeSet::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.path().is_dir() {
            names.insert(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(names)
}
