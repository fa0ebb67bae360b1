//! On-disk registry fixtures for unit tests.

use std::fs;
use std::path::Path;

use ocfl_digest::DigestAlgorithm;
use serde_json::{json, Value};

use crate::packaging_format::{CONFIG_FILE, FORMATS_DIR, INVENTORY_FILE};

/// Manifest key for `name/version` under MD5.
pub fn md5_key(name: &str, version: &str) -> String {
    DigestAlgorithm::Md5.hexdigest(format!("{name}/{version}").as_bytes())
}

pub fn write_json(path: &Path, value: &Value) {
    fs::write(path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
}

/// Write the inventory and a matching SHA-512 sidecar.
pub fn write_inventory(dir: &Path, inventory: &Value) {
    let bytes = serde_json::to_vec_pretty(inventory).unwrap();
    fs::write(dir.join(INVENTORY_FILE), &bytes).unwrap();
    let digest = DigestAlgorithm::Sha512.hexdigest(&bytes);
    fs::write(
        dir.join(format!("{INVENTORY_FILE}.sha512")),
        format!("{digest}  {INVENTORY_FILE}\n"),
    )
    .unwrap();
}

/// A consistent packaging-format registry with the given `(name, version)` formats.
pub fn packaging_format_registry(dir: &Path, formats: &[(&str, &str)]) {
    fs::create_dir_all(dir.join(FORMATS_DIR)).unwrap();
    write_json(
        &dir.join(CONFIG_FILE),
        &json!({
            "extensionName": "packaging-format-registry",
            "packagingFormatDigestAlgorithm": "md5",
            "digestAlgorithm": "sha512"
        }),
    );

    let mut manifest = serde_json::Map::new();
    for (name, version) in formats {
        let key = md5_key(name, version);
        fs::create_dir_all(dir.join(FORMATS_DIR).join(&key)).unwrap();
        manifest.insert(
            key,
            json!({ "name": name, "version": version, "summary": format!("{name} {version}") }),
        );
    }
    write_inventory(dir, &json!({ "manifest": manifest }));
}

/// A property registry config with the given descriptors.
pub fn property_registry(dir: &Path, registry: Value) {
    fs::create_dir_all(dir).unwrap();
    write_json(
        &dir.join("config.json"),
        &json!({ "extensionName": "property-registry", "propertyRegistry": registry }),
    );
}
