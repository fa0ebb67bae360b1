//! End-to-end validation of complete `ocfl-root-extensions` trees.

use std::fs;
use std::path::Path;

use ocfl_digest::DigestAlgorithm;
use ocfl_registry::{validate_root, Report, Status};
use serde_json::{json, Value};

fn write_json(path: &Path, value: &Value) {
    fs::write(path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
}

/// Build a fully consistent root with two packaging formats and three properties.
fn build_root(root: &Path) {
    let pf = root.join("packaging-format-registry");
    fs::create_dir_all(pf.join("packaging_formats")).unwrap();
    write_json(
        &pf.join("config.json"),
        &json!({
            "extensionName": "packaging-format-registry",
            "packagingFormatDigestAlgorithm": "md5",
            "digestAlgorithm": "sha512"
        }),
    );

    let mut manifest = serde_json::Map::new();
    for (name, version) in [("dans-bagit-profile", "1.0.0"), ("dans-bagit-profile", "1.1.0")] {
        let key = DigestAlgorithm::Md5.hexdigest(format!("{name}/{version}").as_bytes());
        fs::create_dir_all(pf.join("packaging_formats").join(&key)).unwrap();
        fs::write(pf.join("packaging_formats").join(&key).join("README.md"), name).unwrap();
        manifest.insert(
            key,
            json!({ "name": name, "version": version, "summary": "DANS BagIt Profile" }),
        );
    }
    let inventory = serde_json::to_vec_pretty(&json!({ "manifest": manifest })).unwrap();
    fs::write(pf.join("packaging_format_inventory.json"), &inventory).unwrap();
    fs::write(
        pf.join("packaging_format_inventory.json.sha512"),
        format!(
            "{}  packaging_format_inventory.json\n",
            DigestAlgorithm::Sha512.hexdigest(&inventory)
        ),
    )
    .unwrap();

    let props = root.join("property-registry");
    fs::create_dir_all(&props).unwrap();
    write_json(
        &props.join("config.json"),
        &json!({
            "extensionName": "property-registry",
            "propertyRegistry": {
                "packaging-format": {
                    "description": "Packaging format of the deposit",
                    "type": "string",
                    "required": true
                },
                "deposit-size": { "description": "Size in bytes", "type": "number" },
                "provenance": {
                    "description": "Where the deposit came from",
                    "type": "object",
                    "properties": {
                        "source": { "description": "Source system", "type": "string" }
                    }
                }
            }
        }),
    );
}

#[test]
fn missing_root_fails_and_mentions_path() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("ocfl-root-extensions");

    let report = Report::run(&root);
    let text = report.render_human();
    assert!(text.starts_with("OCFL extension validation: FAIL"));
    assert!(text.lines().any(|l| l.contains(&root.display().to_string())));
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn well_formed_registries_pass() {
    let dir = tempfile::tempdir().unwrap();
    build_root(dir.path());

    let report = Report::run(dir.path());
    assert_eq!(report.render_human(), "OCFL extension validation: PASS\n");
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.status(), Status::Pass);
}

#[test]
fn unexpected_top_level_key_is_the_only_error() {
    let dir = tempfile::tempdir().unwrap();
    build_root(dir.path());

    let config_path = dir.path().join("property-registry").join("config.json");
    let mut config: Value = serde_json::from_slice(&fs::read(&config_path).unwrap()).unwrap();
    config["unexpectedKey"] = json!(true);
    write_json(&config_path, &config);

    let errors = validate_root(dir.path()).unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].location, config_path);
    assert!(errors[0].message.contains("unexpectedKey"));

    let report = Report::run(dir.path());
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn structural_failure_in_one_registry_does_not_stop_the_other() {
    let dir = tempfile::tempdir().unwrap();
    build_root(dir.path());

    fs::write(
        dir.path()
            .join("packaging-format-registry")
            .join("packaging_format_inventory.json"),
        "{ broken",
    )
    .unwrap();
    let props = dir.path().join("property-registry").join("config.json");
    write_json(
        &props,
        &json!({
            "extensionName": "property-registry",
            "propertyRegistry": { "p": { "description": "d", "type": "object" } }
        }),
    );

    let errors = validate_root(dir.path()).unwrap();
    let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
    // Sidecar no longer matches, inventory no longer parses, then the property error.
    assert_eq!(messages.len(), 3);
    assert!(messages[0].starts_with("Sidecar digest does not match inventory"));
    assert!(messages[1].starts_with("Invalid JSON: "));
    assert_eq!(
        messages[2],
        "Property 'p' of type object must have 'properties' object mapping"
    );
}

#[test]
fn tampered_inventory_is_detected_by_sidecar() {
    let dir = tempfile::tempdir().unwrap();
    build_root(dir.path());

    let inventory_path = dir
        .path()
        .join("packaging-format-registry")
        .join("packaging_format_inventory.json");
    let mut bytes = fs::read(&inventory_path).unwrap();
    bytes.push(b'\n');
    fs::write(&inventory_path, &bytes).unwrap();

    let errors = validate_root(dir.path()).unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0]
        .message
        .contains(&DigestAlgorithm::Sha512.hexdigest(&bytes)));
}

#[test]
fn json_report_lists_every_error() {
    let dir = tempfile::tempdir().unwrap();
    build_root(dir.path());
    fs::create_dir(
        dir.path()
            .join("packaging-format-registry")
            .join("packaging_formats")
            .join("orphan"),
    )
    .unwrap();

    let report = Report::run(dir.path());
    let value: Value = serde_json::from_str(&report.render_json().unwrap()).unwrap();
    assert_eq!(value["status"], "FAIL");
    assert_eq!(
        value["errors"][0]["message"],
        "Directories with no manifest entries: orphan"
    );
}
