//! Reading registry JSON documents.

use std::path::Path;

use serde_json::Value;

/// Read and parse a JSON file, describing the failure on error.
pub(crate) fn read_json(path: &Path) -> Result<Value, String> {
    let bytes = std::fs::read(path).map_err(|e| e.to_string())?;
    parse_json(&bytes)
}

/// Parse JSON from raw bytes, describing the failure on error.
pub(crate) fn parse_json(bytes: &[u8]) -> Result<Value, String> {
    serde_json::from_slice(bytes).map_err(|e| e.to_string())
}

/// Render names as a bracketed list of quoted strings, e.g. `['a', 'b']`.
pub(crate) fn quoted_list<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let quoted: Vec<String> = names.into_iter().map(|n| format!("'{n}'")).collect();
    format!("[{}]", quoted.join(", "))
}
