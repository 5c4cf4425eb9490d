//! Reading structured documents (JSON or YAML) from disk.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{GenError, Result};
use crate::models::{RawVlan, SwitchesFile};

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// `.json` is parsed as JSON; anything else as YAML, which also accepts JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Read and deserialize a document, picking the format from the extension.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| GenError::read(path, e))?;
    parse_document(path, &content)
}

pub fn parse_document<T: DeserializeOwned>(path: &Path, content: &str) -> Result<T> {
    match DocumentFormat::from_path(path) {
        DocumentFormat::Json => serde_json::from_str(content).map_err(|e| GenError::parse(path, e)),
        DocumentFormat::Yaml => serde_yaml::from_str(content).map_err(|e| GenError::parse(path, e)),
    }
}

/// Read a configuration layer. An empty document is an empty mapping.
pub fn load_layer(path: &Path) -> Result<Value> {
    let value: Option<Value> = read_document(path)?;
    match value {
        None | Some(Value::Null) => Ok(Value::Object(Default::default())),
        Some(v @ Value::Object(_)) => Ok(v),
        Some(_) => Err(GenError::parse(path, "configuration layer must be a mapping")),
    }
}

/// Read the raw VLAN records from a VLAN fact file or shared VLAN list.
pub fn load_raw_vlans(path: &Path) -> Result<Vec<RawVlan>> {
    read_document(path)
}

/// Read the YAML inventory used by the `files` subcommand.
pub fn load_switches_file(path: &Path) -> Result<SwitchesFile> {
    let file: Option<SwitchesFile> = read_document(path)?;
    let mut file = file.unwrap_or_default();

    // An empty `global:` or `config:` key is the same as leaving it out
    file.global = file.global.filter(|v| !v.is_null());
    if file.global.as_ref().is_some_and(|v| !v.is_object()) {
        return Err(GenError::parse(path, "'global' must be a mapping"));
    }
    for sw in &mut file.switches {
        sw.config = sw.config.take().filter(|v| !v.is_null());
        if sw.config.as_ref().is_some_and(|v| !v.is_object()) {
            return Err(GenError::parse(
                path,
                format!("'config' of switch {} must be a mapping", sw.hostname),
            ));
        }
    }
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_from_path() {
        assert_eq!(DocumentFormat::from_path(Path::new("a/vlan_list.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("base.YML")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("base")), DocumentFormat::Yaml);
    }

    #[test]
    fn test_load_layer_empty_is_empty_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("global.yaml");
        fs::write(&path, "").unwrap();
        assert_eq!(load_layer(&path).unwrap(), json!({}));
    }

    #[test]
    fn test_load_layer_rejects_non_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("base.yaml");
        fs::write(&path, "- a\n- b\n").unwrap();
        assert!(matches!(load_layer(&path), Err(GenError::Parse { .. })));
    }

    #[test]
    fn test_load_layer_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_layer(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, GenError::MissingFile { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vlan_list.json");
        fs::write(&path, r#"[{"vlan_id": "10", "vlan_name": "users""#).unwrap();
        assert!(matches!(load_raw_vlans(&path), Err(GenError::Parse { .. })));
    }

    #[test]
    fn test_switch_config_must_be_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("switches.yaml");
        fs::write(
            &path,
            "switches:\n  - hostname: sw1\n    model: 2960X\n    config: [1, 2]\n",
        )
        .unwrap();
        assert!(matches!(load_switches_file(&path), Err(GenError::Parse { .. })));
    }
}
