use anyhow::{bail, Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE: &str = ".config.json";

const AUTO_UPDATE: &str = "auto_update";
const LAST_UPDATE_CHECK: &str = "last_update_check";
const LAST_UPDATED_COMMIT: &str = "last_updated_commit";

/// Settings stored inside the library checkout (`<library>/.config.json`).
///
/// Holds the file's values laid over the defaults, untouched: a key with an
/// unexpected type is kept as written and only its typed accessor falls back
/// to the default.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LibraryConfig {
    values: Map<String, Value>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        let mut values = Map::new();
        values.insert(AUTO_UPDATE.into(), Value::Bool(true));
        values.insert(LAST_UPDATE_CHECK.into(), Value::Null);
        values.insert(LAST_UPDATED_COMMIT.into(), Value::Null);
        Self { values }
    }
}

impl LibraryConfig {
    fn overlay(on_disk: Map<String, Value>) -> Self {
        let mut config = Self::default();
        config.values.extend(on_disk);
        config
    }

    /// Whether the library updates itself during bootstrap (default `true`).
    pub fn auto_update(&self) -> bool {
        self.values
            .get(AUTO_UPDATE)
            .and_then(Value::as_bool)
            .unwrap_or(true)
    }

    /// Timestamp of the last update check, if recorded.
    pub fn last_update_check(&self) -> Option<&str> {
        self.values.get(LAST_UPDATE_CHECK).and_then(Value::as_str)
    }

    /// Commit the library was last updated to, if recorded.
    pub fn last_updated_commit(&self) -> Option<&str> {
        self.values.get(LAST_UPDATED_COMMIT).and_then(Value::as_str)
    }

    /// Raw value of any key, known or not.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}

/// Path of the library's `.config.json`.
pub fn library_config_path(library_root: &Path) -> PathBuf {
    library_root.join(CONFIG_FILE)
}

/// Reads the library config; a missing or malformed file yields defaults.
pub fn read_library_config(library_root: &Path) -> LibraryConfig {
    LibraryConfig::overlay(read_raw(&library_config_path(library_root)).unwrap_or_default())
}

/// Interprets a command-line value: `true`/`false` become booleans.
pub fn parse_config_value(raw: &str) -> Value {
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        other => Value::String(other.to_string()),
    }
}

fn check_value(key: &str, value: &Value) -> Result<()> {
    let accepted = match key {
        AUTO_UPDATE => value.is_boolean(),
        LAST_UPDATE_CHECK | LAST_UPDATED_COMMIT => value.is_string() || value.is_null(),
        _ => true,
    };
    if !accepted {
        bail!("invalid value for config key `{key}`: {value}");
    }
    Ok(())
}

/// Sets one key in the library config and writes the file atomically.
///
/// Only the key being set is type-checked; every other value on disk is
/// written back as it was. Returns the config as written.
pub fn write_library_config(library_root: &Path, key: &str, value: Value) -> Result<LibraryConfig> {
    check_value(key, &value)?;
    let path = library_config_path(library_root);
    let mut config = read_library_config(library_root);
    config.values.insert(key.to_string(), value);

    fs::create_dir_all(library_root)
        .with_context(|| format!("failed to create {}", library_root.display()))?;
    let mut tmp = tempfile::NamedTempFile::new_in(library_root)?;
    tmp.write_all(serde_json::to_string_pretty(&config)?.as_bytes())?;
    tmp.persist(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    debug!(target: "skillctl::state", path = %path.display(), key, "updated library config");
    Ok(config)
}

fn read_raw(path: &Path) -> Option<Map<String, Value>> {
    let text = fs::read_to_string(path).ok()?;
    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => None,
        Err(err) => {
            debug!(
                target: "skillctl::state",
                path = %path.display(),
                error = %err,
                "ignoring malformed library config"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = tempdir().unwrap();
        let config = read_library_config(tmp.path());
        assert!(config.auto_update());
        assert!(config.last_update_check().is_none());
        assert_eq!(config, LibraryConfig::default());
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let tmp = tempdir().unwrap();
        fs::write(library_config_path(tmp.path()), "{ nope").unwrap();
        assert_eq!(read_library_config(tmp.path()), LibraryConfig::default());
    }

    #[test]
    fn set_merges_and_keeps_unknown_keys() {
        let tmp = tempdir().unwrap();
        fs::write(
            library_config_path(tmp.path()),
            r#"{"last_updated_commit": "abc123", "channel": "beta"}"#,
        )
        .unwrap();

        let updated =
            write_library_config(tmp.path(), "auto_update", parse_config_value("false")).unwrap();
        assert!(!updated.auto_update());
        assert_eq!(updated.last_updated_commit(), Some("abc123"));

        let raw: Value =
            serde_json::from_str(&fs::read_to_string(library_config_path(tmp.path())).unwrap())
                .unwrap();
        assert_eq!(raw["auto_update"], json!(false));
        assert_eq!(raw["channel"], json!("beta"));
        assert_eq!(read_library_config(tmp.path()), updated);
    }

    #[test]
    fn wrong_type_for_known_key_is_rejected() {
        let tmp = tempdir().unwrap();
        let err = write_library_config(tmp.path(), "auto_update", parse_config_value("sometimes"));
        assert!(err.is_err());
        assert!(!library_config_path(tmp.path()).exists());
    }

    #[test]
    fn mistyped_value_on_disk_keeps_the_rest_of_the_file() {
        let tmp = tempdir().unwrap();
        fs::write(
            library_config_path(tmp.path()),
            r#"{"auto_update": "no", "last_updated_commit": "abc123"}"#,
        )
        .unwrap();

        let config = read_library_config(tmp.path());
        assert!(config.auto_update());
        assert_eq!(config.get("auto_update"), Some(&json!("no")));
        assert_eq!(config.last_updated_commit(), Some("abc123"));

        let updated = write_library_config(tmp.path(), "channel", json!("beta")).unwrap();
        assert_eq!(updated.get("channel"), Some(&json!("beta")));
        assert_eq!(updated.get("auto_update"), Some(&json!("no")));
        assert_eq!(updated.last_updated_commit(), Some("abc123"));
    }

    #[test]
    fn parse_value_only_maps_exact_booleans() {
        assert_eq!(parse_config_value("true"), json!(true));
        assert_eq!(parse_config_value("True"), json!("True"));
        assert_eq!(parse_config_value("42"), json!("42"));
    }
}
