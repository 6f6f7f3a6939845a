use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::clamp::{BoundedRange, RangePolicy};
use crate::demo::{Point, Record};

pub const CONFIG_FILENAME: &str = ".clampkit.json";
pub const GLOBAL_CONFIG_DIR: &str = "clampkit";
pub const GLOBAL_CONFIG_FILENAME: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub clamp: ClampConfig,
    pub record: Record,
    pub point: Point,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClampConfig {
    /// Range used when `--lo`/`--hi` are not given
    pub range: BoundedRange,
    /// Treatment of inverted ranges passed on the command line
    pub policy: RangePolicy,
}

impl Config {
    /// Resolves the config seen from `dir`.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        ConfigSources::discover(dir).resolve()
    }
}

/// Config files applied over the defaults, lowest precedence first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSources {
    pub global: Option<PathBuf>,
    pub local: PathBuf,
}

impl ConfigSources {
    pub fn discover(dir: &Path) -> Self {
        Self {
            global: dirs::config_dir()
                .map(|d| d.join(GLOBAL_CONFIG_DIR).join(GLOBAL_CONFIG_FILENAME)),
            local: dir.join(CONFIG_FILENAME),
        }
    }

    /// Applies the global layer, then the local one. The global layer must be a
    /// valid config on its own, otherwise it is skipped with a warning. Local
    /// errors are returned against the local path.
    pub fn resolve(&self) -> Result<Config, ConfigError> {
        let mut merged = Value::Object(Map::new());

        if let Some(path) = &self.global {
            match read_layer(path).and_then(|layer| check_layer(path, layer)) {
                Ok(Some(layer)) => overlay(&mut merged, layer),
                Ok(None) => {}
                Err(e) => tracing::warn!(error = %e, "Skipping global config"),
            }
        }

        if let Some(layer) = read_layer(&self.local)? {
            overlay(&mut merged, layer);
        }
        tracing::debug!(local = %self.local.display(), "Resolved config layers");

        serde_json::from_value(merged).map_err(|source| ConfigError::Invalid {
            path: self.local.clone(),
            source,
        })
    }
}

/// Parses one config file. A missing file is `None`.
fn read_layer(path: &Path) -> Result<Option<Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
}

fn check_layer(path: &Path, layer: Option<Value>) -> Result<Option<Value>, ConfigError> {
    if let Some(value) = &layer {
        Config::deserialize(value).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(layer)
}

/// Writes `top` over `base`. Objects merge per key, anything else replaces.
fn overlay(base: &mut Value, top: Value) {
    match (base, top) {
        (Value::Object(base), Value::Object(top)) => {
            for (key, value) in top {
                match base.get_mut(&key) {
                    Some(slot) => overlay(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, top) => *slot = top,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn sources(dir: &Path, global: Option<&str>, local: Option<&str>) -> ConfigSources {
        let global_path = dir.join("global.json");
        let local_path = dir.join(CONFIG_FILENAME);
        if let Some(content) = global {
            fs::write(&global_path, content).unwrap();
        }
        if let Some(content) = local {
            fs::write(&local_path, content).unwrap();
        }
        ConfigSources {
            global: Some(global_path),
            local: local_path,
        }
    }

    #[test]
    fn test_default_config_json_shape() {
        let value = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "clamp": { "range": { "lo": 0, "hi": 10 }, "policy": "strict" },
                "record": { "id": 1, "name": "Alice" },
                "point": { "x": 3.0, "y": 4.0 }
            })
        );
    }

    #[test]
    fn test_no_files_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = sources(dir.path(), None, None).resolve().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let local = r#"{
  "clamp": { "range": { "lo": -5, "hi": 5 }, "policy": "lenient" },
  "record": { "id": 7, "name": "Bob" },
  "point": { "x": 6.0, "y": 8.0 }
}"#;
        let config = sources(dir.path(), None, Some(local)).resolve().unwrap();
        assert_eq!(config.clamp.range, BoundedRange::new(-5, 5).unwrap());
        assert_eq!(config.clamp.policy, RangePolicy::Lenient);
        assert_eq!(config.record, Record::new(7, "Bob"));
        assert_eq!(config.point.distance_from_origin(), 10.0);
    }

    #[test]
    fn test_partial_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = sources(dir.path(), None, Some(r#"{ "record": { "name": "Carol" } }"#))
            .resolve()
            .unwrap();
        assert_eq!(config.record, Record::new(1, "Carol"));
        assert_eq!(config.clamp, ClampConfig::default());
        assert_eq!(config.point, Point::default());
    }

    #[test]
    fn test_local_overrides_global_per_field() {
        let dir = tempfile::tempdir().unwrap();
        let config = sources(
            dir.path(),
            Some(r#"{"record": {"id": 50, "name": "Global"}}"#),
            Some(r#"{"record": {"id": 10}}"#),
        )
        .resolve()
        .unwrap();
        assert_eq!(config.record, Record::new(10, "Global"));
    }

    #[test]
    fn test_range_split_across_layers() {
        let dir = tempfile::tempdir().unwrap();
        let config = sources(
            dir.path(),
            Some(r#"{"clamp": {"range": {"lo": -100, "hi": 0}}}"#),
            Some(r#"{"clamp": {"range": {"hi": 100}}}"#),
        )
        .resolve()
        .unwrap();
        assert_eq!(config.clamp.range, BoundedRange::new(-100, 100).unwrap());
    }

    #[test]
    fn test_unparsable_global_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let config = sources(dir.path(), Some("{bad json"), Some(r#"{"record": {"id": 3}}"#))
            .resolve()
            .unwrap();
        assert_eq!(config.record.id, 3);
    }

    #[test]
    fn test_global_with_inverted_range_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let config = sources(
            dir.path(),
            Some(r#"{"clamp": {"range": {"lo": 9, "hi": 1}}}"#),
            None,
        )
        .resolve()
        .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_global_with_unknown_field_is_skipped_whole() {
        let dir = tempfile::tempdir().unwrap();
        let config = sources(
            dir.path(),
            Some(r#"{"typo_field": true, "record": {"id": 99}}"#),
            Some(r#"{"point": {"x": 0.0}}"#),
        )
        .resolve()
        .unwrap();
        assert_eq!(config.record, Record::default());
        assert_eq!(config.point, Point::new(0.0, 4.0));
    }

    #[test]
    fn test_invalid_local_errors_with_local_path() {
        let dir = tempfile::tempdir().unwrap();
        let sources = sources(dir.path(), Some(r#"{"record": {"id": 3}}"#), Some("{bad json"));
        let err = sources.resolve().unwrap_err();
        assert!(matches!(&err, ConfigError::Invalid { path, .. } if *path == sources.local));
    }

    #[test]
    fn test_local_unknown_field_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = sources(dir.path(), None, Some(r#"{ "point": { "x": 1.0, "z": 2.0 } }"#))
            .resolve()
            .unwrap_err();
        assert!(err.to_string().contains("unknown field `z`"));
    }

    #[test]
    fn test_local_inverted_range_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = sources(
            dir.path(),
            None,
            Some(r#"{ "clamp": { "range": { "lo": 9, "hi": 1 } } }"#),
        )
        .resolve()
        .unwrap_err();
        assert!(err.to_string().contains("invalid range"));
    }

    #[test]
    fn test_overlay_replaces_scalars_and_keeps_siblings() {
        let mut base = json!({"a": {"b": 1, "c": 2}, "d": [1, 2]});
        overlay(&mut base, json!({"a": {"b": 5}, "d": [3]}));
        assert_eq!(base, json!({"a": {"b": 5, "c": 2}, "d": [3]}));

        overlay(&mut base, json!({"a": 0}));
        assert_eq!(base, json!({"a": 0, "d": [3]}));
    }

    #[test]
    fn test_error_display_includes_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ConfigError::Io {
            path: PathBuf::from("/some/config.json"),
            source: io_err,
        };
        assert!(err.to_string().contains("/some/config.json"));
        assert!(err.to_string().contains("denied"));
    }
}
