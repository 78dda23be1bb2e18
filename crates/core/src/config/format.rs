//! Document formats a settings file can be written in.
//!
//! Every format is parsed into the same structural tree
//! ([`serde_json::Value`]) so that validation runs once, independent of the
//! source syntax.

use crate::config::error::{ConfigError, ConfigResult};
use serde_json::{Map, Number, Value};
use sk_protocol::SettingsDocument;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Syntax of a settings document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DocumentFormat {
    /// YAML 1.2. Also accepts JSON text.
    #[default]
    Yaml,
    Json,
    Toml,
}

impl DocumentFormat {
    pub const ALL: [DocumentFormat; 3] = [
        DocumentFormat::Yaml,
        DocumentFormat::Json,
        DocumentFormat::Toml,
    ];

    /// Canonical file extension, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            DocumentFormat::Yaml => "yaml",
            DocumentFormat::Json => "json",
            DocumentFormat::Toml => "toml",
        }
    }

    /// Picks the format from a file extension (`yaml`, `yml`, `json`, `toml`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|s| s.to_str())?;
        ext.parse().ok()
    }

    /// Parses source text into a structural tree.
    ///
    /// Blank input yields an empty mapping.
    pub fn parse(self, source: &str) -> ConfigResult<Value> {
        if source.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }

        match self {
            DocumentFormat::Yaml => {
                let value: serde_yaml::Value = serde_yaml::from_str(source)
                    .map_err(|source| ConfigError::YamlParse { source })?;
                yaml_to_tree(value, "")
            }
            DocumentFormat::Json => {
                serde_json::from_str(source).map_err(|source| ConfigError::JsonParse { source })
            }
            DocumentFormat::Toml => {
                toml::from_str(source).map_err(|source| ConfigError::TomlParse { source })
            }
        }
    }

    /// Writes a settings document in this format.
    pub fn render(self, document: &SettingsDocument) -> ConfigResult<String> {
        let render_error = |reason: String| ConfigError::Render {
            format: self,
            reason,
        };

        match self {
            DocumentFormat::Yaml => {
                serde_yaml::to_string(document).map_err(|e| render_error(e.to_string()))
            }
            DocumentFormat::Json => serde_json::to_string_pretty(document)
                .map(|mut text| {
                    text.push('\n');
                    text
                })
                .map_err(|e| render_error(e.to_string())),
            DocumentFormat::Toml => {
                toml::to_string_pretty(document).map_err(|e| render_error(e.to_string()))
            }
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentFormat::Yaml => "YAML",
            DocumentFormat::Json => "JSON",
            DocumentFormat::Toml => "TOML",
        };
        f.write_str(name)
    }
}

impl FromStr for DocumentFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            "json" => Ok(DocumentFormat::Json),
            "toml" => Ok(DocumentFormat::Toml),
            other => Err(format!(
                "unknown format `{other}` (expected yaml, json or toml)"
            )),
        }
    }
}

/// Converts a YAML value into the shared tree.
///
/// Scalar mapping keys are stringified, so `500: "#fff"` keeps its shade
/// name. Tags are dropped in favor of the tagged value.
fn yaml_to_tree(value: serde_yaml::Value, path: &str) -> ConfigResult<Value> {
    let unsupported = |reason: &str| ConfigError::UnsupportedYaml {
        key: if path.is_empty() {
            "<root>".to_string()
        } else {
            path.to_string()
        },
        reason: reason.to_string(),
    };

    match value {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(i.into()))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(u.into()))
            } else {
                n.as_f64()
                    .and_then(Number::from_f64)
                    .map(Value::Number)
                    .ok_or_else(|| unsupported("non-finite number"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s)),
        serde_yaml::Value::Sequence(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| yaml_to_tree(item, &format!("{path}[{index}]")))
            .collect::<ConfigResult<Vec<_>>>()
            .map(Value::Array),
        serde_yaml::Value::Mapping(mapping) => {
            let mut object = Map::with_capacity(mapping.len());
            for (key, item) in mapping {
                let key = match key {
                    serde_yaml::Value::String(s) => s,
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    _ => return Err(unsupported("mapping keys must be scalars")),
                };
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                let item = yaml_to_tree(item, &child_path)?;
                if object.insert(key, item).is_some() {
                    return Err(ConfigError::UnsupportedYaml {
                        key: child_path,
                        reason: "duplicate key after conversion".to_string(),
                    });
                }
            }
            Ok(Value::Object(object))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_tree(tagged.value, path),
    }
}
