//! Structural validation of a parsed settings tree.
//!
//! Walks the tree produced by [`DocumentFormat::parse`](super::DocumentFormat::parse),
//! maps the recognized keys into [`Settings`] and records every other key as
//! a warning. The first schema violation aborts the walk.

use crate::config::error::SchemaError;
use crate::config::models::ConfigWarning;
use serde_json::{Map, Value};
use sk_protocol::{ColorValue, DarkMode, Plugin, Settings, SettingsInvariantError};
use std::collections::{BTreeMap, BTreeSet};

const CONTENT: &str = "content";
const DARK_MODE: &str = "darkMode";
const THEME: &str = "theme";
const VARIANTS: &str = "variants";
const PLUGINS: &str = "plugins";
const FONT_FAMILY: &str = "fontFamily";
const EXTEND: &str = "extend";
const COLORS: &str = "colors";

const TOP_LEVEL_KEYS: &[&str] = &[CONTENT, DARK_MODE, THEME, VARIANTS, PLUGINS];
const THEME_KEYS: &[&str] = &[FONT_FAMILY, EXTEND];
const THEME_EXTEND_KEYS: &[&str] = &[COLORS];
const VARIANTS_KEYS: &[&str] = &[EXTEND];

/// Validates a settings tree.
///
/// `null` values are treated as if the key were absent.
pub(crate) fn validate(root: &Value) -> Result<(Settings, Vec<ConfigWarning>), SchemaError> {
    let mut warnings = Vec::new();

    let root = match root {
        Value::Null => return Err(missing(CONTENT)),
        other => mapping("<root>", other)?,
    };
    collect_unknown_keys(root, "", TOP_LEVEL_KEYS, &mut warnings);

    let content_globs = match present(root, CONTENT) {
        Some(value) => content_globs(value)?,
        None => return Err(missing(CONTENT)),
    };

    let dark_mode = present(root, DARK_MODE)
        .map(dark_mode)
        .transpose()?
        .unwrap_or_default();

    let mut font_families = BTreeMap::new();
    let mut color_overrides = BTreeMap::new();
    if let Some(theme) = present(root, THEME) {
        let theme = mapping(THEME, theme)?;
        collect_unknown_keys(theme, THEME, THEME_KEYS, &mut warnings);

        if let Some(fonts) = present(theme, FONT_FAMILY) {
            font_families = font_family_map(fonts)?;
        }

        if let Some(extend) = present(theme, EXTEND) {
            let path = format!("{THEME}.{EXTEND}");
            let extend = mapping(&path, extend)?;
            collect_unknown_keys(extend, &path, THEME_EXTEND_KEYS, &mut warnings);

            if let Some(colors) = present(extend, COLORS) {
                color_overrides = color_map(&format!("{path}.{COLORS}"), colors)?;
            }
        }
    }

    let mut variant_extensions = BTreeMap::new();
    if let Some(variants) = present(root, VARIANTS) {
        let variants = mapping(VARIANTS, variants)?;
        collect_unknown_keys(variants, VARIANTS, VARIANTS_KEYS, &mut warnings);

        if let Some(extend) = present(variants, EXTEND) {
            variant_extensions = variant_map(extend)?;
        }
    }

    let plugins = present(root, PLUGINS)
        .map(plugin_list)
        .transpose()?
        .unwrap_or_default();

    let settings = Settings::try_new(
        content_globs,
        dark_mode,
        font_families,
        color_overrides,
        variant_extensions,
        plugins,
    )
    .map_err(invariant_violation)?;
    Ok((settings, warnings))
}

/// Reports a broken `Settings` invariant against the key that caused it.
fn invariant_violation(err: SettingsInvariantError) -> SchemaError {
    match err {
        SettingsInvariantError::EmptyContent => shape(
            CONTENT,
            "non-empty sequence of glob strings",
            "empty sequence",
        ),
        SettingsInvariantError::BlankGlob { index } => {
            shape(&format!("{CONTENT}[{index}]"), "glob pattern", "empty string")
        }
        SettingsInvariantError::EmptyFontStack { alias } => shape(
            &format!("{THEME}.{FONT_FAMILY}.{alias}"),
            "non-empty sequence of font names",
            "empty sequence",
        ),
    }
}

fn content_globs(value: &Value) -> Result<Vec<String>, SchemaError> {
    string_list(CONTENT, value)
}

fn dark_mode(value: &Value) -> Result<DarkMode, SchemaError> {
    value
        .as_str()
        .and_then(DarkMode::parse)
        .ok_or_else(|| SchemaError::InvalidEnum {
            key: DARK_MODE.to_string(),
            value: value.to_string(),
            expected: DarkMode::ALL
                .iter()
                .map(|mode| format!("\"{mode}\""))
                .collect::<Vec<_>>()
                .join(", "),
        })
}

fn font_family_map(value: &Value) -> Result<BTreeMap<String, Vec<String>>, SchemaError> {
    let base = format!("{THEME}.{FONT_FAMILY}");
    let fonts = mapping(&base, value)?;

    let mut families = BTreeMap::new();
    for (alias, stack) in fonts {
        let path = format!("{base}.{alias}");
        families.insert(alias.clone(), string_list(&path, stack)?);
    }
    Ok(families)
}

fn color_map(path: &str, value: &Value) -> Result<BTreeMap<String, ColorValue>, SchemaError> {
    mapping(path, value)?
        .iter()
        .map(|(name, color)| {
            let color = color_value(&format!("{path}.{name}"), color)?;
            Ok((name.clone(), color))
        })
        .collect()
}

fn color_value(path: &str, value: &Value) -> Result<ColorValue, SchemaError> {
    match value {
        Value::String(literal) => Ok(ColorValue::Literal(literal.clone())),
        Value::Object(_) => color_map(path, value).map(ColorValue::Shades),
        other => Err(shape(
            path,
            "color string or mapping of shades",
            describe(other),
        )),
    }
}

fn variant_map(value: &Value) -> Result<BTreeMap<String, BTreeSet<String>>, SchemaError> {
    let base = format!("{VARIANTS}.{EXTEND}");
    mapping(&base, value)?
        .iter()
        .map(|(category, states)| {
            let states = string_list(&format!("{base}.{category}"), states)?;
            Ok((category.clone(), states.into_iter().collect()))
        })
        .collect()
}

fn plugin_list(value: &Value) -> Result<Vec<Plugin>, SchemaError> {
    let Value::Array(items) = value else {
        return Err(shape(PLUGINS, "sequence of plugin identifiers", describe(value)));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let name = item.as_str().ok_or_else(|| {
                shape(&format!("{PLUGINS}[{index}]"), "plugin identifier", describe(item))
            })?;
            Plugin::from_identifier(name).ok_or_else(|| SchemaError::UnknownPlugin {
                name: name.to_string(),
            })
        })
        .collect()
}

fn string_list(path: &str, value: &Value) -> Result<Vec<String>, SchemaError> {
    let Value::Array(items) = value else {
        return Err(shape(path, "sequence of strings", describe(value)));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| shape(&format!("{path}[{index}]"), "string", describe(item)))
        })
        .collect()
}

fn mapping<'a>(path: &str, value: &'a Value) -> Result<&'a Map<String, Value>, SchemaError> {
    value
        .as_object()
        .ok_or_else(|| shape(path, "mapping", describe(value)))
}

/// Returns the value under `key` unless it is absent or `null`.
fn present<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|value| !value.is_null())
}

fn collect_unknown_keys(
    map: &Map<String, Value>,
    prefix: &str,
    known: &[&str],
    warnings: &mut Vec<ConfigWarning>,
) {
    for key in map.keys().filter(|key| !known.contains(&key.as_str())) {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        warnings.push(ConfigWarning::UnknownKey { path });
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

fn missing(key: &str) -> SchemaError {
    SchemaError::MissingRequiredKey {
        key: key.to_string(),
    }
}

fn shape(key: &str, expected: &str, found: &str) -> SchemaError {
    SchemaError::InvalidShape {
        key: key.to_string(),
        expected: expected.to_string(),
        found: found.to_string(),
    }
}
