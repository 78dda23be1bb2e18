//! Settings loader.
//!
//! [`ConfigLoader::load`] turns source text into validated settings without
//! touching the filesystem. [`load_config_file`] adds file reading and
//! format detection on top of it.

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::format::DocumentFormat;
use crate::config::models::LoadedConfig;
use crate::config::schema;
use sk_protocol::Settings;
use std::path::Path;
use tracing::{debug, warn};

/// Parses and validates settings documents of one format.
///
/// Loading is a pure function of the input text, so a loader can be shared
/// freely and called from any thread.
///
/// # Example
///
/// ```rust
/// use sk_core::ConfigLoader;
/// use sk_protocol::{DarkMode, Plugin};
///
/// let source = r#"
/// content: ["./js/**/*.js", "../lib/*_web.ex"]
/// darkMode: class
/// plugins: [forms, typography]
/// "#;
///
/// let loaded = ConfigLoader::new().load(source).expect("valid settings");
/// assert_eq!(loaded.settings.dark_mode(), DarkMode::Class);
/// assert_eq!(loaded.settings.plugins(), [Plugin::Forms, Plugin::Typography]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigLoader {
    format: DocumentFormat,
}

impl ConfigLoader {
    /// A loader for YAML documents (JSON text is accepted as well).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(format: DocumentFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    /// Loads settings from source text.
    ///
    /// Unrecognized keys do not fail the load; they are logged and returned
    /// in [`LoadedConfig::warnings`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - The text is not valid in the loader's format
    /// - `content` is missing
    /// - A value has the wrong shape, an unknown enumeration value or names an
    ///   unknown plugin
    pub fn load(&self, source: &str) -> ConfigResult<LoadedConfig> {
        let tree = self.format.parse(source)?;
        let (settings, warnings) = schema::validate(&tree)?;

        for warning in &warnings {
            warn!(format = %self.format, "{warning}");
        }
        debug!(
            format = %self.format,
            content_globs = settings.content_globs().len(),
            font_families = settings.font_families().len(),
            plugins = settings.plugins().len(),
            "loaded settings"
        );

        Ok(LoadedConfig { settings, warnings })
    }
}

/// Loads settings from a file, picking the format from its extension.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - The extension is not `.yaml`, `.yml`, `.json` or `.toml`
/// - The file cannot be read
/// - The contents fail to load (see [`ConfigLoader::load`])
///
/// # Example
///
/// ```rust,no_run
/// use sk_core::load_config_file;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let loaded = load_config_file(Path::new("stylekit.config.yaml")).await?;
/// println!("Scanning {} globs", loaded.settings.content_globs().len());
/// # Ok(())
/// # }
/// ```
pub async fn load_config_file(path: &Path) -> ConfigResult<LoadedConfig> {
    let format = DocumentFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), %format, "reading settings file");
    ConfigLoader::with_format(format).load(&content)
}

/// Renders settings in the given format.
///
/// The output loads back into settings equal to `settings`.
pub fn render_settings(settings: &Settings, format: DocumentFormat) -> ConfigResult<String> {
    format.render(&settings.to_document())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::error::SchemaError;
    use crate::config::models::ConfigWarning;
    use sk_protocol::{DarkMode, Plugin};
    use std::fs;
    use tempfile::tempdir;

    const REFERENCE_YAML: &str = r#"
content:
  - "./js/**/*.js"
  - "../lib/*_web.ex"
  - "../lib/*_web/**/*.*ex"
darkMode: media
theme:
  fontFamily:
    times: ["Times New Roman"]
    windows: ["VT323"]
    mono: ["ui-monospace", "SFMono-Regular"]
    creepster: ["Creepster"]
    ibm_plex: ["IBM Plex Serif"]
    metal: ["Metal Mania"]
    marker: ["Permanent Marker"]
  extend:
    colors: {}
variants:
  extend:
    borderColor: ["active"]
    backgroundColor: ["active"]
    textColor: ["active"]
plugins:
  - forms
  - aspect-ratio
  - typography
"#;

    fn load_yaml(source: &str) -> ConfigResult<LoadedConfig> {
        ConfigLoader::new().load(source)
    }

    fn schema_error(result: ConfigResult<LoadedConfig>) -> SchemaError {
        match result {
            Err(ConfigError::Schema(err)) => err,
            other => panic!("Expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_reference_settings() {
        let loaded = load_yaml(REFERENCE_YAML).expect("Reference settings should load");
        let settings = &loaded.settings;

        assert_eq!(
            settings.content_globs(),
            ["./js/**/*.js", "../lib/*_web.ex", "../lib/*_web/**/*.*ex"]
        );
        assert_eq!(settings.dark_mode(), DarkMode::Media);
        assert_eq!(settings.font_families().len(), 7);
        assert_eq!(
            settings.font_family("mono"),
            Some(&["ui-monospace".to_string(), "SFMono-Regular".to_string()][..])
        );
        assert!(settings.color_overrides().is_empty());
        assert_eq!(settings.variant_extensions().len(), 3);
        assert!(settings.variant_extensions()["borderColor"].contains("active"));
        assert_eq!(
            settings.plugins(),
            [Plugin::Forms, Plugin::AspectRatio, Plugin::Typography]
        );
        assert!(!loaded.has_warnings());
    }

    #[test]
    fn test_dark_mode_defaults_to_media() {
        let loaded = load_yaml("content: ['a/**/*.js']").expect("Should load");
        assert_eq!(loaded.settings.dark_mode(), DarkMode::Media);
    }

    #[test]
    fn test_dark_mode_class() {
        let loaded = load_yaml("content: ['a']\ndarkMode: class").expect("Should load");
        assert_eq!(loaded.settings.dark_mode(), DarkMode::Class);
    }

    #[test]
    fn test_dark_mode_invalid_literal() {
        let err = schema_error(load_yaml("content: ['a']\ndarkMode: dark"));
        assert!(matches!(
            err,
            SchemaError::InvalidEnum { ref key, ref value, .. } if key == "darkMode" && value == "\"dark\""
        ));
    }

    #[test]
    fn test_missing_content() {
        let err = schema_error(load_yaml("darkMode: media\nplugins: [forms]"));
        assert_eq!(
            err,
            SchemaError::MissingRequiredKey {
                key: "content".to_string()
            }
        );
    }

    #[test]
    fn test_empty_document_is_missing_content() {
        let err = schema_error(load_yaml(""));
        assert!(matches!(err, SchemaError::MissingRequiredKey { .. }));
    }

    #[test]
    fn test_content_order_preserved() {
        let globs = ["z/**/*.js", "a/*.ex", "m/**/*.heex", "b/*.html"];
        let source = format!("content: {}", serde_json::json!(globs));

        let loaded = load_yaml(&source).expect("Should load");
        assert_eq!(loaded.settings.content_globs(), globs);
    }

    #[test]
    fn test_scoped_plugin_names_are_normalized() {
        let loaded = load_yaml(
            "content: ['a']\nplugins: ['@tailwindcss/typography', '@tailwindcss/forms']",
        )
        .expect("Should load");
        assert_eq!(
            loaded.settings.plugins(),
            [Plugin::Typography, Plugin::Forms]
        );
    }

    #[test]
    fn test_unknown_plugin() {
        let err = schema_error(load_yaml("content: ['a']\nplugins: [forms, '@acme/glitter']"));
        assert_eq!(
            err,
            SchemaError::UnknownPlugin {
                name: "@acme/glitter".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_top_level_keys_warn() {
        let loaded = load_yaml("content: ['a']\nimportant: true\ncorePlugins: {}")
            .expect("Unknown keys should not fail");

        assert_eq!(
            loaded.warnings,
            vec![
                ConfigWarning::UnknownKey {
                    path: "corePlugins".to_string()
                },
                ConfigWarning::UnknownKey {
                    path: "important".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_round_trip_in_every_format() {
        let original = load_yaml(REFERENCE_YAML).expect("Should load").settings;

        for format in DocumentFormat::ALL {
            let text = render_settings(&original, format).expect("Should render");
            let reloaded = ConfigLoader::with_format(format)
                .load(&text)
                .unwrap_or_else(|e| panic!("{format} output should reload: {e}\n{text}"));

            assert_eq!(reloaded.settings, original, "{format} round trip changed settings");
            assert!(reloaded.warnings.is_empty());
        }
    }

    #[test]
    fn test_round_trip_with_nested_colors() {
        let source = r##"
content: ["src/**/*.rs"]
darkMode: class
theme:
  extend:
    colors:
      teal: "#14b8a6"
      gray:
        100: "#f1f5f9"
        900: "#0f172a"
"##;
        let original = load_yaml(source).expect("Should load").settings;

        for format in DocumentFormat::ALL {
            let text = render_settings(&original, format).expect("Should render");
            let reloaded = ConfigLoader::with_format(format)
                .load(&text)
                .expect("Rendered settings should reload");
            assert_eq!(reloaded.settings, original);
        }
    }

    #[test]
    fn test_formats_agree() {
        let json = r#"{
  "content": ["./js/**/*.js"],
  "darkMode": "class",
  "theme": { "fontFamily": { "mono": ["ui-monospace", "SFMono-Regular"] } },
  "plugins": ["forms"]
}"#;
        let toml = r#"
content = ["./js/**/*.js"]
darkMode = "class"
plugins = ["forms"]

[theme.fontFamily]
mono = ["ui-monospace", "SFMono-Regular"]
"#;

        let from_json = ConfigLoader::with_format(DocumentFormat::Json)
            .load(json)
            .expect("JSON should load");
        let from_toml = ConfigLoader::with_format(DocumentFormat::Toml)
            .load(toml)
            .expect("TOML should load");
        let from_yaml = ConfigLoader::new().load(json).expect("JSON text as YAML");

        assert_eq!(from_json.settings, from_toml.settings);
        assert_eq!(from_json.settings, from_yaml.settings);
    }

    #[tokio::test]
    async fn test_load_config_file_by_extension() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("stylekit.config.toml");
        fs::write(&path, "content = [\"./js/**/*.js\"]\ndarkMode = \"class\"\n")
            .expect("Failed to write settings file");

        let loaded = load_config_file(&path).await.expect("Should load file");
        assert_eq!(loaded.settings.dark_mode(), DarkMode::Class);
    }

    #[tokio::test]
    async fn test_load_config_file_unsupported_extension() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("tailwind.config.js");
        fs::write(&path, "module.exports = {}").expect("Failed to write file");

        let result = load_config_file(&path).await;
        if let Err(ConfigError::UnsupportedFormat { path: reported }) = result {
            assert!(reported.ends_with("tailwind.config.js"));
        } else {
            panic!("Expected UnsupportedFormat error");
        }
    }

    #[tokio::test]
    async fn test_load_config_file_missing() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("missing.yaml");

        let result = load_config_file(&path).await;
        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[tokio::test]
    async fn test_load_config_file_reports_syntax_errors() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("settings.json");
        fs::write(&path, "{\"content\": [").expect("Failed to write file");

        let result = load_config_file(&path).await;
        assert!(matches!(result, Err(ConfigError::JsonParse { .. })));
    }

    #[test]
    fn test_settings_are_shareable_across_threads() {
        let settings = load_yaml(REFERENCE_YAML).expect("Should load").settings;
        let shared = std::sync::Arc::new(settings);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = std::sync::Arc::clone(&shared);
                std::thread::spawn(move || shared.content_globs().len())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().expect("Thread panicked"), 3);
        }
    }
}
