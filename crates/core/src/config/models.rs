//! Result types returned by the loader.

use sk_protocol::Settings;
use std::fmt;

/// A non-fatal finding recorded while loading a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A key the schema does not know. Its value was ignored.
    UnknownKey {
        /// Dotted path of the key, e.g. `corePlugins` or `theme.spacing`.
        path: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::UnknownKey { path } => {
                write!(f, "unrecognized key `{path}` was ignored")
            }
        }
    }
}

/// Validated settings together with the warnings raised while loading them.
///
/// # Example
///
/// ```rust
/// use sk_core::ConfigLoader;
///
/// let loaded = ConfigLoader::new()
///     .load("content: ['./js/**/*.js']\nimportant: true\n")
///     .expect("valid settings");
///
/// assert_eq!(loaded.settings.content_globs(), ["./js/**/*.js"]);
/// assert_eq!(loaded.warnings.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub settings: Settings,

    /// Warnings, sorted by key within each section.
    pub warnings: Vec<ConfigWarning>,
}

impl LoadedConfig {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
