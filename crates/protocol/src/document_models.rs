//! Document shape of a stylekit settings file.
//!
//! These structures mirror the nesting of the settings file on disk
//! (`theme.fontFamily`, `theme.extend.colors`, `variants.extend`). They are
//! used to write [`Settings`] back out; reading goes through the validating
//! loader in `sk-core` instead.

use crate::settings_models::{ColorValue, DarkMode, Plugin, Settings};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use ts_rs::TS;

/// A complete settings document.
///
/// Scalar and list keys come before the nested sections so the same value
/// serializes cleanly to TOML.
///
/// # Example
///
/// ```yaml
/// content:
///   - "./js/**/*.js"
///   - "../lib/*_web.ex"
/// darkMode: media
/// plugins:
///   - forms
/// theme:
///   fontFamily:
///     mono: ["ui-monospace", "SFMono-Regular"]
///   extend:
///     colors: {}
/// variants:
///   extend:
///     textColor: ["active"]
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDocument {
    /// Glob patterns of the files the build tool scans.
    pub content: Vec<String>,

    #[serde(default)]
    pub dark_mode: DarkMode,

    #[serde(default)]
    pub plugins: Vec<Plugin>,

    #[serde(default)]
    pub theme: ThemeSection,

    #[serde(default)]
    pub variants: VariantsSection,
}

/// The `theme` section.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSection {
    /// Font alias to font stack; replaces the build tool's defaults.
    #[serde(default)]
    pub font_family: BTreeMap<String, Vec<String>>,

    /// Additions merged on top of the build tool's default theme.
    #[serde(default)]
    pub extend: ThemeExtendSection,
}

/// The `theme.extend` section.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
pub struct ThemeExtendSection {
    #[serde(default)]
    pub colors: BTreeMap<String, ColorValue>,
}

/// The `variants` section.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
pub struct VariantsSection {
    /// Property category to additional variant states.
    #[serde(default)]
    pub extend: BTreeMap<String, BTreeSet<String>>,
}

impl From<Settings> for SettingsDocument {
    fn from(settings: Settings) -> Self {
        Self {
            content: settings.content_globs,
            dark_mode: settings.dark_mode,
            plugins: settings.plugins,
            theme: ThemeSection {
                font_family: settings.font_families,
                extend: ThemeExtendSection {
                    colors: settings.color_overrides,
                },
            },
            variants: VariantsSection {
                extend: settings.variant_extensions,
            },
        }
    }
}
