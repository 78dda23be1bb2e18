//! Normalized settings models.
//!
//! This module defines the validated, immutable [`Settings`] value and the
//! enumerations it is built from. A `Settings` can only be built through a
//! checked constructor; it exposes read-only accessors and no mutation API.

use crate::document_models::SettingsDocument;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use thiserror::Error;
use ts_rs::TS;

/// Strategy used by the build tool to emit dark-mode variants.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, TS)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    /// Follow the operating system preference (`prefers-color-scheme`).
    #[default]
    Media,

    /// Toggle manually through a `dark` class on an ancestor element.
    Class,
}

impl DarkMode {
    /// Every accepted value, in documentation order.
    pub const ALL: [DarkMode; 2] = [DarkMode::Media, DarkMode::Class];

    /// Parses the literal used in settings documents.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == value)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DarkMode::Media => "media",
            DarkMode::Class => "class",
        }
    }
}

impl fmt::Display for DarkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized plugin that extends utility-class generation.
///
/// Plugins are identified by name only; resolving them to executable
/// behavior is left to the build tool that consumes the settings.
///
/// # Example
///
/// ```yaml
/// plugins:
///   - forms
///   - "@tailwindcss/aspect-ratio"
///   - typography
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "kebab-case")]
pub enum Plugin {
    /// Form element resets.
    Forms,
    /// Fixed aspect-ratio boxes.
    AspectRatio,
    /// Prose styles for rendered markdown.
    Typography,
    /// Multi-line text truncation.
    LineClamp,
    /// Container query variants.
    ContainerQueries,
}

/// Scope under which the plugins are published as packages.
const PACKAGE_SCOPE: &str = "@tailwindcss/";

impl Plugin {
    /// Every recognized plugin.
    pub const ALL: [Plugin; 5] = [
        Plugin::Forms,
        Plugin::AspectRatio,
        Plugin::Typography,
        Plugin::LineClamp,
        Plugin::ContainerQueries,
    ];

    /// Resolves a plugin identifier.
    ///
    /// Both the short identifier (`forms`) and the scoped package name
    /// (`@tailwindcss/forms`) are accepted.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        let name = identifier.strip_prefix(PACKAGE_SCOPE).unwrap_or(identifier);
        Self::ALL.into_iter().find(|plugin| plugin.as_str() == name)
    }

    /// The short identifier written back to documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Plugin::Forms => "forms",
            Plugin::AspectRatio => "aspect-ratio",
            Plugin::Typography => "typography",
            Plugin::LineClamp => "line-clamp",
            Plugin::ContainerQueries => "container-queries",
        }
    }

    /// The package name the build tool resolves this plugin from.
    pub fn package_name(self) -> String {
        format!("{PACKAGE_SCOPE}{}", self.as_str())
    }
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A color override: either a literal color or a nested map of shades.
///
/// Nesting is unbounded, so `colors.brand.light.500` is representable.
///
/// # Example
///
/// ```yaml
/// colors:
///   primary: "#1d4ed8"
///   gray:
///     100: "#f1f5f9"
///     900: "#0f172a"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(untagged)]
pub enum ColorValue {
    /// A CSS color literal such as `#0f172a` or `rgb(15 23 42)`.
    Literal(String),

    /// Named shades, each of which may nest further.
    Shades(BTreeMap<String, ColorValue>),
}

/// A data-model invariant that a candidate `Settings` breaks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsInvariantError {
    #[error("content must list at least one glob pattern")]
    EmptyContent,

    #[error("content glob at index {index} is blank")]
    BlankGlob { index: usize },

    #[error("font alias `{alias}` has an empty font stack")]
    EmptyFontStack { alias: String },
}

/// Validated settings for the utility-stylesheet build tool.
///
/// Values are created once through [`Settings::try_new`], which enforces the
/// data-model invariants, and never change afterwards. All fields are
/// reachable through accessors only.
///
/// Serializing a `Settings` produces the document shape (see
/// [`SettingsDocument`]), so the output can be loaded again.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(into = "SettingsDocument")]
pub struct Settings {
    pub(crate) content_globs: Vec<String>,
    pub(crate) dark_mode: DarkMode,
    pub(crate) font_families: BTreeMap<String, Vec<String>>,
    pub(crate) color_overrides: BTreeMap<String, ColorValue>,
    pub(crate) variant_extensions: BTreeMap<String, BTreeSet<String>>,
    pub(crate) plugins: Vec<Plugin>,
}

impl Settings {
    /// Assembles settings, checking the invariants every `Settings` holds.
    ///
    /// # Errors
    ///
    /// Returns `SettingsInvariantError` if:
    /// - `content_globs` is empty or contains a blank pattern
    /// - A font alias maps to an empty font stack
    pub fn try_new(
        content_globs: Vec<String>,
        dark_mode: DarkMode,
        font_families: BTreeMap<String, Vec<String>>,
        color_overrides: BTreeMap<String, ColorValue>,
        variant_extensions: BTreeMap<String, BTreeSet<String>>,
        plugins: Vec<Plugin>,
    ) -> Result<Self, SettingsInvariantError> {
        if content_globs.is_empty() {
            return Err(SettingsInvariantError::EmptyContent);
        }
        if let Some(index) = content_globs.iter().position(|glob| glob.trim().is_empty()) {
            return Err(SettingsInvariantError::BlankGlob { index });
        }
        if let Some(alias) = font_families
            .iter()
            .find_map(|(alias, stack)| stack.is_empty().then(|| alias.clone()))
        {
            return Err(SettingsInvariantError::EmptyFontStack { alias });
        }

        Ok(Self {
            content_globs,
            dark_mode,
            font_families,
            color_overrides,
            variant_extensions,
            plugins,
        })
    }

    /// Glob patterns selecting the source files to scan, in precedence order.
    pub fn content_globs(&self) -> &[String] {
        &self.content_globs
    }

    pub fn dark_mode(&self) -> DarkMode {
        self.dark_mode
    }

    /// Font alias to font stack.
    pub fn font_families(&self) -> &BTreeMap<String, Vec<String>> {
        &self.font_families
    }

    /// Looks up a single font stack by alias.
    pub fn font_family(&self, alias: &str) -> Option<&[String]> {
        self.font_families.get(alias).map(Vec::as_slice)
    }

    pub fn color_overrides(&self) -> &BTreeMap<String, ColorValue> {
        &self.color_overrides
    }

    /// Property category to the extra variant states enabled for it.
    pub fn variant_extensions(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.variant_extensions
    }

    /// Plugins in application order.
    pub fn plugins(&self) -> &[Plugin] {
        &self.plugins
    }

    /// Converts these settings into the serializable document shape.
    pub fn to_document(&self) -> SettingsDocument {
        SettingsDocument::from(self.clone())
    }
}
