//! Embedded starter settings files.
//!
//! This module uses `rust-embed` to embed the files under the crate's
//! `templates/` directory into the binary at compile time, so `init` works
//! without any files next to the executable.

use crate::config::DocumentFormat;
use crate::init::generator::CONFIG_FILE_STEM;
use rust_embed::RustEmbed;

/// Embedded template files from the `templates/` directory.
///
/// During development with the `debug-embed` feature, files are read from the
/// filesystem at runtime, allowing for quick iteration without recompilation.
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/templates"]
pub struct TemplateAssets;

/// Get template file content by path.
///
/// # Arguments
/// * `path` - Relative path from templates root (e.g., "stylekit.config.yaml")
///
/// # Returns
/// The file content as a String, or None if the file doesn't exist.
///
/// # Example
/// ```
/// use sk_core::init::templates::get_template;
///
/// let config = get_template("stylekit.config.yaml").expect("yaml starter should exist");
/// assert!(config.contains("darkMode: media"));
/// ```
pub fn get_template(path: &str) -> Option<String> {
    TemplateAssets::get(path).map(|file| String::from_utf8_lossy(file.data.as_ref()).to_string())
}

/// File name of the starter for `format`.
pub fn template_for(format: DocumentFormat) -> String {
    format!("{CONFIG_FILE_STEM}.{}", format.extension())
}
