//! Test fixtures for creating sample settings documents.

use sk_core::config::DocumentFormat;
use std::path::PathBuf;
use tempfile::TempDir;

/// The reference settings document used across tests, in YAML.
#[allow(dead_code)]
pub const REFERENCE_YAML: &str = r#"
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

/// Build a minimal YAML document with the given content globs and extra lines.
#[allow(dead_code)]
pub fn document_with(globs: &[&str], extra: &str) -> String {
    let globs = globs
        .iter()
        .map(|glob| format!("  - \"{glob}\"\n"))
        .collect::<String>();
    format!("content:\n{globs}{extra}")
}

/// Create a temporary project directory containing one settings file.
///
/// Returns the TempDir (which must be kept alive for the test duration) and
/// the path of the written file.
#[allow(dead_code)]
pub fn create_project_with(
    format: DocumentFormat,
    contents: &str,
) -> std::io::Result<(TempDir, PathBuf)> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir
        .path()
        .join(format!("stylekit.config.{}", format.extension()));
    std::fs::write(&path, contents)?;
    Ok((temp_dir, path))
}
