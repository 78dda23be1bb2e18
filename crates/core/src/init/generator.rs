//! Starter settings file generation.

use super::error::{InitError, InitResult};
use super::templates::{get_template, template_for};
use crate::config::DocumentFormat;
use std::path::PathBuf;
use tracing::info;

/// File name stem of generated settings files (`stylekit.config.yaml`, ...).
pub const CONFIG_FILE_STEM: &str = "stylekit.config";

/// Options for writing a starter settings file.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Directory the settings file is written into. Created if missing.
    pub target_dir: PathBuf,

    /// Syntax of the generated file.
    pub format: DocumentFormat,

    /// Overwrite an existing settings file.
    pub force: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            target_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            format: DocumentFormat::default(),
            force: false,
        }
    }
}

/// Write a starter settings file into `options.target_dir`.
///
/// # Returns
/// The path of the written file, or an `InitError` if:
/// - The settings file already exists (without force flag)
/// - The template for the requested format cannot be found
/// - File system operations fail
pub async fn generate_config(options: InitOptions) -> InitResult<PathBuf> {
    let file_name = template_for(options.format);
    let target_path = options.target_dir.join(&file_name);

    let exists = tokio::fs::try_exists(&target_path)
        .await
        .map_err(|source| InitError::FileAccess {
            path: target_path.clone(),
            source,
        })?;
    if exists && !options.force {
        return Err(InitError::FileExists(target_path));
    }

    let content =
        get_template(&file_name).ok_or_else(|| InitError::TemplateNotFound(file_name.clone()))?;

    tokio::fs::create_dir_all(&options.target_dir)
        .await
        .map_err(|source| InitError::DirectoryCreate {
            path: options.target_dir.clone(),
            source,
        })?;

    tokio::fs::write(&target_path, content)
        .await
        .map_err(|source| InitError::FileWrite {
            path: target_path.clone(),
            source,
        })?;

    info!(path = %target_path.display(), format = %options.format, "wrote starter settings");
    Ok(target_path)
}
