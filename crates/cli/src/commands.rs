//! Subcommand implementations.

use color_eyre::eyre::{bail, WrapErr};
use colored::Colorize;
use sk_core::config::{load_config_file, render_settings, DocumentFormat};
use sk_core::init::{generate_config, InitOptions};
use std::path::{Path, PathBuf};

pub async fn check(file: &Path, deny_warnings: bool) -> color_eyre::Result<()> {
    let loaded = load_config_file(file)
        .await
        .wrap_err_with(|| format!("{} is not a valid settings file", file.display()))?;

    // Warnings were already logged by the loader.
    if deny_warnings && loaded.has_warnings() {
        bail!(
            "{} has {} unrecognized key(s)",
            file.display(),
            loaded.warnings.len()
        );
    }

    let settings = &loaded.settings;
    println!(
        "{} {}: {} content globs, {} font families, {} plugins, dark mode `{}`",
        "ok".green().bold(),
        file.display(),
        settings.content_globs().len(),
        settings.font_families().len(),
        settings.plugins().len(),
        settings.dark_mode()
    );
    Ok(())
}

pub async fn show(file: &Path, output: DocumentFormat) -> color_eyre::Result<()> {
    let loaded = load_config_file(file)
        .await
        .wrap_err_with(|| format!("{} is not a valid settings file", file.display()))?;

    let text = render_settings(&loaded.settings, output)?;
    print!("{text}");
    Ok(())
}

pub async fn init(dir: PathBuf, format: DocumentFormat, force: bool) -> color_eyre::Result<()> {
    let path = generate_config(InitOptions {
        target_dir: dir,
        format,
        force,
    })
    .await?;

    println!("{} {}", "created".green().bold(), path.display());
    Ok(())
}
