//! # sk-core
//!
//! Settings loading and validation for stylekit.
//!
//! This crate provides:
//! - Parsing of settings documents in YAML, JSON or TOML
//! - Structural validation and defaulting into an immutable [`Settings`]
//! - Rendering validated settings back to any supported format
//! - Starter settings files for new projects
//!
//! ## Modules
//!
//! - [`config`]: Loader, schema validation, formats and errors
//! - [`init`]: Starter file generation from embedded templates
//!
//! [`Settings`]: sk_protocol::Settings

pub mod config;
pub mod init;

pub use config::{load_config_file, render_settings, ConfigLoader};
