//! Settings loading and validation.
//!
//! A settings document is parsed into a structural tree, checked against the
//! known schema and turned into a [`Settings`](sk_protocol::Settings) value.
//! Unrecognized keys are collected as warnings instead of failing the load.

pub mod error;
pub mod format;
pub mod loader;
pub mod models;
mod schema;

pub use error::{ConfigError, ConfigResult, SchemaError};
pub use format::DocumentFormat;
pub use loader::{load_config_file, render_settings, ConfigLoader};
pub use models::{ConfigWarning, LoadedConfig};
