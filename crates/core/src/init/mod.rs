//! Initialization module for creating starter settings files.
//!
//! This module writes a `stylekit.config.<ext>` file into a project directory
//! from templates embedded in the binary. A starter exists for every
//! supported [`DocumentFormat`](crate::config::DocumentFormat).
//!
//! # Example
//!
//! ```no_run
//! use sk_core::config::DocumentFormat;
//! use sk_core::init::{generate_config, InitOptions};
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = InitOptions {
//!     target_dir: PathBuf::from("."),
//!     format: DocumentFormat::Yaml,
//!     force: false,
//! };
//!
//! let path = generate_config(options).await?;
//! println!("Wrote {}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;
pub mod templates;

// Re-export commonly used types for convenience
pub use error::{InitError, InitResult};
pub use generator::{generate_config, InitOptions, CONFIG_FILE_STEM};
pub use templates::{get_template, template_for};
