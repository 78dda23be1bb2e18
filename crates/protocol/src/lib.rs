//! # sk-protocol
//!
//! Shared data model for stylekit.
//!
//! This crate defines the structures that describe a utility-stylesheet
//! settings file:
//! - The normalized, validated [`Settings`] value handed to build tools
//! - The serializable document shape ([`SettingsDocument`]) used when writing
//!   settings back to YAML, JSON or TOML
//!
//! ## Modules
//!
//! - [`settings_models`]: `Settings`, `DarkMode`, `Plugin` and `ColorValue`
//! - [`document_models`]: The on-disk document shape with nested `theme` and
//!   `variants` sections
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde and ts-rs
//! - TypeScript generation: Document types derive `TS` so the JavaScript
//!   build tool can share the same definitions
//! - Independent compilation: No dependencies on other stylekit crates

pub mod document_models;
pub mod settings_models;

// Re-export all public types for convenience
pub use document_models::*;
pub use settings_models::*;
