//! Common test utilities shared by the integration tests.
//!
//! This module provides:
//! - Test fixtures (sample settings documents, project directories)
//! - Custom assertions on load results

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
