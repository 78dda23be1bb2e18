//! Custom assertion helpers for settings tests.

use sk_core::config::{ConfigError, ConfigResult, LoadedConfig, SchemaError};

/// Unwrap the schema violation from a failed load, panicking otherwise.
#[allow(dead_code)]
pub fn expect_schema_error(result: ConfigResult<LoadedConfig>) -> SchemaError {
    match result {
        Err(ConfigError::Schema(err)) => err,
        Err(other) => panic!("Expected a schema error, got: {other}"),
        Ok(loaded) => panic!("Expected a schema error, loaded: {loaded:?}"),
    }
}

/// Assert that a load produced exactly the given unknown-key warnings.
#[allow(dead_code)]
pub fn assert_unknown_keys(loaded: &LoadedConfig, expected: &[&str]) {
    let paths: Vec<String> = loaded.warnings.iter().map(ToString::to_string).collect();
    let expected: Vec<String> = expected
        .iter()
        .map(|path| format!("unrecognized key `{path}` was ignored"))
        .collect();
    assert_eq!(paths, expected, "Unexpected warnings");
}
