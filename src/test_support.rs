//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::path::PathBuf;

use crate::core::config::ResolvedConfig;
use crate::core::schema::default_fields;
use crate::core::state::App;

/// A resolved config pointing at in-repo defaults; tests that touch disk
/// should override `schema_path` with a tempdir path.
pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        schema_path: PathBuf::from("form_schema.json"),
        sheet_name: "Records".to_string(),
        column_width: 20.0,
    }
}

/// Creates a test App with the default four-field schema.
pub fn test_app() -> App {
    App::new(default_fields(), &test_config())
}
