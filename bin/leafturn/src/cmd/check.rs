//! Check command - validate configuration

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use leafturn_core::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Load and validate the configuration without printing anything.
///
/// Sees the same overrides as the browser build, including
/// `LEAFTURN_BASE_PATH`. Warnings are collected here rather than logged, so
/// `run` reports each one once.
pub fn validate(config_path: &Path) -> ValidationResult {
    let mut result = ValidationResult::default();

    match Config::load_with_env(config_path) {
        Ok(config) => result.warnings = config.warnings(),
        Err(e) => result.add_error(format!("Configuration error: {e}")),
    }

    result
}

/// Run the check command.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration");

    if !config_path.exists() {
        bail!("Configuration file not found: {}", config_path.display());
    }

    println!("Checking configuration...");
    let result = validate(config_path);

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}
