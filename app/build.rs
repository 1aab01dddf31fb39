//! Validates the site configuration and embeds it for the browser build.
//!
//! Reads `LEAFTURN_CONFIG` (default `../leafturn.toml`) with the same
//! environment overrides as `leafturn check`, fails the build on invalid
//! configuration, and reports warnings as cargo warnings.

use std::{env, fs, path::PathBuf};

use leafturn_core::{BASE_PATH_ENV, Config, NavigationSettings};

fn main() {
    println!("cargo:rerun-if-env-changed=LEAFTURN_CONFIG");
    println!("cargo:rerun-if-env-changed={BASE_PATH_ENV}");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("set by cargo"));
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("set by cargo"));
    let config_path = env::var_os("LEAFTURN_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| manifest_dir.join("../leafturn.toml"));
    println!("cargo:rerun-if-changed={}", config_path.display());

    let embedded = if config_path.exists() {
        let config = match Config::load_with_env(&config_path) {
            Ok(config) => config,
            Err(e) => panic!("Invalid site configuration {}: {e}", config_path.display()),
        };
        for warning in config.warnings() {
            println!("cargo:warning={warning}");
        }
        toml::to_string(&config).expect("serialize validated configuration")
    } else {
        println!(
            "cargo:warning={} not found, using default navigation settings",
            config_path.display()
        );
        let settings = NavigationSettings {
            base_path: env::var(BASE_PATH_ENV).unwrap_or_else(|_| "/".to_string()),
            ..NavigationSettings::default()
        };
        for warning in settings.warnings() {
            println!("cargo:warning={warning}");
        }
        String::new()
    };

    fs::write(out_dir.join("leafturn.toml"), embedded).expect("write embedded configuration");
}
