//! Config validate and show commands for shellansi.
//!
//! Provides config introspection and validation for shell startup scripts and debugging.

use colored::Colorize;
use shellansi::config::{self, Config};
use std::path::{Path, PathBuf};

/// Get the effective config path (closest wins: explicit > project > global).
fn effective_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let discovery = config::discover();
    discovery.project_config.or(discovery.global_config)
}

/// Validate the effective config file.
///
/// Follows Unix conventions:
/// - Exit 0 with no output on success (quiet success)
/// - Exit 1 with error message to stderr on failure
pub fn validate(explicit: Option<&Path>) -> Result<(), i32> {
    let config_path = match effective_config_path(explicit) {
        Some(path) => path,
        None => {
            eprintln!("error: No config found to validate");
            return Err(1);
        }
    };

    match config::load_single_file(&config_path) {
        Ok(_) => Ok(()),
        Err(e) => {
            // Use existing Cargo-style error formatting from ConfigError
            eprintln!("{}", e);
            Err(1)
        }
    }
}

/// Show the effective configuration.
///
/// Respects NO_COLOR environment variable via the colored crate.
pub fn show(explicit: Option<&Path>) -> Result<(), i32> {
    match effective_config_path(explicit) {
        Some(path) => match config::load_single_file(&path) {
            Ok(cfg) => {
                println!("Using: {}", path.display().to_string().dimmed());
                println!();
                show_config(&cfg);
                Ok(())
            }
            Err(e) => {
                eprintln!("{}", e);
                Err(1)
            }
        },
        None => {
            println!("{}", "No config found. Using defaults.".dimmed());
            println!();
            show_config(&Config::default());
            Ok(())
        }
    }
}

fn show_field(name: &str, value: Option<String>) {
    match value {
        Some(v) => println!("{}: {}", name.cyan(), v.green()),
        None => println!("{}: {}", name.cyan(), "(not set)".dimmed()),
    }
}

/// Display the config contents with colored output.
fn show_config(cfg: &Config) {
    show_field("shell", cfg.shell.map(|s| s.to_string()));
    show_field("pwd_protocol", cfg.pwd_protocol.map(|p| p.name().to_string()));
    show_field("host", cfg.host.clone());
}
