//! Config loading for shellansi.
//!
//! Loads and validates YAML config files.

use std::fs;
use std::path::Path;

use crate::config::discovery::DiscoveryResult;
use crate::config::error::{suggest, ConfigError};
use crate::config::types::{Config, RawConfig, KNOWN_FIELDS};
use crate::cursor::PwdProtocol;

/// Load and parse a YAML config file.
///
/// Returns the parsed RawConfig or a ConfigError with location and suggestions.
fn load_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    if content.lines().all(|l| {
        let l = l.trim();
        l.is_empty() || l.starts_with('#')
    }) {
        return Ok(RawConfig::default());
    }

    serde_saphyr::from_str(&content).map_err(|e| {
        ConfigError::from_deserialize_error(path.to_path_buf(), e, KNOWN_FIELDS)
    })
}

/// Parse a `pwd_protocol` value strictly; typos are reported, not defaulted.
fn validate_pwd_protocol(path: &Path, value: &str) -> Result<PwdProtocol, ConfigError> {
    let normalized = value.trim().to_ascii_lowercase();
    if PwdProtocol::NAMES.contains(&normalized.as_str()) {
        return Ok(PwdProtocol::from_name(&normalized));
    }

    let mut message = format!(
        "unknown pwd_protocol '{}'. Available protocols: {}",
        value,
        PwdProtocol::NAMES.join(", ")
    );
    if let Some(s) = suggest(&normalized, &PwdProtocol::NAMES) {
        message.push_str(&format!(". Did you mean '{}'?", s));
    }
    Err(ConfigError::Validation {
        path: path.to_path_buf(),
        message,
    })
}

fn validate(path: &Path, raw: RawConfig) -> Result<Config, ConfigError> {
    let pwd_protocol = raw
        .pwd_protocol
        .as_deref()
        .map(|value| validate_pwd_protocol(path, value))
        .transpose()?;

    Ok(Config {
        shell: raw.shell,
        pwd_protocol,
        host: raw.host.filter(|h| !h.trim().is_empty()),
    })
}

/// Load config from a single file.
pub fn load_single_file(path: &Path) -> Result<Config, ConfigError> {
    let raw = load_file(path)?;
    validate(path, raw)
}

/// Load config from discovered config files.
///
/// The global config is loaded first; fields set in the project config
/// override it. Returns an empty Config if no config files exist.
pub fn load(discovery: &DiscoveryResult) -> Result<Config, ConfigError> {
    let mut config = Config::default();

    if let Some(global_path) = &discovery.global_config {
        config = config.merge(load_single_file(global_path)?);
    }

    if let Some(project_path) = &discovery.project_config {
        config = config.merge(load_single_file(project_path)?);
    }

    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}
