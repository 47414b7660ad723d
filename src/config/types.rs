//! Config types for shellansi.
//!
//! Defines structures for parsing and representing configuration files.

use serde::Deserialize;

use crate::cursor::PwdProtocol;
use crate::formatter::AnsiFormatter;
use crate::shell::ShellKind;

/// Field names accepted in a config file, for typo suggestions.
pub const KNOWN_FIELDS: &[&str] = &["shell", "pwd_protocol", "host"];

/// Raw config file structure (used for parsing).
///
/// This struct directly mirrors the YAML config file structure.
/// Unknown fields are rejected with an error.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    /// Shell identifier; unrecognized names mean plain output.
    #[serde(default)]
    pub shell: Option<ShellKind>,
    /// `osc7` or `osc99`.
    #[serde(default)]
    pub pwd_protocol: Option<String>,
    /// Host name used in OSC 7 working-directory reports.
    #[serde(default)]
    pub host: Option<String>,
}

/// Resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub shell: Option<ShellKind>,
    pub pwd_protocol: Option<PwdProtocol>,
    pub host: Option<String>,
}

impl Config {
    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: Config) -> Config {
        Config {
            shell: other.shell.or(self.shell),
            pwd_protocol: other.pwd_protocol.or(self.pwd_protocol),
            host: other.host.or(self.host),
        }
    }

    pub fn shell_or_default(&self) -> ShellKind {
        self.shell.unwrap_or_default()
    }

    pub fn pwd_protocol_or_default(&self) -> PwdProtocol {
        self.pwd_protocol.unwrap_or_default()
    }

    pub fn formatter(&self) -> AnsiFormatter {
        AnsiFormatter::new(self.shell_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_overlay() {
        let global = Config {
            shell: Some(ShellKind::Bash),
            pwd_protocol: Some(PwdProtocol::Osc99),
            host: Some("global".to_string()),
        };
        let project = Config {
            shell: Some(ShellKind::Zsh),
            pwd_protocol: None,
            host: None,
        };
        let merged = global.merge(project);
        assert_eq!(merged.shell, Some(ShellKind::Zsh));
        assert_eq!(merged.pwd_protocol, Some(PwdProtocol::Osc99));
        assert_eq!(merged.host.as_deref(), Some("global"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.shell_or_default(), ShellKind::Plain);
        assert_eq!(config.pwd_protocol_or_default(), PwdProtocol::Osc99);
        assert_eq!(config.formatter().shell(), ShellKind::Plain);
    }
}
