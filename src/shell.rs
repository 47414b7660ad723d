//! Target shell identification.
//!
//! The shell decides which zero-width markers wrap every escape sequence and
//! whether hyperlink text needs extra escaping before it reaches the shell.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// Interactive shell the output is produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShellKind {
    Zsh,
    Bash,
    /// Uses the plain escape table; only changes hyperlink text escaping.
    Fish,
    /// No zero-width markers at all.
    #[default]
    Plain,
}

impl ShellKind {
    /// Map a shell identifier to a kind. Case-insensitive; anything that is not
    /// zsh, bash or fish falls back to `Plain`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "zsh" => ShellKind::Zsh,
            "bash" => ShellKind::Bash,
            "fish" => ShellKind::Fish,
            "plain" | "" => ShellKind::Plain,
            other => {
                tracing::debug!(shell = other, "unrecognized shell, using plain escapes");
                ShellKind::Plain
            }
        }
    }

    /// Canonical lowercase identifier.
    pub fn name(&self) -> &'static str {
        match self {
            ShellKind::Zsh => "zsh",
            ShellKind::Bash => "bash",
            ShellKind::Fish => "fish",
            ShellKind::Plain => "plain",
        }
    }

    /// Whether hyperlink text must be escaped for the shell's own string parser.
    pub fn escapes_link_text(&self) -> bool {
        matches!(self, ShellKind::Fish)
    }
}

impl fmt::Display for ShellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShellKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ShellKind::from_name(s))
    }
}

impl<'de> Deserialize<'de> for ShellKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(ShellKind::from_name(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_known_shells() {
        assert_eq!(ShellKind::from_name("zsh"), ShellKind::Zsh);
        assert_eq!(ShellKind::from_name("bash"), ShellKind::Bash);
        assert_eq!(ShellKind::from_name("fish"), ShellKind::Fish);
        assert_eq!(ShellKind::from_name("plain"), ShellKind::Plain);
    }

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(ShellKind::from_name("ZSH"), ShellKind::Zsh);
        assert_eq!(ShellKind::from_name(" Bash "), ShellKind::Bash);
    }

    #[test]
    fn test_unknown_shell_falls_back_to_plain() {
        assert_eq!(ShellKind::from_name("pwsh"), ShellKind::Plain);
        assert_eq!(ShellKind::from_name("nu"), ShellKind::Plain);
        assert_eq!(ShellKind::from_name(""), ShellKind::Plain);
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for kind in [
            ShellKind::Zsh,
            ShellKind::Bash,
            ShellKind::Fish,
            ShellKind::Plain,
        ] {
            let parsed: ShellKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_only_fish_escapes_link_text() {
        assert!(ShellKind::Fish.escapes_link_text());
        assert!(!ShellKind::Zsh.escapes_link_text());
        assert!(!ShellKind::Bash.escapes_link_text());
        assert!(!ShellKind::Plain.escapes_link_text());
    }
}
