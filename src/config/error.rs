//! Config error types for shellansi.
//!
//! Provides rich error messages with file locations and typo suggestions.

use regex::Regex;
use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;

use strsim::jaro_winkler;

const SIMILARITY_THRESHOLD: f64 = 0.8;

static UNKNOWN_FIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"unknown field `(?P<field>[^`]+)`").expect("unknown field regex must compile")
});

static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"line (?P<line>\d+)(?:,)? column (?P<column>\d+)")
        .expect("location regex must compile")
});

/// Error loading or parsing a config file.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading the config file.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parse error.
    Parse {
        path: PathBuf,
        message: String,
        line: Option<usize>,
        column: Option<usize>,
        suggestion: Option<String>,
    },

    /// Validation error (semantic errors after parsing).
    Validation { path: PathBuf, message: String },
}

/// Closest entry of `known` to `input`, if any is similar enough.
pub fn suggest(input: &str, known: &[&str]) -> Option<String> {
    known
        .iter()
        .filter(|&&candidate| jaro_winkler(input, candidate) >= SIMILARITY_THRESHOLD)
        .max_by(|a, b| {
            jaro_winkler(input, a)
                .partial_cmp(&jaro_winkler(input, b))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|&s| s.to_string())
}

impl ConfigError {
    /// Build a parse error from a deserializer message, pulling out the
    /// location and suggesting a known field for unknown-field errors.
    pub fn from_deserialize_error(
        path: PathBuf,
        error: impl fmt::Display,
        known_fields: &[&str],
    ) -> Self {
        let message = error.to_string();
        let (line, column) = match LOCATION_RE.captures(&message) {
            Some(caps) => (
                caps["line"].parse().ok(),
                caps["column"].parse().ok(),
            ),
            None => (None, None),
        };
        let suggestion = UNKNOWN_FIELD_RE
            .captures(&message)
            .and_then(|caps| suggest(&caps["field"], known_fields));
        ConfigError::Parse {
            path,
            message,
            line,
            column,
            suggestion,
        }
    }

    /// Format error in Cargo-style format.
    pub fn format_cargo_style(&self) -> String {
        match self {
            ConfigError::Io { path, source } => {
                format!(
                    "error: cannot read config file\n  --> {}\n  |\n  = {}\n",
                    path.display(),
                    source
                )
            }
            ConfigError::Parse {
                path,
                message,
                line,
                column,
                suggestion,
            } => {
                let location = match (line, column) {
                    (Some(l), Some(c)) => format!("{}:{}:{}", path.display(), l, c),
                    (Some(l), None) => format!("{}:{}", path.display(), l),
                    _ => format!("{}", path.display()),
                };
                let mut output = format!("error: {}\n  --> {}\n  |\n", message, location);
                if let Some(suggestion) = suggestion {
                    output.push_str(&format!("  = help: did you mean `{}`?\n", suggestion));
                }
                output
            }
            ConfigError::Validation { path, message } => {
                format!("error: {}\n  --> {}\n  |\n", message, path.display())
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_cargo_style())
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
