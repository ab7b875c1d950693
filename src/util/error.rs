// ApkSleuth - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; every variant keeps its cause so
// diagnostic logging can show the full chain.

use std::fmt;
use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Submission errors
// ---------------------------------------------------------------------------

/// Errors produced by a single submission attempt.
///
/// None of these are fatal: the controller moves to `Failed` with the file
/// retained so the user can retry without re-picking. There are no automatic
/// retries; analysis is expensive and non-idempotent from the service's
/// perspective.
#[derive(Debug)]
pub enum SubmitError {
    /// The selected file could not be opened or read from its locator.
    /// Happens when the file was moved or deleted between pick and submit.
    File { path: PathBuf, source: io::Error },

    /// Transport-level failure: connection refused, DNS, broken pipe, etc.
    Network { message: String },

    /// The service answered with a non-2xx status.
    Server { status: u16 },

    /// The service answered 2xx but the body was not a valid analysis result.
    MalformedResponse { message: String },
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File { path, source } => {
                write!(f, "Cannot read '{}': {source}", path.display())
            }
            Self::Network { message } => write!(f, "Network error: {message}"),
            Self::Server { status } => {
                write!(f, "Analysis service returned HTTP {status}")
            }
            Self::MalformedResponse { message } => {
                write!(f, "Unexpected response from analysis service: {message}")
            }
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::File { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading and validation.
///
/// Configuration problems are never fatal: the loader reports them as
/// warnings and falls back to defaults, but the variants exist so callers
/// that validate eagerly (e.g. the --endpoint CLI override) get a typed
/// result.
#[derive(Debug)]
pub enum ConfigError {
    /// An endpoint value is not an http(s) URL.
    InvalidEndpoint { value: String },

    /// config.toml could not be parsed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// config.toml exists but could not be read.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoint { value } => {
                write!(
                    f,
                    "Endpoint '{value}' is not valid: expected an http:// or https:// URL"
                )
            }
            Self::TomlParse { path, source } => {
                write!(f, "Failed to parse '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Cannot read '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidEndpoint { .. } => None,
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_display_carries_status() {
        let err = SubmitError::Server { status: 503 };
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_file_error_preserves_source() {
        use std::error::Error;
        let err = SubmitError::File {
            path: PathBuf::from("gone.apk"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("gone.apk"));
    }
}
