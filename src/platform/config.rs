// ApkSleuth - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for ApkSleuth configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/apksleuth/ or %APPDATA%\ApkSleuth\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined, reporting the fallback as a warning. Runs before logging
    /// is initialised, so nothing here emits tracing events; the caller logs
    /// the outcome once the subscriber is installed.
    pub fn resolve() -> (Self, Option<String>) {
        match ProjectDirs::from("", "", constants::APP_ID) {
            Some(proj_dirs) => (
                Self {
                    config_dir: proj_dirs.config_dir().to_path_buf(),
                },
                None,
            ),
            None => (
                Self {
                    config_dir: PathBuf::from("."),
                },
                Some(
                    "Could not determine platform directories. Using the current directory."
                        .to_string(),
                ),
            ),
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[analysis]` section.
    pub analysis: AnalysisSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[analysis]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct AnalysisSection {
    /// Analysis service endpoint URL.
    pub endpoint: Option<String>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults;
/// a broken config file never prevents startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Analysis service endpoint.
    pub endpoint: String,

    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,

    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: constants::DEFAULT_ENDPOINT.to_string(),
            dark_mode: true,
            log_level: None,
        }
    }
}

/// Returns true if `value` looks like a usable analysis endpoint.
pub fn is_valid_endpoint(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Validate an endpoint value, for callers that want a typed error
/// (the CLI override fails fast; config.toml values degrade to warnings).
pub fn validate_endpoint(value: &str) -> Result<(), ConfigError> {
    if is_valid_endpoint(value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidEndpoint {
            value: value.to_string(),
        })
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unparseable, returns defaults with an error warning --
/// the application still starts but the user is informed.
///
/// Runs before logging is initialised: every problem surfaces through the
/// returned warnings, never through tracing events that would be dropped.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(source) => {
            let err = ConfigError::Io {
                path: config_path.clone(),
                source,
            };
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(source) => {
            let err = ConfigError::TomlParse {
                path: config_path.clone(),
                source,
            };
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    // Validate each field, accumulating all warnings rather than stopping
    // at the first problem.
    let mut config = AppConfig::default();

    // -- Analysis: endpoint --
    if let Some(ref endpoint) = raw.analysis.endpoint {
        match validate_endpoint(endpoint) {
            Ok(()) => config.endpoint = endpoint.clone(),
            Err(err) => {
                warnings.push(format!(
                    "[analysis] {err}. Using default ({}).",
                    constants::DEFAULT_ENDPOINT,
                ));
            }
        }
    }

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => {
                warnings.push(format!(
                    "[ui] theme = \"{other}\" is not recognised. Expected \"dark\" or \"light\". Using default (dark).",
                ));
            }
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Counts tracing events; everything else is a no-op.
    struct EventCounter(Arc<AtomicUsize>);

    impl tracing::Subscriber for EventCounter {
        fn enabled(&self, _: &tracing::Metadata<'_>) -> bool {
            true
        }
        fn new_span(&self, _: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            tracing::span::Id::from_u64(1)
        }
        fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}
        fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}
        fn event(&self, _: &tracing::Event<'_>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
        fn enter(&self, _: &tracing::span::Id) {}
        fn exit(&self, _: &tracing::span::Id) {}
    }

    #[test]
    fn test_endpoint_validation() {
        assert!(is_valid_endpoint("http://127.0.0.1:8000/analyze_full/"));
        assert!(is_valid_endpoint("https://scan.example.com/analyze"));
        assert!(!is_valid_endpoint("ftp://example.com"));
        assert!(!is_valid_endpoint("scan.example.com"));
        assert!(!is_valid_endpoint(""));
    }

    #[test]
    fn test_missing_config_uses_defaults_without_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config.endpoint, constants::DEFAULT_ENDPOINT);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_config_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(constants::CONFIG_FILE_NAME),
            "[analysis]\nendpoint = \"https://scan.example.com/analyze\"\n\
             [ui]\ntheme = \"light\"\n\
             [logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.endpoint, "https://scan.example.com/analyze");
        assert!(!config.dark_mode);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_invalid_endpoint_warns_and_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(constants::CONFIG_FILE_NAME),
            "[analysis]\nendpoint = \"not-a-url\"\n",
        )
        .unwrap();

        let (config, warnings) = load_config(dir.path());
        assert_eq!(config.endpoint, constants::DEFAULT_ENDPOINT);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("not-a-url"));
    }

    /// Config loading runs before the tracing subscriber is installed, so a
    /// problem must surface through the returned warnings. An event emitted
    /// here would be silently dropped at startup.
    #[test]
    fn test_load_config_reports_problems_without_tracing_events() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(constants::CONFIG_FILE_NAME),
            "[analysis]\nendpoint = \"not-a-url\"\n",
        )
        .unwrap();

        let events = Arc::new(AtomicUsize::new(0));
        let (_, warnings) =
            tracing::subscriber::with_default(EventCounter(Arc::clone(&events)), || {
                load_config(dir.path())
            });

        assert_eq!(warnings.len(), 1);
        assert_eq!(events.load(Ordering::SeqCst), 0, "config loading must not log");
    }

    #[test]
    fn test_unparseable_config_warns_and_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(constants::CONFIG_FILE_NAME), "[analysis\n").unwrap();

        let (config, warnings) = load_config(dir.path());
        assert_eq!(config.endpoint, constants::DEFAULT_ENDPOINT);
        assert_eq!(warnings.len(), 1);
    }
}
