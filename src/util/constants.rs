// ApkSleuth - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "ApkSleuth";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "ApkSleuth";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Submission
// =============================================================================

/// Default analysis endpoint when neither --endpoint nor config.toml sets one.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/analyze_full/";

/// Name of the multipart form field carrying the package bytes.
/// Fixed by the analysis service's API contract.
pub const MULTIPART_FIELD_NAME: &str = "file";

/// Content type sent for the package part. Always this value regardless of
/// what the OS guesses for the file.
pub const APK_MIME_TYPE: &str = "application/vnd.android.package-archive";

/// Filename suffix a selection must carry (compared case-insensitively).
pub const APK_EXTENSION: &str = ".apk";

// =============================================================================
// Rendering
// =============================================================================

/// Fixed sentence shown in a stage-log panel whose log is empty.
///
/// User-visible contract: an absent or empty log must never render as a blank
/// panel, so both panels always have at least this line.
pub const NO_LOGS_PLACEHOLDER: &str = "No log entries were reported for this stage.";

/// Number of decimal places in the malicious-probability percentage.
pub const PROBABILITY_DECIMALS: usize = 1;

// =============================================================================
// Logging defaults
// =============================================================================

/// Default log level when RUST_LOG, --debug, and config.toml are all absent.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Name of the optional configuration file in the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
