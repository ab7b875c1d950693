// ApkSleuth - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::error::SubmitError;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Selected file (output of the picker)
// =============================================================================

/// Descriptor for a file the user has chosen for analysis.
///
/// Only constructed after the filename has passed the `.apk` suffix check,
/// so holding a `SelectedFile` implies a valid selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Opaque locator for the file's bytes. On the desktop this is the
    /// filesystem path; nothing outside the submission layer interprets it.
    pub uri: String,

    /// Original filename, sent to the service as the part filename.
    pub name: String,

    /// MIME hint carried with the selection. Always the fixed package-archive
    /// type; the service ignores OS-level guesses.
    pub mime_hint: String,
}

impl SelectedFile {
    /// Build a descriptor from a picked path. The caller is responsible for
    /// validating the filename suffix first (see `core::picker`).
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unnamed.apk")
            .to_string();
        Self {
            uri: path.to_string_lossy().into_owned(),
            name,
            mime_hint: crate::util::constants::APK_MIME_TYPE.to_string(),
        }
    }
}

// =============================================================================
// Analysis result (parsed service response)
// =============================================================================

/// A completed analysis verdict as returned by the service.
///
/// Created only from a successful (2xx, parseable) response; immutable once
/// constructed. The stage logs are optional in the wire format and default to
/// empty vectors so the renderer never has to handle an absent log.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResult {
    /// Outcome of the static analysis stage (e.g. "success", "timeout").
    pub static_status: String,

    /// Outcome of the dynamic analysis stage.
    pub dynamic_status: String,

    /// Classifier verdict label (e.g. "malicious", "benign").
    pub classification: String,

    /// Classifier probability, expected in [0,1]. Deliberately NOT clamped:
    /// an out-of-range value passes through to the display verbatim.
    pub malicious_probability: f64,

    /// Ordered static-stage log lines. Absent in the response => empty.
    #[serde(default)]
    pub static_stage_log: Vec<String>,

    /// Ordered dynamic-stage log lines. Absent in the response => empty.
    #[serde(default)]
    pub dynamic_stage_log: Vec<String>,
}

// =============================================================================
// Submission progress (for UI updates)
// =============================================================================

/// Progress messages sent from the submission thread to the UI thread.
///
/// Every message carries the `SelectedFile` the submission was launched
/// against. The controller compares it with the current selection and
/// discards messages whose file no longer matches, so a stale response can
/// never overwrite a newer state.
#[derive(Debug)]
pub enum SubmitProgress {
    /// The upload has started.
    Started { file: SelectedFile },

    /// The service returned a parseable verdict.
    Completed {
        file: SelectedFile,
        result: AnalysisResult,
    },

    /// The submission failed (transport, HTTP status, or malformed body).
    Failed {
        file: SelectedFile,
        error: SubmitError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_selected_file_from_path_extracts_name() {
        let file = SelectedFile::from_path(&PathBuf::from("/tmp/downloads/app-release.apk"));
        assert_eq!(file.name, "app-release.apk");
        assert!(file.uri.ends_with("app-release.apk"));
        assert_eq!(file.mime_hint, "application/vnd.android.package-archive");
    }

    #[test]
    fn test_analysis_result_defaults_missing_logs_to_empty() {
        let json = r#"{
            "static_status": "success",
            "dynamic_status": "success",
            "classification": "benign",
            "malicious_probability": 0.1
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(result.static_stage_log.is_empty());
        assert!(result.dynamic_stage_log.is_empty());
    }

    #[test]
    fn test_analysis_result_parses_full_response() {
        let json = r#"{
            "static_status": "success",
            "dynamic_status": "timeout",
            "classification": "malicious",
            "malicious_probability": 0.87,
            "static_stage_log": ["Upload successful, scanning started.", "Report ready in 30s"],
            "dynamic_stage_log": ["Emulator boot failed"]
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.static_stage_log.len(), 2);
        assert_eq!(result.dynamic_stage_log.len(), 1);
        assert_eq!(result.classification, "malicious");
    }

    #[test]
    fn test_analysis_result_rejects_missing_required_field() {
        // classification absent: the response shape is wrong, not defaulted.
        let json = r#"{
            "static_status": "success",
            "dynamic_status": "success",
            "malicious_probability": 0.1
        }"#;
        assert!(serde_json::from_str::<AnalysisResult>(json).is_err());
    }

    #[test]
    fn test_analysis_result_ignores_extra_fields() {
        // The real service also returns filename/bucket_path; tolerate them.
        let json = r#"{
            "filename": "app.apk",
            "static_status": "success",
            "dynamic_status": "success",
            "classification": "benign",
            "malicious_probability": 0.02,
            "bucket_path": "combined-analysis/app/x.json"
        }"#;
        assert!(serde_json::from_str::<AnalysisResult>(json).is_ok());
    }
}
