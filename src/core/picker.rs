// ApkSleuth - core/picker.rs
//
// File selection: native dialog plus filename validation.
//
// The dialog requests *any* file type rather than filtering on the
// package-archive MIME type, which several platforms filter unreliably, so
// the allow-list is enforced on the returned filename instead.

use crate::core::model::SelectedFile;
use crate::util::constants;
use std::path::Path;

/// Outcome of a single pick interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// A valid `.apk` was chosen.
    Selected(SelectedFile),

    /// The user dismissed the dialog. Expected interactive behaviour, not a
    /// fault: handled silently.
    Cancelled,

    /// A file was chosen but its name fails the suffix allow-list.
    /// Surfaced as a dismissible notice; the previous selection is kept.
    Invalid { name: String },
}

/// Returns true if `name` ends with `.apk`, compared case-insensitively.
pub fn is_apk_filename(name: &str) -> bool {
    let suffix = constants::APK_EXTENSION;
    name.len() > suffix.len()
        && name
            .get(name.len() - suffix.len()..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix))
}

/// Open the native file dialog and validate the choice.
///
/// Blocks until the dialog closes. Callers on the UI thread invoke this from
/// the update loop the same way directory selection works elsewhere in the
/// app; egui tolerates the modal pause.
pub fn pick_file() -> PickOutcome {
    match rfd::FileDialog::new().pick_file() {
        Some(path) => validate_pick(&path),
        None => {
            tracing::debug!("File pick cancelled");
            PickOutcome::Cancelled
        }
    }
}

/// Validate a chosen path against the filename allow-list.
///
/// Split out from `pick_file` so the policy is testable without a dialog,
/// and so CLI pre-selection goes through the identical rule.
pub fn validate_pick(path: &Path) -> PickOutcome {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();

    if is_apk_filename(&name) {
        tracing::info!(file = %name, "File selected");
        PickOutcome::Selected(SelectedFile::from_path(path))
    } else {
        tracing::info!(file = %name, "Selection rejected: not an .apk");
        PickOutcome::Invalid { name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_accepts_lowercase_extension() {
        assert!(is_apk_filename("app-release.apk"));
    }

    #[test]
    fn test_accepts_mixed_case_extension() {
        assert!(is_apk_filename("App-Release.APK"));
        assert!(is_apk_filename("app.Apk"));
    }

    #[test]
    fn test_rejects_other_extensions() {
        assert!(!is_apk_filename("app.zip"));
        assert!(!is_apk_filename("app.apks"));
        assert!(!is_apk_filename("app.apk.txt"));
        assert!(!is_apk_filename("report.pdf"));
    }

    #[test]
    fn test_rejects_bare_or_empty_names() {
        assert!(!is_apk_filename(""));
        assert!(!is_apk_filename(".apk")); // no stem, just the suffix
        assert!(!is_apk_filename("apk"));
    }

    #[test]
    fn test_validate_pick_builds_descriptor_for_valid_path() {
        let outcome = validate_pick(&PathBuf::from("/data/sample.apk"));
        match outcome {
            PickOutcome::Selected(file) => {
                assert_eq!(file.name, "sample.apk");
            }
            other => panic!("expected Selected, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_pick_reports_invalid_name() {
        let outcome = validate_pick(&PathBuf::from("/data/sample.ipa"));
        assert_eq!(
            outcome,
            PickOutcome::Invalid {
                name: "sample.ipa".to_string()
            }
        );
    }
}
