// ApkSleuth - app/state.rs
//
// Application state management. The scan lifecycle is a single tagged enum
// owned by `AppState` rather than a set of independent flags (`uploading`,
// `selected_file`, `result`) that can drift out of sync. All transitions run
// sequentially on the UI thread; each transition replaces the state value.
//
// Transition table:
//   any state     --pick(valid)--> FileSelected      (clears any prior result)
//   FileSelected  --start-------> Submitting
//   Failed        --start-------> Submitting         (retry, same file)
//   Submitting    --start-------> Submitting         (no-op: guard)
//   Submitting    --success-----> Completed          (only if the tag matches)
//   Submitting    --failure-----> Failed(file, err)  (only if the tag matches)
//
// Responses whose tag no longer matches the current selection are stale
// (superseded by a newer pick) and are discarded.

use crate::core::model::{AnalysisResult, SelectedFile};
use crate::core::render::{self, ResultView};
use crate::util::error::SubmitError;

/// The scan lifecycle. Exactly one instance is live at a time.
#[derive(Debug, Default)]
pub enum ScanState {
    /// No file chosen yet.
    #[default]
    Idle,

    /// A valid file is chosen and ready to submit.
    FileSelected(SelectedFile),

    /// A submission for this file is in flight.
    Submitting(SelectedFile),

    /// The most recent submission produced a verdict.
    Completed(AnalysisResult),

    /// The most recent submission failed. The file is retained so the user
    /// can retry without re-picking.
    Failed(SelectedFile, SubmitError),
}

impl ScanState {
    /// The file a submission response would have to match to be applied.
    fn in_flight_file(&self) -> Option<&SelectedFile> {
        match self {
            Self::Submitting(file) => Some(file),
            _ => None,
        }
    }
}

/// Top-level application state: the scan machine plus UI-facing fields and
/// the request flags panels use to raise intents.
#[derive(Debug)]
pub struct AppState {
    /// Current scan lifecycle state.
    pub scan_state: ScanState,

    /// Status message for the status bar.
    pub status_message: String,

    /// Transient dismissible notice (invalid pick, submission failure).
    pub notice: Option<String>,

    /// Analysis endpoint submissions go to.
    pub endpoint: String,

    /// Set by a panel to request the file dialog; executed by the gui loop.
    pub request_pick: bool,

    /// Set by a panel to request a submission; executed by the gui loop.
    pub request_start: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state pointing at the given endpoint.
    pub fn new(endpoint: String, debug_mode: bool) -> Self {
        Self {
            scan_state: ScanState::Idle,
            status_message: "Ready. Select an APK to begin.".to_string(),
            notice: None,
            endpoint,
            request_pick: false,
            request_start: false,
            debug_mode,
        }
    }

    /// Apply a valid pick. Accepted from every state: picking a new file
    /// always replaces the previous selection and clears any prior result,
    /// and picking during a submission supersedes it (the in-flight response
    /// will fail the tag check and be discarded).
    pub fn select_file(&mut self, file: SelectedFile) {
        tracing::info!(file = %file.name, "Selection updated");
        self.status_message = format!("Selected {}.", file.name);
        self.notice = None;
        self.scan_state = ScanState::FileSelected(file);
    }

    /// Record an invalid pick. State is unchanged: the previous selection,
    /// if any, is preserved; only a dismissible notice is raised.
    pub fn reject_pick(&mut self, name: &str) {
        self.notice = Some(format!(
            "'{name}' is not an APK. Choose a file ending in .apk."
        ));
    }

    /// Attempt the `start` transition. Returns the file to submit when the
    /// transition fires (from FileSelected or Failed), `None` otherwise.
    ///
    /// The guard makes `start` idempotent while Submitting: issuing it twice
    /// in direct succession yields exactly one submission.
    pub fn start(&mut self) -> Option<SelectedFile> {
        match &self.scan_state {
            ScanState::FileSelected(file) | ScanState::Failed(file, _) => {
                let file = file.clone();
                tracing::info!(file = %file.name, "Submission started");
                self.status_message = format!("Analysing {}\u{2026} this can take minutes.", file.name);
                self.notice = None;
                self.scan_state = ScanState::Submitting(file.clone());
                Some(file)
            }
            ScanState::Submitting(_) => {
                tracing::debug!("Start ignored: submission already in flight");
                None
            }
            ScanState::Idle | ScanState::Completed(_) => {
                tracing::debug!("Start ignored: no file selected");
                None
            }
        }
    }

    /// Apply a successful verdict tagged with the file it was produced for.
    /// Discarded when the tag no longer matches the in-flight submission.
    pub fn complete(&mut self, for_file: &SelectedFile, result: AnalysisResult) {
        if !self.tag_matches(for_file) {
            tracing::info!(file = %for_file.name, "Discarding stale analysis result");
            return;
        }
        self.status_message = format!(
            "Analysis of {} complete: {}.",
            for_file.name, result.classification
        );
        self.scan_state = ScanState::Completed(result);
    }

    /// Apply a submission failure tagged with the file it belongs to.
    /// Discarded when stale; otherwise the file is retained for retry.
    pub fn fail(&mut self, for_file: &SelectedFile, error: SubmitError) {
        if !self.tag_matches(for_file) {
            tracing::info!(file = %for_file.name, "Discarding stale submission failure");
            return;
        }
        tracing::warn!(file = %for_file.name, error = %error, "Submission failed");
        self.status_message = format!("Analysis of {} failed.", for_file.name);
        self.notice = Some(error.to_string());
        self.scan_state = ScanState::Failed(for_file.clone(), error);
    }

    /// True while a submission is in flight (disables re-submission in the UI).
    pub fn is_submitting(&self) -> bool {
        matches!(self.scan_state, ScanState::Submitting(_))
    }

    /// The currently selected file, in whichever state holds one.
    pub fn selected_file(&self) -> Option<&SelectedFile> {
        match &self.scan_state {
            ScanState::FileSelected(f) | ScanState::Submitting(f) | ScanState::Failed(f, _) => {
                Some(f)
            }
            ScanState::Idle | ScanState::Completed(_) => None,
        }
    }

    /// The renderable view of the current verdict, if one is live.
    /// Built once per frame by the gui loop and shared by the verdict and
    /// log panels rather than rebuilt in each.
    pub fn result_view(&self) -> Option<ResultView> {
        match &self.scan_state {
            ScanState::Completed(result) => Some(render::build_view(result)),
            _ => None,
        }
    }

    fn tag_matches(&self, for_file: &SelectedFile) -> bool {
        self.scan_state
            .in_flight_file()
            .is_some_and(|current| current.uri == for_file.uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn make_file(name: &str) -> SelectedFile {
        SelectedFile::from_path(&PathBuf::from(format!("/tmp/{name}")))
    }

    fn make_result(classification: &str) -> AnalysisResult {
        AnalysisResult {
            static_status: "success".to_string(),
            dynamic_status: "success".to_string(),
            classification: classification.to_string(),
            malicious_probability: 0.5,
            static_stage_log: Vec::new(),
            dynamic_stage_log: Vec::new(),
        }
    }

    fn make_state() -> AppState {
        AppState::new("http://127.0.0.1:8000/analyze_full/".to_string(), false)
    }

    #[test]
    fn test_pick_from_idle_selects_file() {
        let mut state = make_state();
        state.select_file(make_file("a.apk"));
        assert!(matches!(state.scan_state, ScanState::FileSelected(ref f) if f.name == "a.apk"));
    }

    #[test]
    fn test_pick_clears_prior_result() {
        let mut state = make_state();
        state.select_file(make_file("a.apk"));
        let file = state.start().unwrap();
        state.complete(&file, make_result("benign"));
        assert!(matches!(state.scan_state, ScanState::Completed(_)));

        state.select_file(make_file("b.apk"));
        assert!(matches!(state.scan_state, ScanState::FileSelected(ref f) if f.name == "b.apk"));
    }

    #[test]
    fn test_invalid_pick_leaves_state_unchanged() {
        let mut state = make_state();
        state.select_file(make_file("a.apk"));
        state.reject_pick("a.zip");
        assert!(matches!(state.scan_state, ScanState::FileSelected(ref f) if f.name == "a.apk"));
        assert!(state.notice.is_some());
    }

    #[test]
    fn test_start_requires_selection() {
        let mut state = make_state();
        assert!(state.start().is_none());
        assert!(matches!(state.scan_state, ScanState::Idle));
    }

    #[test]
    fn test_start_is_noop_while_submitting() {
        let mut state = make_state();
        state.select_file(make_file("a.apk"));
        assert!(state.start().is_some());
        // Second start in direct succession: exactly one submission.
        assert!(state.start().is_none());
        assert!(state.is_submitting());
    }

    #[test]
    fn test_success_transitions_to_completed() {
        let mut state = make_state();
        state.select_file(make_file("a.apk"));
        let file = state.start().unwrap();
        state.complete(&file, make_result("malicious"));
        assert!(
            matches!(state.scan_state, ScanState::Completed(ref r) if r.classification == "malicious")
        );
    }

    #[test]
    fn test_failure_retains_file_for_retry() {
        let mut state = make_state();
        state.select_file(make_file("a.apk"));
        let file = state.start().unwrap();
        state.fail(&file, SubmitError::Server { status: 500 });

        assert!(matches!(
            state.scan_state,
            ScanState::Failed(ref f, SubmitError::Server { status: 500 }) if f.name == "a.apk"
        ));

        // Retry reuses the same file without a new pick.
        let retry_file = state.start().expect("retry should fire from Failed");
        assert_eq!(retry_file.name, "a.apk");
        assert!(state.is_submitting());
    }

    #[test]
    fn test_stale_result_is_discarded_after_new_pick() {
        let mut state = make_state();
        state.select_file(make_file("a.apk"));
        let old_file = state.start().unwrap();

        // The user picks a new file while a.apk is still in flight.
        state.select_file(make_file("b.apk"));

        // a.apk's verdict arrives late and must not overwrite the selection.
        state.complete(&old_file, make_result("malicious"));
        assert!(matches!(state.scan_state, ScanState::FileSelected(ref f) if f.name == "b.apk"));
    }

    #[test]
    fn test_stale_failure_is_discarded_after_new_submission() {
        let mut state = make_state();
        state.select_file(make_file("a.apk"));
        let old_file = state.start().unwrap();

        state.select_file(make_file("b.apk"));
        let new_file = state.start().unwrap();

        // Old failure arrives late: discarded.
        state.fail(&old_file, SubmitError::Server { status: 500 });
        assert!(state.is_submitting());

        // The current submission's outcome still applies.
        state.complete(&new_file, make_result("benign"));
        assert!(matches!(state.scan_state, ScanState::Completed(_)));
    }

    #[test]
    fn test_result_is_discarded_when_not_submitting() {
        let mut state = make_state();
        let phantom = make_file("a.apk");
        state.complete(&phantom, make_result("benign"));
        assert!(matches!(state.scan_state, ScanState::Idle));
    }

    #[test]
    fn test_result_view_exists_only_for_completed() {
        let mut state = make_state();
        assert!(state.result_view().is_none());

        state.select_file(make_file("a.apk"));
        assert!(state.result_view().is_none());
        let file = state.start().unwrap();
        assert!(state.result_view().is_none());

        state.complete(&file, make_result("benign"));
        let view = state.result_view().expect("completed state has a view");
        assert!(view
            .status_rows
            .iter()
            .any(|(_, value)| value == "benign"));

        // A new pick clears the verdict and the view with it.
        state.select_file(make_file("b.apk"));
        assert!(state.result_view().is_none());
    }

    #[test]
    fn test_selected_file_visible_through_lifecycle() {
        let mut state = make_state();
        assert!(state.selected_file().is_none());

        state.select_file(make_file("a.apk"));
        assert_eq!(state.selected_file().unwrap().name, "a.apk");

        let file = state.start().unwrap();
        assert_eq!(state.selected_file().unwrap().name, "a.apk");

        state.fail(&file, SubmitError::Server { status: 502 });
        assert_eq!(state.selected_file().unwrap().name, "a.apk");
    }
}
