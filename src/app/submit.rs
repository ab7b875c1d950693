// ApkSleuth - app/submit.rs
//
// Submission lifecycle management. Runs the upload on a background thread,
// sending tagged progress messages to the UI thread via an mpsc channel.
//
// Architecture:
//   - `SubmitManager` lives on the UI thread; `run_submission` runs on a
//     background thread.
//   - Every message carries the `SelectedFile` the submission was launched
//     against; the state layer discards messages whose tag is stale.
//   - There is no cancellation: once submitted, the request runs to
//     completion or failure. A superseded transfer finishes in the
//     background and its tagged outcome is simply discarded.

use crate::core::model::{SelectedFile, SubmitProgress};
use crate::net::client::AnalysisClient;
use std::sync::mpsc;

/// Manages submissions on a background thread.
pub struct SubmitManager {
    /// Channel receiver for the UI to poll progress messages.
    progress_rx: Option<mpsc::Receiver<SubmitProgress>>,
}

impl SubmitManager {
    pub fn new() -> Self {
        Self { progress_rx: None }
    }

    /// Launch a submission of `file` to `endpoint`.
    ///
    /// Spawns a background thread immediately; the caller must have taken
    /// the `start` transition first so the guard against concurrent
    /// submissions has already fired. Replacing the receiver of a superseded
    /// submission is safe: the old thread's sends fail and it exits quietly.
    pub fn start_submission(&mut self, file: SelectedFile, endpoint: String) {
        let (tx, rx) = mpsc::channel();
        self.progress_rx = Some(rx);

        std::thread::spawn(move || {
            run_submission(file, endpoint, tx);
        });
    }

    /// Poll for progress messages without blocking. Returns all pending messages.
    pub fn poll_progress(&self) -> Vec<SubmitProgress> {
        let mut messages = Vec::new();
        if let Some(ref rx) = self.progress_rx {
            while let Ok(msg) = rx.try_recv() {
                messages.push(msg);
            }
        }
        messages
    }
}

impl Default for SubmitManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Background submission: build the request, wait for the verdict, report.
///
/// Runs on a background thread. Sends tagged `SubmitProgress` messages to
/// `tx`; if the receiver is gone (UI closed or submission superseded) it
/// exits quietly.
fn run_submission(file: SelectedFile, endpoint: String, tx: mpsc::Sender<SubmitProgress>) {
    if tx
        .send(SubmitProgress::Started { file: file.clone() })
        .is_err()
    {
        return;
    }

    let outcome = AnalysisClient::new().and_then(|client| client.submit(&file, &endpoint));

    let message = match outcome {
        Ok(result) => SubmitProgress::Completed { file, result },
        Err(error) => SubmitProgress::Failed { file, error },
    };

    // Receiver dropped (UI closed); exit quietly.
    let _ = tx.send(message);
}
