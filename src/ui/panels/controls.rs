// ApkSleuth - ui/panels/controls.rs
//
// Selection and submission controls: chosen file, analyse button, endpoint
// line, and the transient notice area. Panels never perform I/O; they raise
// intents through the request flags on AppState and the gui loop executes
// them.

use crate::app::state::{AppState, ScanState};
use crate::ui::theme;

/// Render the controls pane (top panel).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        if ui.button("Select APK\u{2026}").clicked() {
            state.request_pick = true;
        }

        match state.selected_file() {
            Some(file) => {
                ui.label(egui::RichText::new(&file.name).monospace());
            }
            None => {
                ui.weak("No file selected.");
            }
        }
    });

    ui.horizontal(|ui| {
        // Re-submission is disabled while a submission is pending; the pick
        // button above stays enabled so a new file can supersede it.
        let can_start = matches!(
            state.scan_state,
            ScanState::FileSelected(_) | ScanState::Failed(..)
        );
        let label = if matches!(state.scan_state, ScanState::Failed(..)) {
            "Retry analysis"
        } else {
            "Analyse"
        };
        if ui.add_enabled(can_start, egui::Button::new(label)).clicked() {
            state.request_start = true;
        }

        if state.is_submitting() {
            ui.spinner();
            ui.weak("Submitting\u{2026} analysis can take several minutes.");
        }
    });

    ui.horizontal(|ui| {
        ui.weak("Endpoint:");
        ui.label(egui::RichText::new(&state.endpoint).monospace().size(11.5));
    });

    // Transient notice (invalid pick or submission failure), dismissible.
    let mut dismissed = false;
    if let Some(ref notice) = state.notice {
        ui.horizontal(|ui| {
            ui.colored_label(theme::NOTICE_TEXT, notice);
            if ui.small_button("Dismiss").clicked() {
                dismissed = true;
            }
        });
    }
    if dismissed {
        state.notice = None;
    }
}
