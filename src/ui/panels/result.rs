// ApkSleuth - ui/panels/result.rs
//
// Verdict status block for a completed analysis.

use crate::app::state::{AppState, ScanState};
use crate::core::render::ResultView;
use crate::ui::theme;

/// Render the result status block (central panel, above the log panels).
///
/// `view` is the verdict view the gui loop built for this frame; it is
/// `Some` exactly when an analysis has completed.
pub fn render(ui: &mut egui::Ui, state: &AppState, view: Option<&ResultView>) {
    if let Some(view) = view {
        ui.strong("Analysis verdict");
        egui::Grid::new("result_status_block")
            .num_columns(2)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                for (label, value) in &view.status_rows {
                    ui.label(*label);
                    if *label == "Classification:" {
                        ui.colored_label(theme::classification_colour(value), value);
                    } else {
                        ui.label(value);
                    }
                    ui.end_row();
                }
            });
        return;
    }

    match &state.scan_state {
        ScanState::Failed(file, error) => {
            ui.strong("Analysis failed");
            ui.colored_label(
                theme::NOTICE_TEXT,
                format!("{}: {error}", file.name),
            );
            ui.weak("The file is still selected; use Retry analysis to submit it again.");
        }
        ScanState::Submitting(file) => {
            ui.weak(format!("Waiting for the analysis of {}\u{2026}", file.name));
        }
        _ => {
            ui.weak("No analysis result yet.");
        }
    }
}
