// ApkSleuth - ui/panels/logs.rs
//
// Stage-log panels: static and dynamic logs side by side, each in its own
// scroll area so they scroll independently. An empty log always shows the
// fixed placeholder sentence, never a blank panel.

use crate::core::render::{LogPanelView, ResultView};
use crate::ui::theme;

/// Render both stage-log panels (central panel, below the status block).
/// Only called while a verdict is live; `view` is the frame's shared view.
pub fn render(ui: &mut egui::Ui, view: &ResultView) {
    let half_width = ui.available_width() / 2.0 - 8.0;

    ui.horizontal_top(|ui| {
        render_panel(ui, &view.static_log, half_width, "stage_log_static");
        ui.separator();
        render_panel(ui, &view.dynamic_log, half_width, "stage_log_dynamic");
    });
}

fn render_panel(ui: &mut egui::Ui, panel: &LogPanelView, width: f32, id_salt: &str) {
    ui.vertical(|ui| {
        ui.set_width(width);
        ui.strong(panel.title);
        egui::ScrollArea::vertical()
            .id_salt(id_salt.to_string())
            .min_scrolled_height(theme::LOG_PANEL_MIN_HEIGHT)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for line in &panel.lines {
                    if panel.is_placeholder {
                        ui.weak(line);
                    } else {
                        ui.label(egui::RichText::new(line).monospace().size(11.5));
                    }
                }
            });
    });
}
