// ApkSleuth - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the panels and drives the submission lifecycle: progress
// messages from the submission thread are polled each frame and applied as
// tagged state transitions, and intents raised by panels (pick, start) are
// executed here.

use crate::app::state::AppState;
use crate::app::submit::SubmitManager;
use crate::core::model::SubmitProgress;
use crate::core::picker::{self, PickOutcome};
use crate::ui;

/// The ApkSleuth application.
pub struct ApkSleuthApp {
    pub state: AppState,
    pub submit_manager: SubmitManager,
}

impl ApkSleuthApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            submit_manager: SubmitManager::new(),
        }
    }
}

impl eframe::App for ApkSleuthApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll for submission progress. Every message is tagged with the
        // file it belongs to; complete/fail discard stale tags.
        let messages = self.submit_manager.poll_progress();
        let had_messages = !messages.is_empty();
        for msg in messages {
            match msg {
                SubmitProgress::Started { file } => {
                    tracing::debug!(file = %file.name, "Upload in progress");
                }
                SubmitProgress::Completed { file, result } => {
                    self.state.complete(&file, result);
                }
                SubmitProgress::Failed { file, error } => {
                    self.state.fail(&file, error);
                }
            }
        }
        // Repaint while a submission is pending so the spinner stays live.
        if had_messages || self.state.is_submitting() {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }

        // ---- Handle flags set by panels ----
        // request_pick: the controls panel asked for the file dialog.
        if self.state.request_pick {
            self.state.request_pick = false;
            match picker::pick_file() {
                PickOutcome::Selected(file) => self.state.select_file(file),
                PickOutcome::Cancelled => {} // silent, by contract
                PickOutcome::Invalid { name } => self.state.reject_pick(&name),
            }
        }
        // request_start: the controls panel asked for a submission. The
        // start transition guards against double-starts; only a fired
        // transition launches a thread.
        if self.state.request_start {
            self.state.request_start = false;
            if let Some(file) = self.state.start() {
                let endpoint = self.state.endpoint.clone();
                self.submit_manager.start_submission(file, endpoint);
            }
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Select APK\u{2026}").clicked() {
                        self.state.request_pick = true;
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if self.state.is_submitting() {
                        ui.spinner();
                    }
                    ui.label(&self.state.status_message);
                });
            });

        // Controls pane (top)
        egui::TopBottomPanel::top("controls_pane")
            .resizable(false)
            .min_height(ui::theme::CONTROLS_PANE_HEIGHT)
            .show(ctx, |ui| {
                ui::panels::controls::render(ui, &mut self.state);
            });

        // Central panel: verdict plus stage logs. The verdict view is built
        // once per frame and shared by both panels.
        let view = self.state.result_view();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::result::render(ui, &self.state, view.as_ref());
            ui.separator();
            if let Some(view) = &view {
                ui::panels::logs::render(ui, view);
            }
        });
    }
}
