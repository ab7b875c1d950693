// ApkSleuth - ui/theme.rs
//
// Verdict colour mapping and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Colour for a classification label.
///
/// Matching is case-insensitive on the service's known labels; anything
/// unrecognised renders in the neutral colour.
pub fn classification_colour(classification: &str) -> Color32 {
    match classification.to_lowercase().as_str() {
        "malicious" => Color32::from_rgb(220, 38, 38), // Red 600
        "suspicious" => Color32::from_rgb(217, 119, 6), // Amber 600
        "benign" | "clean" => Color32::from_rgb(34, 197, 94), // Green 500
        _ => Color32::from_rgb(209, 213, 219),         // Gray 300
    }
}

/// Notice (transient warning) colour.
pub const NOTICE_TEXT: Color32 = Color32::from_rgb(253, 186, 116); // Orange 300

/// Layout constants.
pub const CONTROLS_PANE_HEIGHT: f32 = 110.0;
pub const LOG_PANEL_MIN_HEIGHT: f32 = 160.0;
pub const STATUS_BAR_HEIGHT: f32 = 28.0;
