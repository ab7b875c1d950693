// ApkSleuth - core/render.rs
//
// Result presentation model. Pure functions from `AnalysisResult` to a
// renderable structure; the egui panels draw this without touching the
// wire model directly. Core layer: no I/O, no UI dependencies.

use crate::core::model::AnalysisResult;
use crate::util::constants;

/// Renderable form of a completed analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    /// Label/value rows for the status block, in display order.
    pub status_rows: Vec<(&'static str, String)>,

    /// Static-stage log panel.
    pub static_log: LogPanelView,

    /// Dynamic-stage log panel.
    pub dynamic_log: LogPanelView,
}

/// One stage-log panel.
#[derive(Debug, Clone, PartialEq)]
pub struct LogPanelView {
    /// Panel heading.
    pub title: &'static str,

    /// Lines to display, in the order the service reported them.
    pub lines: Vec<String>,

    /// True when `lines` holds the fixed placeholder instead of real output.
    pub is_placeholder: bool,
}

impl LogPanelView {
    /// Build a panel view, substituting the placeholder for an empty log.
    fn new(title: &'static str, log: &[String]) -> Self {
        if log.is_empty() {
            Self {
                title,
                lines: vec![constants::NO_LOGS_PLACEHOLDER.to_string()],
                is_placeholder: true,
            }
        } else {
            Self {
                title,
                lines: log.to_vec(),
                is_placeholder: false,
            }
        }
    }
}

/// Format the malicious probability as a percentage with one decimal place.
///
/// The raw value is used as-is: a server value outside [0,1] produces an
/// out-of-range percentage rather than being clamped. That pass-through is
/// the current display contract.
pub fn format_probability(probability: f64) -> String {
    format!(
        "{:.prec$}%",
        probability * 100.0,
        prec = constants::PROBABILITY_DECIMALS
    )
}

/// Build the full renderable view for a completed analysis.
pub fn build_view(result: &AnalysisResult) -> ResultView {
    ResultView {
        status_rows: vec![
            ("Static analysis:", result.static_status.clone()),
            ("Dynamic analysis:", result.dynamic_status.clone()),
            ("Classification:", result.classification.clone()),
            (
                "Malicious probability:",
                format_probability(result.malicious_probability),
            ),
        ],
        static_log: LogPanelView::new("Static stage log", &result.static_stage_log),
        dynamic_log: LogPanelView::new("Dynamic stage log", &result.dynamic_stage_log),
    }
}
