// ApkSleuth - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Configuration loading (endpoint, theme, log level)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use apksleuth::app;
pub use apksleuth::core;
pub use apksleuth::net;
pub use apksleuth::platform;
pub use apksleuth::ui;
pub use apksleuth::util;

use apksleuth::core::picker::{self, PickOutcome};
use clap::Parser;
use std::path::PathBuf;

/// ApkSleuth - submit Android packages to a remote analysis service.
///
/// Select an APK, send it for combined static/dynamic analysis, and review
/// the verdict and stage logs.
#[derive(Parser, Debug)]
#[command(name = "ApkSleuth", version, about)]
struct Cli {
    /// APK to pre-select (opens the file dialog if omitted).
    apk: Option<PathBuf>,

    /// Analysis endpoint URL (overrides config.toml).
    #[arg(short = 'e', long = "endpoint")]
    endpoint: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and load config before logging init so the
    // configured level can take effect. Both stages report problems as
    // return values; nothing is logged until the subscriber is installed.
    let (platform_paths, path_warning) = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "ApkSleuth starting"
    );
    tracing::debug!(config_dir = %platform_paths.config_dir.display(), "Platform paths resolved");

    for warning in path_warning.iter().chain(&config_warnings) {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    // Determine the endpoint: CLI override > config.toml > default.
    // A bad CLI value fails fast; a bad config value already degraded to a
    // warning inside load_config.
    let endpoint = match cli.endpoint {
        Some(value) => {
            if let Err(e) = platform::config::validate_endpoint(&value) {
                tracing::error!(error = %e, "Invalid --endpoint value");
                eprintln!("Error: {e}");
                std::process::exit(2);
            }
            value
        }
        None => config.endpoint.clone(),
    };

    tracing::info!(endpoint = %endpoint, "Ready to launch GUI");

    // Create application state
    let mut state = app::state::AppState::new(endpoint, cli.debug);

    // A path provided on the CLI goes through the same validation rule as
    // the dialog; an invalid one becomes the usual dismissible notice.
    if let Some(ref path) = cli.apk {
        match picker::validate_pick(path) {
            PickOutcome::Selected(file) => state.select_file(file),
            PickOutcome::Invalid { name } => state.reject_pick(&name),
            PickOutcome::Cancelled => {}
        }
    }

    let dark_mode = config.dark_mode;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_theme(if dark_mode {
                egui::Theme::Dark
            } else {
                egui::Theme::Light
            });
            Ok(Box::new(gui::ApkSleuthApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch ApkSleuth GUI: {e}");
        std::process::exit(1);
    }
}
