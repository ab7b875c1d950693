// ApkSleuth - app/mod.rs
//
// Application layer: state machine and submission lifecycle.
// The eframe::App implementation itself lives in the binary (src/gui.rs).

pub mod state;
pub mod submit;
