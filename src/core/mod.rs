// ApkSleuth - core/mod.rs
//
// Core layer: data model, selection validation, and the pure result
// presentation logic.

pub mod model;
pub mod picker;
pub mod render;
