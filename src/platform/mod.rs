// ApkSleuth - platform/mod.rs
//
// Platform layer: configuration paths and config.toml loading.

pub mod config;
