// ApkSleuth - util/mod.rs
//
// Shared utilities: constants, typed errors, logging setup.

pub mod constants;
pub mod error;
pub mod logging;
