// ApkSleuth - net/mod.rs
//
// Network layer: the analysis-service submission client.

pub mod client;
