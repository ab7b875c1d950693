// ApkSleuth - ui/panels/mod.rs

pub mod controls;
pub mod logs;
pub mod result;
