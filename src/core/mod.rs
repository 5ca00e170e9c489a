#[cfg(feature = "cli")]
pub mod commands;
pub mod lego_sets;
pub mod report;
pub mod repository;
