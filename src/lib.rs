pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::storage::{BundledStorage, LocalStorage};
pub use config::toml_config::TomlConfig;
pub use core::{lego_sets::LegoSetRepository, repository::Repository};
pub use domain::model::LegoSet;
pub use utils::error::{BricksetError, Result};
