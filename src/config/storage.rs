use crate::domain::ports::ResourceStore;
use crate::utils::error::{BricksetError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Reads resources from a directory on disk.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl ResourceStore for LocalStorage {
    fn read_resource(&self, name: &str) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(name);
        tracing::debug!("Reading resource from {}", full_path.display());

        fs::read(&full_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => BricksetError::ResourceNotFound {
                resource: full_path.display().to_string(),
            },
            _ => BricksetError::IoError(e),
        })
    }
}

pub const BUNDLED_RESOURCE: &str = "brickset.json";

const BUNDLED_CATALOG: &str = include_str!("../../data/brickset.json");

/// Serves the catalog compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledStorage;

impl ResourceStore for BundledStorage {
    fn read_resource(&self, name: &str) -> Result<Vec<u8>> {
        if name == BUNDLED_RESOURCE {
            Ok(BUNDLED_CATALOG.as_bytes().to_vec())
        } else {
            Err(BricksetError::ResourceNotFound {
                resource: name.to_string(),
            })
        }
    }
}
