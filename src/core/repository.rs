use crate::domain::ports::ResourceStore;
use crate::utils::error::{BricksetError, Result};
use serde::de::DeserializeOwned;

/// Read-only collection of records deserialized from a JSON array resource.
///
/// The whole resource is parsed at construction; a missing or malformed
/// resource fails the load and no partial collection is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Repository<T> {
    resource: String,
    records: Vec<T>,
}

impl<T: DeserializeOwned> Repository<T> {
    pub fn load<S: ResourceStore>(store: &S, resource: &str) -> Result<Self> {
        let bytes = store.read_resource(resource)?;
        let records: Vec<T> =
            serde_json::from_slice(&bytes).map_err(|source| BricksetError::ResourceParseError {
                resource: resource.to_string(),
                source,
            })?;

        tracing::info!("Loaded {} records from {}", records.len(), resource);
        Ok(Self::from_records(resource, records))
    }

    pub fn from_json_str(resource: &str, json: &str) -> Result<Self> {
        let records: Vec<T> =
            serde_json::from_str(json).map_err(|source| BricksetError::ResourceParseError {
                resource: resource.to_string(),
                source,
            })?;
        Ok(Self::from_records(resource, records))
    }
}

impl<T> Repository<T> {
    pub fn from_records(resource: impl Into<String>, records: Vec<T>) -> Self {
        Self {
            resource: resource.into(),
            records,
        }
    }

    pub fn get_all(&self) -> &[T] {
        &self.records
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
