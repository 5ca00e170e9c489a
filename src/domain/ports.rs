use crate::utils::error::Result;

/// Source of named resource files.
pub trait ResourceStore {
    fn read_resource(&self, name: &str) -> Result<Vec<u8>>;
}

/// Where the catalog should be loaded from.
pub trait ConfigProvider {
    /// Directory to read the resource from; `None` selects the bundled catalog.
    fn data_dir(&self) -> Option<&str>;
    fn resource(&self) -> &str;
}
