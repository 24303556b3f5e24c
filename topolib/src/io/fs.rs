//! A module responsible for reading topology inputs from the file system.
use super::{GridMetadata, LvGrid, TopologyInput};

use serde::de::DeserializeOwned;
use std::io::{Error, ErrorKind};
use std::path::Path;

/// Returns true if the path has a `.yaml` or `.yml` extension.
fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Read and deserialize a file, as YAML if the extension says so and as JSON otherwise.
pub fn read_data_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> std::io::Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    if is_yaml(path) {
        match serde_yaml::from_str(&content) {
            Ok(value) => Ok(value),
            Err(error) => Err(Error::new(
                ErrorKind::InvalidData,
                format!("Failed to parse YAML ({}): {error}", path.display()),
            )),
        }
    } else {
        Ok(serde_json::from_str(&content)?)
    }
}

impl TopologyInput {
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<TopologyInput> {
        read_data_file(path)
    }
}

impl LvGrid {
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<LvGrid> {
        read_data_file(path)
    }
}

impl GridMetadata {
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<GridMetadata> {
        read_data_file(path)
    }
}
