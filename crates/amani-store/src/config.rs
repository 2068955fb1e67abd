use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CacheError, CacheResult};

/// Project id that ships in checked-in sample configuration.
///
/// A config still carrying this value (or none at all) means no real
/// backend is provisioned; the session then runs against the local tiers
/// only.
pub const PLACEHOLDER_PROJECT_ID: &str = "demo-project";

/// Connection settings for the remote document backend.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BackendConfig {
    pub project_id: String,
    pub api_key: String,
    /// Collection holding the single content document.
    pub collection: String,
    /// Document id within the collection.
    pub document: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            project_id: PLACEHOLDER_PROJECT_ID.into(),
            api_key: String::new(),
            collection: "site_content".into(),
            document: "main".into(),
        }
    }
}

impl BackendConfig {
    /// Returns `true` when the config names a real backend project.
    ///
    /// This is the single environment-driven branch in the engine: an
    /// unconfigured session never attempts remote I/O.
    pub fn is_configured(&self) -> bool {
        !self.project_id.is_empty() && self.project_id != PLACEHOLDER_PROJECT_ID
    }

    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> CacheResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|e| CacheError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }
}
