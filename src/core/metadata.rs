//! Install metadata (.payloadkit.json)
//!
//! A small audit record written next to each installed item. Write-only:
//! nothing in the tooling reads it back, but it lets users see when and
//! from where an item was installed.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::defaults::INSTALL_METADATA_FILE_NAME;
use crate::error::InstallError;
use crate::infra::filesystem;
use crate::registry::RegistryItem;

/// Metadata recorded for an installed item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InstalledMetadata {
    /// Item name
    pub name: String,

    /// Item description at install time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// RFC 3339 install timestamp
    pub installed_at: String,

    /// Item version at install time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Where the item came from (registry URL or local path)
    pub source: String,
}

impl InstalledMetadata {
    /// Build metadata for an item installed now
    pub fn for_item(item: &RegistryItem, source: &str) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            installed_at: chrono::Utc::now().to_rfc3339(),
            version: item.version.clone(),
            source: source.to_string(),
        }
    }

    /// Path of the metadata file inside an installed item directory
    pub fn path_in(item_dir: &Path) -> PathBuf {
        item_dir.join(INSTALL_METADATA_FILE_NAME)
    }

    /// Write the metadata file into an installed item directory
    pub fn write_to(&self, item_dir: &Path) -> Result<(), InstallError> {
        let path = Self::path_in(item_dir);
        filesystem::write_json(&path, self).map_err(|e| InstallError::Metadata {
            path,
            error: e.to_string(),
        })
    }
}
