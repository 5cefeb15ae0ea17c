//! Per-project configuration (payloadkit.json)
//!
//! The presence of this file at the project root is the sentinel for
//! "PayloadKit initialized". It maps each item kind to an install path
//! and import alias and records the registry location.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::defaults::{CONFIG_FILE_NAME, CONFIG_VERSION};
use crate::config::urls;
use crate::error::ProjectError;
use crate::infra::filesystem;
use crate::registry::ItemKind;

/// Install target for one item kind
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KindTarget {
    /// Install path relative to the project root
    pub path: String,

    /// Import alias used in generated code
    pub alias: String,
}

impl KindTarget {
    fn for_kind(kind: ItemKind) -> Self {
        Self {
            path: kind.default_path().to_string(),
            alias: kind.default_alias().to_string(),
        }
    }
}

/// The payloadkit.json configuration file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KitConfig {
    /// Config schema version
    pub version: String,

    /// Registry base URL
    pub registry: String,

    /// Local registry directory override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_path: Option<String>,

    pub blocks: KindTarget,
    pub components: KindTarget,
    pub globals: KindTarget,
    pub collections: KindTarget,
    pub plugins: KindTarget,
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            registry: urls::COMPONENT_REGISTRY.to_string(),
            registry_path: None,
            blocks: KindTarget::for_kind(ItemKind::Block),
            components: KindTarget::for_kind(ItemKind::Component),
            globals: KindTarget::for_kind(ItemKind::Global),
            collections: KindTarget::for_kind(ItemKind::Collection),
            plugins: KindTarget::for_kind(ItemKind::Plugin),
        }
    }
}

impl KitConfig {
    /// Path of the config file inside a project
    pub fn path_in(project_dir: &Path) -> PathBuf {
        project_dir.join(CONFIG_FILE_NAME)
    }

    /// Whether the sentinel config file exists
    pub fn exists_in(project_dir: &Path) -> bool {
        Self::path_in(project_dir).is_file()
    }

    /// Load the config from a project directory.
    ///
    /// A missing file yields the defaults; every kind falls back to its
    /// hard-coded path. A malformed file is an error, not a silent
    /// default.
    pub fn load_or_default(project_dir: &Path) -> Result<Self, ProjectError> {
        let path = Self::path_in(project_dir);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ProjectError::IoError {
            path: path.clone(),
            error: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| ProjectError::ConfigParse {
            path,
            error: e.to_string(),
        })
    }

    /// Write the config to a project directory
    pub fn save(&self, project_dir: &Path) -> Result<(), ProjectError> {
        let path = Self::path_in(project_dir);
        filesystem::write_json(&path, self).map_err(|e| ProjectError::IoError {
            path,
            error: e.to_string(),
        })
    }

    /// The configured target for one kind
    pub fn target(&self, kind: ItemKind) -> &KindTarget {
        match kind {
            ItemKind::Block => &self.blocks,
            ItemKind::Component => &self.components,
            ItemKind::Global => &self.globals,
            ItemKind::Collection => &self.collections,
            ItemKind::Plugin => &self.plugins,
        }
    }

    /// Resolve the absolute install directory for one kind.
    ///
    /// Total: always returns a path, configured or default.
    pub fn install_dir(&self, kind: ItemKind, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.target(kind).path)
    }
}
