//! Project initialization logic
//!
//! Writes the default payloadkit.json sentinel config. Initialization is
//! idempotent: if the sentinel exists it is never overwritten.

use std::path::{Path, PathBuf};

use crate::core::kit_config::KitConfig;
use crate::error::ProjectError;

/// Result of initialization
#[derive(Debug)]
pub struct InitResult {
    /// Path of the sentinel config file
    pub config_path: PathBuf,
    /// Whether the config was written by this call
    pub created: bool,
}

/// Initialize PayloadKit in a project directory.
///
/// If the sentinel already exists, returns `created: false` and leaves
/// the file byte-identical.
pub fn initialize(project_dir: &Path) -> Result<InitResult, ProjectError> {
    let config_path = KitConfig::path_in(project_dir);

    if config_path.exists() {
        tracing::debug!("PayloadKit already initialized at {}", config_path.display());
        return Ok(InitResult {
            config_path,
            created: false,
        });
    }

    KitConfig::default().save(project_dir)?;
    Ok(InitResult {
        config_path,
        created: true,
    })
}
