//! Project detection
//!
//! Determines whether the working directory is a PayloadCMS project (via
//! package.json dependencies) and whether PayloadKit has been initialized
//! (sentinel payloadkit.json). Missing and malformed package.json are
//! distinguished so misconfiguration is not silently masked, but both
//! resolve to "not a Payload project".

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::core::kit_config::KitConfig;
use crate::error::ProjectError;

/// Dependency name that marks a PayloadCMS project
pub const PAYLOAD_DEPENDENCY: &str = "payload";

/// Outcome of reading package.json
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageJsonStatus {
    /// No package.json in the directory
    Missing,
    /// package.json exists but could not be parsed
    Malformed(String),
    /// package.json parsed successfully
    Parsed {
        /// Whether a payload dependency or devDependency is declared
        has_payload: bool,
    },
}

/// Information derived from inspecting a project directory
#[derive(Debug, Clone)]
pub struct ProjectInfo {
    /// package.json read outcome
    pub package_json: PackageJsonStatus,
    /// Project name from package.json
    pub project_name: Option<String>,
    /// Declared payload version constraint
    pub payload_version: Option<String>,
    /// Whether the payloadkit.json sentinel exists
    pub initialized: bool,
}

impl ProjectInfo {
    /// True iff package.json declares a payload dependency.
    ///
    /// Fails closed: missing or malformed package.json is "no".
    pub fn is_payload_project(&self) -> bool {
        matches!(self.package_json, PackageJsonStatus::Parsed { has_payload: true })
    }
}

#[derive(Debug, Deserialize)]
struct PackageJson {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    dependencies: HashMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: HashMap<String, String>,
}

/// Inspect a directory and derive [`ProjectInfo`]
pub fn detect(project_dir: &Path) -> ProjectInfo {
    let initialized = KitConfig::exists_in(project_dir);
    let package_json_path = project_dir.join("package.json");

    if !package_json_path.exists() {
        return ProjectInfo {
            package_json: PackageJsonStatus::Missing,
            project_name: None,
            payload_version: None,
            initialized,
        };
    }

    let content = match std::fs::read_to_string(&package_json_path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Failed to read {}: {e}", package_json_path.display());
            return ProjectInfo {
                package_json: PackageJsonStatus::Malformed(e.to_string()),
                project_name: None,
                payload_version: None,
                initialized,
            };
        }
    };

    match serde_json::from_str::<PackageJson>(&content) {
        Ok(pkg) => {
            let payload_version = pkg
                .dependencies
                .get(PAYLOAD_DEPENDENCY)
                .or_else(|| pkg.dev_dependencies.get(PAYLOAD_DEPENDENCY))
                .cloned();
            ProjectInfo {
                package_json: PackageJsonStatus::Parsed {
                    has_payload: payload_version.is_some(),
                },
                project_name: pkg.name,
                payload_version,
                initialized,
            }
        }
        Err(e) => {
            tracing::warn!("Malformed {}: {e}", package_json_path.display());
            ProjectInfo {
                package_json: PackageJsonStatus::Malformed(e.to_string()),
                project_name: None,
                payload_version: None,
                initialized,
            }
        }
    }
}

/// Require a Payload project, reporting why the directory is not one.
///
/// Missing, malformed, and payload-less package.json each get their own
/// error so the user sees the actual problem.
pub fn require_payload_project(info: &ProjectInfo, project_dir: &Path) -> Result<(), ProjectError> {
    match &info.package_json {
        PackageJsonStatus::Parsed { has_payload: true } => Ok(()),
        PackageJsonStatus::Parsed { has_payload: false } => Err(ProjectError::NotPayloadProject {
            path: project_dir.to_path_buf(),
        }),
        PackageJsonStatus::Missing => Err(ProjectError::PackageJsonMissing {
            path: project_dir.to_path_buf(),
        }),
        PackageJsonStatus::Malformed(error) => Err(ProjectError::PackageJsonMalformed {
            path: project_dir.join("package.json"),
            error: error.clone(),
        }),
    }
}
