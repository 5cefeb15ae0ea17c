//! CLI implementation for `payloadkit init`
//!
//! Writes the payloadkit.json sentinel config into a Payload project.

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::output::{confirm, print_detail, print_success, print_warning};
use crate::core::{init, project};

/// Execute the init command
pub async fn execute(path: &Path, yes: bool) -> Result<i32> {
    let info = project::detect(path);
    project::require_payload_project(&info, path)?;

    if info.initialized {
        print_warning("PayloadKit is already initialized (payloadkit.json exists)");
        return Ok(0);
    }

    if !yes && !confirm("Write payloadkit.json with default install paths?", true)? {
        print_detail("Aborted, nothing written");
        return Ok(0);
    }

    let result = init::initialize(path).with_context(|| "Failed to initialize PayloadKit")?;

    print_success(&format!(
        "Initialized PayloadKit in {}",
        path.display()
    ));
    print_detail(&format!("Created {}", result.config_path.display()));
    if let Some(name) = &info.project_name {
        print_detail(&format!("Project: {name}"));
    }
    if let Some(version) = &info.payload_version {
        print_detail(&format!("Payload version: {version}"));
    }

    Ok(0)
}
